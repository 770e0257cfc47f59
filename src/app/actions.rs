#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Resize,

    // Swatch selection
    SelectPrev,
    SelectNext,
    SelectFirst,
    SelectLast,

    // Palette
    AddColor,
    RemoveColor,
    Shuffle,

    // Hex editing of the selected swatch
    BeginEdit,
    InputChar(char),
    Backspace,
    CommitEdit,
    CancelEdit,

    // Overlays
    ToggleMenu,
    ToggleHelp,
    MenuUp,
    MenuDown,
    MenuActivate,
}
