pub mod help;
pub mod menu;
pub mod prompt;
pub mod root;
pub mod swatches;
