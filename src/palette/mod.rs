//! Palette engine: two endpoint colors and the linear blend between them

use crate::color::{self, Color, ColorError};
use rand::Rng;
use serde::Serialize;

pub const MIN_COLORS: usize = 5;
pub const MAX_COLORS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error(transparent)]
    InvalidColor(#[from] ColorError),
    #[error("position {position} is out of range (palette has {len} colors)")]
    IndexOutOfRange { position: usize, len: usize },
}

/// A color placed in the palette. `id` is its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub id: usize,
    #[serde(flatten)]
    pub color: Color,
}

impl Swatch {
    pub fn new(id: usize, color: Color) -> Self {
        Self { id, color }
    }

    pub fn hex(&self) -> &str {
        self.color.hex()
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.color.rgb()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Swatch>,
    color_count: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(MIN_COLORS)
    }
}

impl Palette {
    /// Empty palette; `color_count` is clamped into `[MIN_COLORS, MAX_COLORS]`.
    pub fn new(color_count: usize) -> Self {
        Self {
            colors: Vec::new(),
            color_count: color_count.clamp(MIN_COLORS, MAX_COLORS),
        }
    }

    pub fn colors(&self) -> &[Swatch] {
        &self.colors
    }

    pub fn color_count(&self) -> usize {
        self.color_count
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn first_color(&self) -> Option<&Swatch> {
        self.colors.first()
    }

    pub fn last_color(&self) -> Option<&Swatch> {
        self.colors.last()
    }

    pub fn can_add_color(&self) -> bool {
        self.color_count < MAX_COLORS
    }

    pub fn can_remove_color(&self) -> bool {
        self.color_count > MIN_COLORS
    }

    /// Set both endpoints and expand to the full palette.
    ///
    /// Both values are parsed before anything is touched, so a bad value
    /// leaves the palette as it was.
    pub fn seed_defaults(&mut self, first: &str, last: &str) -> Result<(), PaletteError> {
        let first = Color::from_hex(first)?;
        let last = Color::from_hex(last)?;
        self.colors = vec![Swatch::new(0, first), Swatch::new(1, last)];
        self.regenerate_inbetweens();
        Ok(())
    }

    /// Seed from two freshly generated random colors.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PaletteError> {
        let first = color::random_hex(rng);
        let last = color::random_hex(rng);
        self.seed_defaults(&first, &last)
    }

    /// Rebuild every position between the endpoints for the current count.
    pub fn regenerate_inbetweens(&mut self) {
        let (Some(first), Some(last)) = (self.colors.first(), self.colors.last()) else {
            return;
        };
        let colors = blend(&first.color, &last.color, self.color_count);
        tracing::debug!(
            first = %first.color,
            last = %last.color,
            count = self.color_count,
            "regenerated palette"
        );
        self.colors = colors;
    }

    /// Overwrite a single position. Neighbours are left untouched, even
    /// when `position` is an endpoint.
    pub fn set_color_at_position(&mut self, position: usize, value: &str) -> Result<(), PaletteError> {
        if position >= self.colors.len() {
            return Err(PaletteError::IndexOutOfRange {
                position,
                len: self.colors.len(),
            });
        }
        let color = Color::from_hex(value)?;
        self.colors[position] = Swatch::new(position, color);
        Ok(())
    }

    /// Grow by one color. Returns `false` (and changes nothing) at the maximum.
    pub fn add_color(&mut self) -> bool {
        if !self.can_add_color() {
            return false;
        }
        self.color_count += 1;
        self.regenerate_inbetweens();
        true
    }

    /// Shrink by one color. Returns `false` (and changes nothing) at the minimum.
    pub fn remove_color(&mut self) -> bool {
        if !self.can_remove_color() {
            return false;
        }
        self.color_count -= 1;
        self.regenerate_inbetweens();
        true
    }

    /// Replace both endpoints with new random colors and rebuild.
    pub fn shuffle_colors<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PaletteError> {
        self.seed_random(rng)
    }
}

/// Linear RGB blend from `first` to `last` over `count` positions.
///
/// Endpoints are copied as-is; inbetween channels are rounded half-up.
/// A `count` below 2 is treated as 2.
pub fn blend(first: &Color, last: &Color, count: usize) -> Vec<Swatch> {
    let count = count.max(2);
    let from = first.rgb();
    let to = last.rgb();

    let diff: [f64; 3] = std::array::from_fn(|c| (f64::from(from[c]) - f64::from(to[c])).abs());
    let step_fraction = 1.0 / (count - 1) as f64;

    let mut colors = Vec::with_capacity(count);
    colors.push(Swatch::new(0, first.clone()));
    for k in 0..count - 2 {
        let channels: [f64; 3] = std::array::from_fn(|c| {
            // diff * (step * n): the grouping decides which side of .5 a channel lands on.
            let offset = diff[c] * (step_fraction * (k + 1) as f64);
            if to[c] > from[c] {
                f64::from(from[c]) + offset
            } else {
                f64::from(from[c]) - offset
            }
        });
        colors.push(Swatch::new(k + 1, Color::from_channels(channels)));
    }
    colors.push(Swatch::new(count - 1, last.clone()));
    colors
}
