//! The fixed note color palette.
//!
//! Eight entries. A note's `color` column is free text, so nothing here is
//! used to validate fetched rows: an unknown value simply has no palette
//! entry and matches no color chip.

use crate::defaults;

/// One palette entry: display label and stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PALETTE: [PaletteColor; 8] = [
    PaletteColor { label: "Default", value: "#FFFFFF" },
    PaletteColor { label: "Red", value: "#FF4C4C" },
    PaletteColor { label: "Orange", value: "#FF9F40" },
    PaletteColor { label: "Yellow", value: "#FFD93D" },
    PaletteColor { label: "Green", value: "#4CAF50" },
    PaletteColor { label: "Blue", value: "#4F86F7" },
    PaletteColor { label: "Purple", value: "#9C27B0" },
    PaletteColor { label: "Pink", value: "#FF66B2" },
];

/// Exact lookup by stored value.
pub fn by_value(value: &str) -> Option<&'static PaletteColor> {
    PALETTE.iter().find(|c| c.value == value)
}

/// Resolve command-line input to a stored color value.
///
/// Accepts a palette label (any case), a palette value (exact), or the draft
/// sentinel. Anything else is `None`.
pub fn resolve(input: &str) -> Option<&'static str> {
    if input == defaults::DRAFT_COLOR {
        return Some(defaults::DRAFT_COLOR);
    }
    PALETTE
        .iter()
        .find(|c| c.value == input || c.label.eq_ignore_ascii_case(input))
        .map(|c| c.value)
}

/// Hex used to draw a swatch for a stored value.
///
/// The draft sentinel draws as white.
pub fn swatch_hex(value: &str) -> &str {
    if value == defaults::DRAFT_COLOR {
        PALETTE[0].value
    } else {
        value
    }
}

/// Human label for a stored value, if it is a palette color.
pub fn label_for(value: &str) -> Option<&'static str> {
    if value == defaults::DRAFT_COLOR {
        return Some(PALETTE[0].label);
    }
    by_value(value).map(|c| c.label)
}
