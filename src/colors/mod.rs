//! Finder color reference data
//!
//! The Finder defines eight fixed color categories for file labels. This
//! module provides the closed [`ColorIndex`] enumeration with its stable
//! integer identity, and the [`ColorTable`] lookup that maps each index to
//! its canonical display label and swatch colors.
//!
//! The table is constructed explicitly and passed around as an immutable
//! value rather than living in global state, so tests can substitute a
//! custom table (e.g. to model a non-English locale) deterministically.

pub mod error;

pub use error::ColorError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Standard Finder color indexes
///
/// The integer identity (0-7) is fixed by the platform and used for
/// interchange, e.g. in the Finder's synced preferences property list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorIndex {
    None = 0,
    Grey = 1,
    Green = 2,
    Purple = 3,
    Blue = 4,
    Yellow = 5,
    Red = 6,
    Orange = 7,
}

impl ColorIndex {
    /// All color indexes in raw-value order
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Grey,
        Self::Green,
        Self::Purple,
        Self::Blue,
        Self::Yellow,
        Self::Red,
        Self::Orange,
    ];

    /// Reconstruct a color index from its raw platform value
    ///
    /// # Errors
    /// Returns `ColorError::InvalidIndex` if the value is outside 0-7.
    pub const fn from_raw(raw: i64) -> Result<Self, ColorError> {
        match raw {
            0 => Ok(Self::None),
            1 => Ok(Self::Grey),
            2 => Ok(Self::Green),
            3 => Ok(Self::Purple),
            4 => Ok(Self::Blue),
            5 => Ok(Self::Yellow),
            6 => Ok(Self::Red),
            7 => Ok(Self::Orange),
            _ => Err(ColorError::InvalidIndex(raw)),
        }
    }

    /// The raw platform value for this index
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ColorIndex {
    type Error = ColorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(i64::from(value))
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Grey => "grey",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Orange => "orange",
        };
        write!(f, "{name}")
    }
}

/// An sRGB swatch color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One Finder color label definition
///
/// Carries two swatch tones: `color` is a high-contrast tone matching what
/// the Finder actually paints, `finder_color` is the muted tone the
/// platform reports for the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    /// The fixed index for this color
    pub index: ColorIndex,
    /// The canonical display label (e.g. "Red")
    pub label: String,
    /// High-contrast swatch tone
    pub color: Rgb,
    /// Muted tone as reported by the platform
    pub finder_color: Rgb,
}

impl ColorDefinition {
    #[must_use]
    pub const fn new(index: ColorIndex, label: String, color: Rgb, finder_color: Rgb) -> Self {
        Self {
            index,
            label,
            color,
            finder_color,
        }
    }
}

/// Immutable lookup table of Finder color definitions
///
/// `ColorIndex::None` carries no definition: the platform's label list has
/// an empty entry at index 0, so "no color" never contributes a label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorTable {
    definitions: Vec<ColorDefinition>,
}

impl ColorTable {
    /// Build a table from explicit definitions
    #[must_use]
    pub fn new(definitions: Vec<ColorDefinition>) -> Self {
        Self { definitions }
    }

    /// The standard English Finder labels and swatch tones
    #[must_use]
    pub fn finder_default() -> Self {
        let defs = [
            (ColorIndex::Grey, "Gray", (142, 142, 147), (156, 156, 158)),
            (ColorIndex::Green, "Green", (40, 205, 65), (97, 191, 91)),
            (ColorIndex::Purple, "Purple", (175, 82, 222), (172, 134, 191)),
            (ColorIndex::Blue, "Blue", (0, 122, 255), (91, 148, 233)),
            (ColorIndex::Yellow, "Yellow", (255, 204, 0), (234, 197, 82)),
            (ColorIndex::Red, "Red", (255, 59, 48), (227, 93, 90)),
            (ColorIndex::Orange, "Orange", (255, 149, 0), (233, 150, 77)),
        ];

        Self::new(
            defs.into_iter()
                .map(|(index, label, c, f)| {
                    ColorDefinition::new(
                        index,
                        label.to_string(),
                        Rgb::new(c.0, c.1, c.2),
                        Rgb::new(f.0, f.1, f.2),
                    )
                })
                .collect(),
        )
    }

    /// All definitions in the table, in raw-index order
    #[must_use]
    pub fn definitions(&self) -> &[ColorDefinition] {
        &self.definitions
    }

    /// Look up the definition for a color index
    #[must_use]
    pub fn definition(&self, index: ColorIndex) -> Option<&ColorDefinition> {
        self.definitions.iter().find(|d| d.index == index)
    }

    /// Look up the definition carrying the given canonical label
    #[must_use]
    pub fn definition_labelled(&self, label: &str) -> Option<&ColorDefinition> {
        self.definitions.iter().find(|d| d.label == label)
    }

    /// The canonical label for a color index, if the table defines one
    #[must_use]
    pub fn label(&self, index: ColorIndex) -> Option<&str> {
        self.definition(index).map(|d| d.label.as_str())
    }

    /// The color index whose canonical label matches the given string
    #[must_use]
    pub fn index_of_label(&self, label: &str) -> Option<ColorIndex> {
        self.definition_labelled(label).map(|d| d.index)
    }

    /// The set of all canonical color labels in the table
    #[must_use]
    pub fn all_labels(&self) -> BTreeSet<String> {
        self.definitions.iter().map(|d| d.label.clone()).collect()
    }

    /// Definitions in the Finder's fixed presentation order
    ///
    /// The Finder shows its swatch row as grey, purple, blue, green,
    /// yellow, orange, red rather than raw-index order.
    #[must_use]
    pub fn rainbow_ordered(&self) -> Vec<&ColorDefinition> {
        [
            ColorIndex::Grey,
            ColorIndex::Purple,
            ColorIndex::Blue,
            ColorIndex::Green,
            ColorIndex::Yellow,
            ColorIndex::Orange,
            ColorIndex::Red,
        ]
        .iter()
        .filter_map(|&index| self.definition(index))
        .collect()
    }
}
