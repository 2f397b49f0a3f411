//! Define the colour vocabulary accepted for parked cars.
//!
//! The colour set is closed: a car can only be constructed with one of the spellings in [`COLOURS`]. Queries are
//! not validated against it, so asking for an unknown colour is simply a query with no matches.
//!
//! ## Examples
//! ```rust
//! use lot_core::lang::colours::{self, ColourId};
//!
//! assert_eq!(colours::from_str("White"), Some(ColourId::White));
//! assert_eq!(colours::from_str("white"), None);
//! assert_eq!(ColourId::Black.as_str(), "Black");
//! ```

use std::fmt;

/// Stable identifier for every accepted colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourId {
    White,
    Yellow,
    Red,
    Blue,
    Green,
    Brown,
    Black,
}

/// Metadata for a colour.
#[derive(Debug, Clone, Copy)]
pub struct ColourInfo {
    pub id: ColourId,
    pub canonical: &'static str,
}

/// Registry of all colours.
pub const COLOURS: &[ColourInfo] = &[
    ColourInfo {
        id: ColourId::White,
        canonical: "White",
    },
    ColourInfo {
        id: ColourId::Yellow,
        canonical: "Yellow",
    },
    ColourInfo {
        id: ColourId::Red,
        canonical: "Red",
    },
    ColourInfo {
        id: ColourId::Blue,
        canonical: "Blue",
    },
    ColourInfo {
        id: ColourId::Green,
        canonical: "Green",
    },
    ColourInfo {
        id: ColourId::Brown,
        canonical: "Brown",
    },
    ColourInfo {
        id: ColourId::Black,
        canonical: "Black",
    },
];

impl ColourId {
    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ColourId::White => "White",
            ColourId::Yellow => "Yellow",
            ColourId::Red => "Red",
            ColourId::Blue => "Blue",
            ColourId::Green => "Green",
            ColourId::Brown => "Brown",
            ColourId::Black => "Black",
        }
    }
}

impl fmt::Display for ColourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup by exact, case-sensitive spelling.
pub fn from_str(s: &str) -> Option<ColourId> {
    COLOURS.iter().find(|c| c.canonical == s).map(|c| c.id)
}
