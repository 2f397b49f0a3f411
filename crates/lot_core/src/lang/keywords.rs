//! Define the reserved keyword vocabulary for the lot language.
//!
//! This module is the single source of truth for statement keywords: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) that records the canonical spelling, the operands each keyword expects, and
//! a one-line description.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; there are no aliases and no prefix matches.
//! - Every keyword starts a statement. The `operands` metadata is what the parser expects after the keyword.
//!
//! ## Examples
//! ```rust
//! use lot_core::lang::keywords::{self, KeywordId, OperandKind};
//!
//! assert_eq!(keywords::from_str("status"), Some(KeywordId::Status));
//! assert_eq!(keywords::from_str("Status"), None);
//! assert_eq!(keywords::info_for(KeywordId::Park).operands, &[OperandKind::String, OperandKind::String]);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    CreateParkingLot,
    Park,
    Leave,
    Status,
    RegistrationNumbersForCarsWithColour,
    SlotNumbersForCarsWithColour,
    SlotNumberForRegistrationNumber,
}

/// Token class of a keyword operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// A run of decimal digits.
    Int,
    /// A bare word (registration number or colour).
    String,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub operands: &'static [OperandKind],
    pub description: &'static str,
}

/// Registry of all keywords, in the order they are usually introduced to users.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::CreateParkingLot,
        "create_parking_lot",
        &[OperandKind::Int],
        "Create a parking lot with the given number of slots, discarding any previous one.",
    ),
    info(
        KeywordId::Park,
        "park",
        &[OperandKind::String, OperandKind::String],
        "Park a car (registration number, colour) in the lowest free slot.",
    ),
    info(
        KeywordId::Leave,
        "leave",
        &[OperandKind::Int],
        "Free the given 1-based slot.",
    ),
    info(KeywordId::Status, "status", &[], "Print every occupied slot."),
    info(
        KeywordId::RegistrationNumbersForCarsWithColour,
        "registration_numbers_for_cars_with_colour",
        &[OperandKind::String],
        "Print the registration numbers of all cars with the given colour.",
    ),
    info(
        KeywordId::SlotNumbersForCarsWithColour,
        "slot_numbers_for_cars_with_colour",
        &[OperandKind::String],
        "Print the slot numbers of all cars with the given colour.",
    ),
    info(
        KeywordId::SlotNumberForRegistrationNumber,
        "slot_number_for_registration_number",
        &[OperandKind::String],
        "Print the slot number of the car with the given registration number.",
    ),
];

/// Return the registry entry for `id`.
///
/// ## Panics
/// - Only if [`KEYWORDS`] is missing an entry for `id`, which the guardrail tests rule out.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a KEYWORDS entry")
}

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    operands: &'static [OperandKind],
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        operands,
        description,
    }
}
