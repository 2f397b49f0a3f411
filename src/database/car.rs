//! The parked-car value type.
//!
//! A [`Car`] is validated exactly once, when it is constructed. Everything downstream (storage, filters, status
//! rendering) can rely on the registration number having the expected shape and the colour being known.

use std::fmt;

use lot_core::lang::colours::{self, ColourId};
use thiserror::Error;

/// Why a car could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarError {
    #[error("car registration number {0:?} is invalid")]
    InvalidRegistrationNumber(String),

    #[error("car colour {0:?} is invalid")]
    InvalidColour(String),
}

/// A car with a validated registration number and colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    registration_number: String,
    colour: ColourId,
}

impl Car {
    /// Validate and construct a car.
    ///
    /// The registration number must look like `KA-01-HH-1234`: two uppercase letters, two digits, one or two
    /// uppercase letters, then three or four digits, separated by hyphens. The colour must be one of the spellings
    /// in `lot_core::lang::colours` (case-sensitive).
    pub fn new(registration_number: &str, colour: &str) -> Result<Self, CarError> {
        if !is_valid_registration_number(registration_number) {
            return Err(CarError::InvalidRegistrationNumber(registration_number.to_string()));
        }
        let colour = colours::from_str(colour).ok_or_else(|| CarError::InvalidColour(colour.to_string()))?;

        Ok(Self {
            registration_number: registration_number.to_string(),
            colour,
        })
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn colour(&self) -> ColourId {
        self.colour
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.registration_number, self.colour)
    }
}

/// Match `^[A-Z]{2}-[0-9]{2}-[A-Z]{1,2}-[0-9]{3,4}$`.
fn is_valid_registration_number(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    let [state, district, series, number] = parts.as_slice() else {
        return false;
    };

    segment(state, 2, 2, |b| b.is_ascii_uppercase())
        && segment(district, 2, 2, |b| b.is_ascii_digit())
        && segment(series, 1, 2, |b| b.is_ascii_uppercase())
        && segment(number, 3, 4, |b| b.is_ascii_digit())
}

fn segment(s: &str, min: usize, max: usize, class: fn(&u8) -> bool) -> bool {
    (min..=max).contains(&s.len()) && s.as_bytes().iter().all(class)
}
