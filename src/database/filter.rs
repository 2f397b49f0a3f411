//! Predicates for [`Database::filter_cars`](super::Database::filter_cars) and
//! [`Database::filter_slots`](super::Database::filter_slots).

use super::car::Car;

/// Match cars whose colour is spelled exactly `colour`.
///
/// An unknown colour is not an error here: it simply matches nothing.
pub fn by_colour(colour: &str) -> impl Fn(&Car) -> bool + '_ {
    move |car| car.colour().as_str() == colour
}

/// Match the car with registration number `registration_number`.
pub fn by_registration_number(registration_number: &str) -> impl Fn(&Car) -> bool + '_ {
    move |car| car.registration_number() == registration_number
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_colour() {
        let car = Car::new("KA-01-HH-1234", "White").unwrap();
        assert!(by_colour("White")(&car));
        assert!(!by_colour("white")(&car));
        assert!(!by_colour("Purple")(&car));
    }

    #[test]
    fn test_by_registration_number() {
        let car = Car::new("KA-01-HH-1234", "White").unwrap();
        assert!(by_registration_number("KA-01-HH-1234")(&car));
        assert!(!by_registration_number("KA-01-HH-9999")(&car));
    }
}
