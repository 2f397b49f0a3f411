//! Shared user-facing messages used by the interpreter and its tests.
//!
//! Keeping these in one place means the executor, the storage errors, and the scenario tests cannot drift apart.

/// Printed (on the diagnostic channel) when a query matches no parked car.
pub const NOT_FOUND_MSG: &str = "Not found";

/// Printed when `park` finds no free slot.
pub const PARKING_LOT_FULL_MSG: &str = "Sorry, parking lot is full";

/// Printed when `park` is given a registration number that is already parked.
pub const IDENTITY_CONFLICT_MSG: &str = "Identity thieves are not welcome, calling police";
