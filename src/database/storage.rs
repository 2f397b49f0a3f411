//! Slot storage backends.
//!
//! [`Storage`] is the capability the rest of the interpreter programs against: a fixed number of slots, each either
//! empty or holding one [`Car`]. [`MemoryStorage`] is the real backend; [`FileStorage`] reserves the `file` backend
//! name and fails every operation.

use std::path::{Path, PathBuf};

use lot_core::errors::{IDENTITY_CONFLICT_MSG, PARKING_LOT_FULL_MSG};
use thiserror::Error;

use super::car::Car;

/// Largest capacity `create_parking_lot` accepts. This is an implementation limit.
pub const MAX_CAPACITY: usize = 1 << 20;

/// Storage-level failures. Each renders as the single line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("{}", PARKING_LOT_FULL_MSG)]
    Full,

    #[error("{}", IDENTITY_CONFLICT_MSG)]
    Identity,

    /// `slot` is 1-based, as the user wrote it.
    #[error("slot number {slot} out of range [1, {capacity}]")]
    OutOfRange { slot: i64, capacity: usize },

    #[error("invalid capacity {0}")]
    InvalidCapacity(i64),

    #[error("capacity {capacity} exceeds this interpreter's limit of {max} slots")]
    CapacityTooLarge { capacity: usize, max: usize },

    #[error("{0} storage is not implemented")]
    Unimplemented(&'static str),
}

/// Fixed-capacity slot storage.
///
/// ## Notes
/// - Indices are 0-based here; the executor converts to and from the 1-based slots users see.
/// - Slot indices are stable: removing a car never moves another one.
pub trait Storage {
    /// Replace the contents with `capacity` empty slots.
    fn init(&mut self, capacity: usize) -> Result<(), StorageError>;

    /// Put `car` in the lowest free slot and return its index.
    ///
    /// ## Errors
    /// - [`StorageError::Identity`] if a car with the same registration number is parked in any slot.
    /// - [`StorageError::Full`] if no slot is free.
    fn save(&mut self, car: Car) -> Result<usize, StorageError>;

    /// Empty slot `index`. Emptying an already-empty slot is not an error.
    ///
    /// ## Errors
    /// - [`StorageError::OutOfRange`] if `index >= capacity`.
    fn remove(&mut self, index: usize) -> Result<(), StorageError>;

    /// Every slot in index order, empty ones included.
    fn all(&self) -> Result<&[Option<Car>], StorageError>;

    fn capacity(&self) -> Result<usize, StorageError> {
        Ok(self.all()?.len())
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Keeps every slot in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Vec<Option<Car>>,
}

impl MemoryStorage {
    /// Create a storage with zero slots. `init` must be called before anything can be saved.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn init(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity > MAX_CAPACITY {
            return Err(StorageError::CapacityTooLarge {
                capacity,
                max: MAX_CAPACITY,
            });
        }
        self.slots = vec![None; capacity];
        Ok(())
    }

    fn save(&mut self, car: Car) -> Result<usize, StorageError> {
        let mut free = None;
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(parked) if parked.registration_number() == car.registration_number() => {
                    return Err(StorageError::Identity);
                }
                None if free.is_none() => free = Some(i),
                _ => {}
            }
        }

        let index = free.ok_or(StorageError::Full)?;
        self.slots[index] = Some(car);
        Ok(index)
    }

    fn remove(&mut self, index: usize) -> Result<(), StorageError> {
        let capacity = self.slots.len();
        let slot = self.slots.get_mut(index).ok_or_else(|| StorageError::OutOfRange {
            slot: i64::try_from(index).map_or(i64::MAX, |i| i.saturating_add(1)),
            capacity,
        })?;
        *slot = None;
        Ok(())
    }

    fn all(&self) -> Result<&[Option<Car>], StorageError> {
        Ok(&self.slots)
    }
}

// ============================================================================
// File backend
// ============================================================================

/// Name reserved for a file-backed store. Not implemented: every operation fails.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unimplemented<T>(&self) -> Result<T, StorageError> {
        tracing::debug!(path = %self.path.display(), "file storage operation rejected");
        Err(StorageError::Unimplemented("file"))
    }
}

impl Storage for FileStorage {
    fn init(&mut self, _capacity: usize) -> Result<(), StorageError> {
        self.unimplemented()
    }

    fn save(&mut self, _car: Car) -> Result<usize, StorageError> {
        self.unimplemented()
    }

    fn remove(&mut self, _index: usize) -> Result<(), StorageError> {
        self.unimplemented()
    }

    fn all(&self) -> Result<&[Option<Car>], StorageError> {
        self.unimplemented()
    }
}
