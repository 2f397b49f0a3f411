//! The parking lot database: a storage backend plus read-only filtering.

pub mod car;
pub mod filter;
pub mod storage;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub use car::{Car, CarError};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

/// Which storage backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    #[default]
    Memory,
    File,
}

impl StorageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Memory => "memory",
            StorageKind::File => "file",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {0:?} storage type: use \"memory\" or \"file\"")]
pub struct InvalidStorageKind(pub String);

impl FromStr for StorageKind {
    type Err = InvalidStorageKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(StorageKind::Memory),
            "file" => Ok(StorageKind::File),
            _ => Err(InvalidStorageKind(s.to_string())),
        }
    }
}

/// A predicate over parked cars. `None` in the filter calls means "match everything".
pub type CarFilter<'a> = &'a dyn Fn(&Car) -> bool;

/// Owns one storage backend for the duration of a run.
pub struct Database {
    storage: Box<dyn Storage>,
}

impl Database {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// A database over a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// Open the backend named by `kind`. `path` is only used by [`StorageKind::File`].
    pub fn open(kind: StorageKind, path: Option<PathBuf>) -> Self {
        match kind {
            StorageKind::Memory => Self::in_memory(),
            StorageKind::File => Self::new(Box::new(FileStorage::new(path.unwrap_or_default()))),
        }
    }

    pub fn init(&mut self, capacity: usize) -> Result<(), StorageError> {
        self.storage.init(capacity)
    }

    pub fn save(&mut self, car: Car) -> Result<usize, StorageError> {
        self.storage.save(car)
    }

    pub fn remove(&mut self, index: usize) -> Result<(), StorageError> {
        self.storage.remove(index)
    }

    pub fn all(&self) -> Result<&[Option<Car>], StorageError> {
        self.storage.all()
    }

    pub fn capacity(&self) -> Result<usize, StorageError> {
        self.storage.capacity()
    }

    /// Parked cars matching `filter`, in slot order.
    pub fn filter_cars(&self, filter: Option<CarFilter<'_>>) -> Result<Vec<&Car>, StorageError> {
        Ok(self
            .occupied()?
            .filter(|(_, car)| filter.is_none_or(|f| f(car)))
            .map(|(_, car)| car)
            .collect())
    }

    /// 0-based indices of the slots whose car matches `filter`, ascending.
    pub fn filter_slots(&self, filter: Option<CarFilter<'_>>) -> Result<Vec<usize>, StorageError> {
        Ok(self
            .occupied()?
            .filter(|(_, car)| filter.is_none_or(|f| f(car)))
            .map(|(index, _)| index)
            .collect())
    }

    fn occupied(&self) -> Result<impl Iterator<Item = (usize, &Car)>, StorageError> {
        let slots = self.storage.all()?;
        Ok(slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|car| (index, car))))
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("capacity", &self.capacity().ok())
            .finish_non_exhaustive()
    }
}
