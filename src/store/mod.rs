// store/mod.rs - Record storage seam
//
// The service only ever talks to `PersonRepository`; the in-memory map is
// one implementation of it.

pub mod memory;

pub use memory::MemoryRepository;

use crate::models::Person;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result of an atomic insert-if-absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was stored.
    Inserted(Person),
    /// A record with the same dni was already present; it is returned untouched.
    Exists(Person),
}

/// Concurrent keyed storage for people.
///
/// Every method must be safe to call from many request tasks at once without
/// external locking. Returned values are owned copies and never alias the
/// stored data.
pub trait PersonRepository: Send + Sync {
    /// Snapshot of every stored record, in no particular order.
    fn find_all(&self) -> Vec<Person>;

    fn find_by_dni(&self, dni: &str) -> Option<Person>;

    /// Insert or overwrite the record stored under `person.dni`.
    fn save(&self, person: Person) -> Result<Person, StoreError>;

    /// Remove the record stored under `dni`, reporting whether one existed.
    fn delete(&self, dni: &str) -> bool;

    /// Store `person` only if its dni is not taken, as a single atomic step.
    fn insert_if_absent(&self, person: Person) -> Result<InsertOutcome, StoreError>;

    /// Overwrite `name` and `age` of the record under `dni`, as a single
    /// atomic step. The stored dni never changes.
    fn update_if_present(&self, dni: &str, name: String, age: i32) -> Option<Person>;

    fn count(&self) -> usize;
}

pub(crate) fn require_dni(person: &Person) -> Result<(), StoreError> {
    if person.dni.is_empty() {
        return Err(StoreError::InvalidArgument("dni must not be empty".to_string()));
    }
    Ok(())
}
