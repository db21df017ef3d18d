use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::{require_dni, InsertOutcome, PersonRepository, StoreError};
use crate::models::Person;

/// Sharded in-memory map from dni to person.
///
/// Per-key operations lock a single shard, so unrelated keys never contend.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    people: DashMap<String, Person>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersonRepository for MemoryRepository {
    fn find_all(&self) -> Vec<Person> {
        self.people.iter().map(|entry| entry.value().clone()).collect()
    }

    fn find_by_dni(&self, dni: &str) -> Option<Person> {
        self.people.get(dni).map(|entry| entry.value().clone())
    }

    fn save(&self, person: Person) -> Result<Person, StoreError> {
        require_dni(&person)?;
        self.people.insert(person.dni.clone(), person.clone());
        Ok(person)
    }

    fn delete(&self, dni: &str) -> bool {
        self.people.remove(dni).is_some()
    }

    fn insert_if_absent(&self, person: Person) -> Result<InsertOutcome, StoreError> {
        require_dni(&person)?;
        match self.people.entry(person.dni.clone()) {
            Entry::Occupied(existing) => Ok(InsertOutcome::Exists(existing.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(person.clone());
                Ok(InsertOutcome::Inserted(person))
            }
        }
    }

    fn update_if_present(&self, dni: &str, name: String, age: i32) -> Option<Person> {
        self.people.get_mut(dni).map(|mut entry| {
            let person = entry.value_mut();
            person.name = name;
            person.age = age;
            person.clone()
        })
    }

    fn count(&self) -> usize {
        self.people.len()
    }
}
