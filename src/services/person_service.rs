use std::sync::Arc;

use crate::models::{Person, PersonPayload};
use crate::store::{InsertOutcome, PersonRepository, StoreError};
use crate::types::{CreateOutcome, UpdateOutcome};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Create/replace/delete rules on top of a `PersonRepository`.
///
/// Create and replace each issue exactly one atomic repository call, so two
/// concurrent creates of the same dni cannot both succeed.
#[derive(Clone)]
pub struct PersonService {
    repository: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(repository: Arc<dyn PersonRepository>) -> Self {
        Self { repository }
    }

    pub fn list_all(&self) -> Vec<Person> {
        self.repository.find_all()
    }

    pub fn get_by_dni(&self, dni: &str) -> Option<Person> {
        self.repository.find_by_dni(dni)
    }

    pub fn create(&self, person: Person) -> Result<CreateOutcome, ServiceError> {
        if person.dni.is_empty() {
            return Err(ServiceError::InvalidArgument("person and dni required".to_string()));
        }

        match self.repository.insert_if_absent(person)? {
            InsertOutcome::Inserted(created) => {
                tracing::info!(dni = %created.dni, "person created");
                Ok(CreateOutcome::Created(created))
            }
            InsertOutcome::Exists(existing) => {
                tracing::debug!(dni = %existing.dni, "create rejected, dni already taken");
                Ok(CreateOutcome::Conflict(existing))
            }
        }
    }

    /// Apply `name` and `age` from the payload to the record under `dni`.
    /// The payload's own dni is ignored.
    pub fn update(&self, dni: &str, patch: PersonPayload) -> UpdateOutcome {
        match self.repository.update_if_present(dni, patch.name, patch.age) {
            Some(updated) => {
                tracing::info!(dni = %dni, "person updated");
                UpdateOutcome::Updated(updated)
            }
            None => UpdateOutcome::NotFound,
        }
    }

    pub fn delete(&self, dni: &str) -> bool {
        let removed = self.repository.delete(dni);
        if removed {
            tracing::info!(dni = %dni, "person deleted");
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.repository.count()
    }
}
