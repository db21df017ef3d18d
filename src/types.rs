//! Shared outcome types passed from the service to the HTTP handlers

use crate::models::Person;

/// Result of a create request.
///
/// Handlers match on this exhaustively, so a duplicate dni can never fall
/// through as a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Person),
    /// The dni is already taken; carries the record that kept it.
    Conflict(Person),
}

/// Result of a replace request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(Person),
    NotFound,
}
