use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

/// A person record, identified by its national id (`dni`).
///
/// Identity is the `dni` alone: two records with the same `dni` compare
/// equal regardless of `name` or `age`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub dni: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, dni: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            dni: dni.into(),
            age,
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.dni == other.dni
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dni.hash(state);
    }
}

/// Request body for create and replace.
///
/// Missing fields fall back to empty strings and zero; wrong JSON types are
/// still rejected by serde. `age` takes any JSON number and truncates it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonPayload {
    pub name: String,
    pub dni: String,
    #[serde(deserialize_with = "truncated_int")]
    pub age: i32,
}

/// Narrow any JSON number to `i32`: fractions are truncated toward zero,
/// out-of-range integers keep their low 32 bits.
fn truncated_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(i) = number.as_i64() {
        Ok(i as i32)
    } else if let Some(u) = number.as_u64() {
        Ok(u as i32)
    } else {
        Ok(number.as_f64().map(|f| f as i32).unwrap_or_default())
    }
}

impl From<PersonPayload> for Person {
    fn from(payload: PersonPayload) -> Self {
        Person {
            name: payload.name,
            dni: payload.dni,
            age: payload.age,
        }
    }
}
