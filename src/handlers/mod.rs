// handlers/mod.rs - HTTP handlers
//
// people/   the /people resource (list, create, get, replace, delete)
// health    liveness probe with the current record count
// fallback  JSON 404 for every unmatched method/path

pub mod fallback;
pub mod health;
pub mod people;

pub use fallback::not_found;
pub use health::health;
