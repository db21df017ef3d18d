// handlers/people/mod.rs - People resource handlers
//
// One file per route operation:
//   GET    /people        collection_get
//   POST   /people        collection_post
//   GET    /people/:dni   record_get
//   PUT    /people/:dni   record_put
//   DELETE /people/:dni   record_delete

pub mod collection_get;
pub mod collection_post;
pub mod record_delete;
pub mod record_get;
pub mod record_put;

pub use collection_get::collection_get;
pub use collection_post::collection_post;
pub use record_delete::record_delete;
pub use record_get::record_get;
pub use record_put::record_put;
