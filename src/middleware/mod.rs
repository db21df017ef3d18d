pub mod cors;
pub mod dni_path;
pub mod json_body;
pub mod panic;
pub mod response;

pub use cors::{cors_middleware, CorsHeaders};
pub use dni_path::DniPath;
pub use json_body::JsonBody;
pub use panic::PanicResponder;
pub use response::{ApiResponse, ApiResult};
