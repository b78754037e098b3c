pub mod http;

// Re-export common utilities
pub use http::{upload_gist, web_get, HttpError};
