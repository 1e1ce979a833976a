//! Shared utility functions.
//!
//! - `format`: Human-readable formatting (sizes, etc.)
//! - `http`: HTTP client construction for provider calls
//! - `mime`: Upload content sniffing

mod format;
mod http;
mod mime;

pub use format::format_size;
pub use http::build_http_client;
pub use mime::{data_uri, sniff_audio, sniff_image, UploadError};
