//! HTTP request handlers for the web server.

mod api;
mod helpers;
mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use api::{
    api_classify, api_ocr, api_status, api_template, api_templates, api_transcribe, api_tts,
};
pub use pages::{analyze_page, index, speak_page, template_page, transcribe_page};
pub use static_files::serve_css;
