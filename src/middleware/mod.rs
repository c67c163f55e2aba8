// ABOUTME: HTTP middleware for cross-origin access, preflight answers, and panic recovery
// ABOUTME: Layers applied by the server around every route, including fallbacks

/// Cross-origin resource sharing
pub mod cors;
/// Conversion of handler panics into JSON 500 responses
pub mod panic;
/// Uniform answer to `OPTIONS` requests
pub mod preflight;

pub use cors::setup_cors;
pub use panic::handle_panic;
pub use preflight::answer_preflight;
