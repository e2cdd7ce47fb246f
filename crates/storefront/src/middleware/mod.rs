//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Security headers (CSP, framing, etc.)

pub mod security_headers;

pub use security_headers::security_headers_middleware;
