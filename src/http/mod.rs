//! Minimal HTTP layer.
//!
//! Deliberately not a compliant HTTP/1.1 implementation: one request per
//! connection, no keep-alive, no chunked transfer, and a bounded receive
//! buffer. Just enough protocol to serve the analysis endpoints.
//!
//! # Submodules
//!
//! - **`connection`**: per-connection handler; reads one request, routes it,
//!   writes one response, then lets the socket drop
//! - **`parser`**: permissive request parsing plus the `text`-field
//!   extractor used by the analyze route
//! - **`request`**: parsed request representation
//! - **`response`**: response representation with builder and CORS/JSON
//!   helpers
//! - **`writer`**: response framing and socket writes

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
