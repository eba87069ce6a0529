use std::collections::HashMap;

/// HTTP methods the service routes on.
///
/// Everything else fails method parsing and is answered with 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Submit data
    POST,
    /// OPTIONS - CORS preflight
    OPTIONS,
}

impl Method {
    /// Parses an HTTP method from its wire form (case-sensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "OPTIONS" => Some(Method::OPTIONS),
            _ => None,
        }
    }
}

/// A (loosely) parsed HTTP request.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request path (e.g., "/analyze")
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
    /// Bytes after the blank-line separator; `None` when the separator
    /// never showed up in the data that was read.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
