use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    InvalidRequestLine,
    InvalidMethod,
}

/// Byte offset of the `\r\n\r\n` header/body separator, if present.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Whether `buf` holds everything the client is going to send: complete
/// headers plus `Content-Length` bytes of body (zero when the header is
/// absent or unparseable).
pub fn request_complete(buf: &[u8]) -> bool {
    match find_headers_end(buf) {
        Some(end) => {
            let head = String::from_utf8_lossy(&buf[..end]);
            buf.len() >= end + 4 + content_length(&head)
        }
        None => false,
    }
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Permissive parse of one request out of `buf`.
///
/// The request line is taken from the first line; header lines that do not
/// look like `Key: value` are skipped rather than rejected. `body` is
/// `None` when the blank-line separator never arrived, which the analyze
/// route reports as a 400. An unrecognized method is a parse error, which
/// the connection handler answers with 404.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let headers_end = find_headers_end(buf);
    let head_bytes = match headers_end {
        Some(end) => &buf[..end],
        None => buf,
    };
    let head = String::from_utf8_lossy(head_bytes);

    let mut lines = head.split("\r\n");

    // Request line
    let request_line = lines.next().unwrap_or("");
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let path = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().unwrap_or("HTTP/1.1");

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    let body = headers_end.map(|end| buf[end + 4..].to_vec());

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    })
}

/// Extracts the value of the first `"text"` field from a JSON-ish body.
///
/// Deliberately not a JSON parser: the value is whatever sits between the
/// opening quote and the first unescaped quote, and only the `\n` and `\"`
/// escape sequences are decoded afterwards. Anything else in the body,
/// including additional fields, is ignored.
pub fn extract_text_field(body: &str) -> Option<String> {
    let after_key = &body[body.find("\"text\"")? + "\"text\"".len()..];
    let after_colon = after_key.trim_start().strip_prefix(':')?;
    let value = after_colon.trim_start().strip_prefix('"')?;

    let mut end = None;
    let mut escaped = false;

    for (i, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => {
                end = Some(i);
                break;
            }
            _ => {}
        }
    }

    Some(unescape_text(&value[..end?]))
}

/// Decodes the two escape sequences the analyze route understands, `\n`
/// and `\"`. Every other sequence passes through untouched.
fn unescape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n') => {
                    chars.next();
                    out.push('\n');
                }
                Some('"') => {
                    chars.next();
                    out.push('"');
                }
                _ => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET /health HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request(req).unwrap();

        assert_eq!(parsed.path, "/health");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
        assert_eq!(parsed.body, Some(Vec::new()));
    }

    #[test]
    fn unescape_leaves_unknown_sequences_alone() {
        assert_eq!(unescape_text(r"a\tb"), r"a\tb");
        assert_eq!(unescape_text(r"line\nbreak"), "line\nbreak");
        assert_eq!(unescape_text(r#"say \"hi\""#), r#"say "hi""#);
    }
}
