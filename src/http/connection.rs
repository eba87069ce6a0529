use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::BytesMut;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::analysis::Analyzer;
use crate::http::parser;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::http::writer;

/// Upper bound on buffered request bytes. Anything beyond this is
/// truncated rather than rejected.
const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// Handles one accepted connection: read a request, route it, write the
/// response, done. There is no keep-alive; the caller drops the socket
/// when `run` returns.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    analyzer: Arc<Analyzer>,
}

impl Connection {
    pub fn new(stream: TcpStream, analyzer: Arc<Analyzer>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            analyzer,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        if !self.read_request().await? {
            // Client went away without sending anything
            return Ok(());
        }

        let response = match parser::parse_request(&self.buffer) {
            Ok(request) => handle_request(&self.analyzer, &request)?,
            Err(_) => Response::error(StatusCode::NotFound, "Not found"),
        };

        writer::write_response(&mut self.stream, &response).await
    }

    /// Reads until the request looks complete (headers plus Content-Length
    /// bytes of body), the client closes its side, or the buffer cap is
    /// hit. Over-cap requests are truncated, not rejected.
    async fn read_request(&mut self) -> anyhow::Result<bool> {
        loop {
            if parser::request_complete(&self.buffer) || self.buffer.len() >= MAX_REQUEST_BYTES {
                break;
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                break;
            }
        }

        Ok(!self.buffer.is_empty())
    }
}

/// Routing table. Every route here produces exactly one response:
///
/// - `GET /health` → capability/status document
/// - `POST /analyze` → run the analyzer over the body's `text` field
/// - `OPTIONS *` → CORS preflight
/// - anything else → 404
pub fn handle_request(analyzer: &Analyzer, request: &Request) -> anyhow::Result<Response> {
    match (request.method, request.path.as_str()) {
        (Method::GET, "/health") => health_response(),
        (Method::POST, "/analyze") => analyze_response(analyzer, request),
        (Method::OPTIONS, _) => Ok(Response::preflight()),
        _ => Ok(Response::error(StatusCode::NotFound, "Not found")),
    }
}

fn analyze_response(analyzer: &Analyzer, request: &Request) -> anyhow::Result<Response> {
    let body = match &request.body {
        Some(body) => String::from_utf8_lossy(body),
        None => {
            return Ok(Response::error(
                StatusCode::BadRequest,
                "Invalid request body",
            ));
        }
    };

    let text = match parser::extract_text_field(&body) {
        Some(text) => text,
        None => {
            return Ok(Response::error(
                StatusCode::BadRequest,
                "Missing text field",
            ));
        }
    };

    let result = analyzer.analyze(&text);
    Ok(Response::json(StatusCode::Ok, serde_json::to_vec(&result)?))
}

/// The `GET /health` document. Field order is part of the wire contract.
#[derive(Serialize)]
struct HealthDoc {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    timestamp: u64,
    uptime: &'static str,
    endpoints: HealthEndpoints,
    capabilities: HealthCapabilities,
}

#[derive(Serialize)]
struct HealthEndpoints {
    health: &'static str,
    analyze: &'static str,
}

#[derive(Serialize)]
struct HealthCapabilities {
    sentiment_analysis: bool,
    keyword_extraction: bool,
    word_counting: bool,
    reading_time: bool,
}

fn health_response() -> anyhow::Result<Response> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let doc = HealthDoc {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp,
        uptime: "running",
        endpoints: HealthEndpoints {
            health: "GET /health",
            analyze: "POST /analyze",
        },
        capabilities: HealthCapabilities {
            sentiment_analysis: true,
            keyword_extraction: true,
            word_counting: true,
            reading_time: true,
        },
    };

    Ok(Response::json(StatusCode::Ok, serde_json::to_vec(&doc)?))
}
