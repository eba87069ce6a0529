use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response into wire bytes: status line, headers, blank
/// line, body.
pub fn encode_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

/// Writes the whole response to the stream, handling partial writes.
pub async fn write_response(stream: &mut TcpStream, resp: &Response) -> anyhow::Result<()> {
    let buf = encode_response(resp);
    let mut written = 0;

    while written < buf.len() {
        let n = stream.write(&buf[written..]).await?;

        if n == 0 {
            anyhow::bail!("connection closed while writing");
        }

        written += n;
    }

    Ok(())
}
