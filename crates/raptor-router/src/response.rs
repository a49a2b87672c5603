//! HTTP response type.

use std::collections::HashMap;

/// An HTTP response.
///
/// The router core builds and returns these; writing them to a socket is
/// the transport layer's job, via [`to_http_bytes`](Self::to_http_bytes).
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a new response with the given status and no body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a 200 OK response.
    pub fn ok() -> Self {
        Self::new(200)
    }

    /// Creates a response with HTML content.
    pub fn html(body: impl Into<String>) -> Self {
        Self::with_content_type(body.into().into_bytes(), "text/html; charset=utf-8")
    }

    /// Creates a response with plain text content.
    pub fn text(body: impl Into<String>) -> Self {
        Self::with_content_type(body.into().into_bytes(), "text/plain; charset=utf-8")
    }

    /// Creates a response with JSON content.
    ///
    /// Serialization failure degrades to a 500 rather than panicking.
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        match serde_json::to_vec(data) {
            Ok(body) => Self::with_content_type(body, "application/json"),
            Err(_) => Self::internal_server_error(),
        }
    }

    /// Creates a 302 redirect response.
    pub fn redirect(url: impl Into<String>) -> Self {
        let mut response = Self::new(302);
        response.headers.insert("Location".to_string(), url.into());
        response
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        let mut response = Self::new(404);
        response.body = b"404 - Not Found".to_vec();
        response
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_server_error() -> Self {
        let mut response = Self::new(500);
        response.body = b"500 - Internal Server Error".to_vec();
        response
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Returns the body as a string, if it is valid UTF-8.
    pub fn body_string(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }

    /// Serializes the response as raw close-delimited HTTP/1.1 bytes:
    /// status line, headers, Content-Length, `Connection: close`, body.
    pub fn to_http_bytes(&self) -> Vec<u8> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status,
            reason_phrase(self.status)
        );
        for (key, value) in &self.headers {
            head.push_str(key);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        head.push_str(&format!("Content-Length: {}\r\n", self.body.len()));
        head.push_str("Connection: close\r\n\r\n");

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }

    fn with_content_type(body: Vec<u8>, content_type: &str) -> Self {
        Self {
            status: 200,
            headers: [("Content-Type".to_string(), content_type.to_string())]
                .into_iter()
                .collect(),
            body,
        }
    }
}

/// The reason phrase for the status codes this core emits.
fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
