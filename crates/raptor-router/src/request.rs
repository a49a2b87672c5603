//! HTTP request type and request-line parsing glue.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{Result, RouterError};

/// HTTP request methods supported by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    Post,
    /// PUT method
    Put,
    /// PATCH method
    Patch,
    /// DELETE method
    Delete,
    /// OPTIONS method
    Options,
}

impl Method {
    /// Returns the method as an upper-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
        }
    }
}

impl FromStr for Method {
    type Err = RouterError;

    /// Parses a method token case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(RouterError::UnknownMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Path parameters extracted from a matched route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    params: HashMap<String, String>,
}

impl PathParams {
    /// Creates new empty path params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Gets a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Parses a parameter as a specific type.
    pub fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// Returns the number of extracted parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if no parameters were extracted.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An HTTP request as seen by the router.
///
/// The transport layer builds one per connection from the parsed request
/// line and hands it onward by value; the dispatcher fills in `params`
/// after resolution.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Request path, with the query string already split off.
    pub path: String,
    /// Path parameters extracted from the matched route.
    pub params: PathParams,
    /// Query string parameters.
    pub query: HashMap<String, String>,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Vec<u8>,
}

impl Request {
    /// Creates a new request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: PathParams::new(),
            query: HashMap::new(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Creates a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Parses the first line of an HTTP request, e.g.
    /// `GET /users/42?tab=posts HTTP/1.1`.
    ///
    /// The query string is split off the request target and decoded into
    /// `query`; it never participates in route matching.
    pub fn parse_request_line(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let (Some(method), Some(target), Some(version), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(RouterError::MalformedRequestLine(line.to_string()));
        };
        if !version.starts_with("HTTP/") {
            return Err(RouterError::MalformedRequestLine(line.to_string()));
        }

        let method = method.parse::<Method>()?;
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Self::parse_query_string(query)),
            None => (target, HashMap::new()),
        };

        let mut request = Self::new(method, path);
        request.query = query;
        Ok(request)
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Gets a header value, case-insensitively.
    pub fn get_header(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Gets a query parameter.
    pub fn get_query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Parses query parameters from a query string.
    pub fn parse_query_string(query: &str) -> HashMap<String, String> {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (percent_decode(key), percent_decode(value))
            })
            .collect()
    }
}

/// Decodes `%XX` escapes and `+` as space.
fn percent_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut rest = s.as_bytes();

    while let Some((&byte, tail)) = rest.split_first() {
        match byte {
            b'%' if tail.len() >= 2 => {
                let hex = &tail[..2];
                if let Ok(decoded) =
                    u8::from_str_radix(std::str::from_utf8(hex).unwrap_or(""), 16)
                {
                    bytes.push(decoded);
                    rest = &tail[2..];
                    continue;
                }
                bytes.push(byte);
                rest = tail;
            }
            b'+' => {
                bytes.push(b' ');
                rest = tail;
            }
            _ => {
                bytes.push(byte);
                rest = tail;
            }
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!("GET".parse::<Method>().ok(), Some(Method::Get));
        assert_eq!("post".parse::<Method>().ok(), Some(Method::Post));
        assert!("TRACE".parse::<Method>().is_err());
    }

    #[test]
    fn test_path_params() {
        let mut params = PathParams::new();
        params.insert("id", "123");
        params.insert("name", "test");

        assert_eq!(params.get("id"), Some("123"));
        assert_eq!(params.parse::<i64>("id"), Some(123));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_request_line_with_query() {
        let req = Request::parse_request_line("GET /users/42?tab=posts&page=2 HTTP/1.1").unwrap();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/users/42");
        assert_eq!(req.get_query("tab"), Some("posts"));
        assert_eq!(req.get_query("page"), Some("2"));
    }

    #[test]
    fn test_request_line_without_query() {
        let req = Request::parse_request_line("DELETE /users/7 HTTP/1.0").unwrap();
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "/users/7");
        assert!(req.query.is_empty());
    }

    #[test]
    fn test_malformed_request_line() {
        assert!(Request::parse_request_line("GET /only-two-tokens").is_err());
        assert!(Request::parse_request_line("GET / HTTP/1.1 extra").is_err());
        assert!(Request::parse_request_line("BREW / HTTP/1.1").is_err());
        assert!(Request::parse_request_line("GET / FTP/1.1").is_err());
    }

    #[test]
    fn test_query_string_decoding() {
        let query = Request::parse_query_string("name=John+Doe&city=New%20York&flag");
        assert_eq!(query.get("name"), Some(&"John Doe".to_string()));
        assert_eq!(query.get("city"), Some(&"New York".to_string()));
        assert_eq!(query.get("flag"), Some(&String::new()));
    }
}
