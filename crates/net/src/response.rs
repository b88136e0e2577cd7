//! HTTP response representation

use std::collections::HashMap;
use url::Url;

use crate::error::{NetError, NetResult};

/// HTTP response
#[derive(Debug)]
pub struct Response {
    /// Final URL after redirects
    pub url: Url,
    /// HTTP status code
    pub status: u16,
    /// Response headers, names lowercased
    pub headers: HashMap<String, String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response
    pub fn new(url: Url, status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            url,
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx status into an error
    pub fn error_for_status(self) -> NetResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(NetError::HttpError { status: self.status })
        }
    }

    /// Get the Content-Type header
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(|s| s.as_str())
    }

    /// Get the body as a UTF-8 string, replacing invalid characters
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
