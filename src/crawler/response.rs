//! Fetch result handed in by the host crawler

use std::borrow::Cow;

/// A response the host fetched for a requested URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// Final URL after redirects
    pub url: String,

    /// HTTP status code
    pub status: u16,

    /// Raw page body
    pub content: Vec<u8>,
}

impl PageResponse {
    pub fn new(url: impl Into<String>, status: u16, content: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status,
            content: content.into(),
        }
    }

    /// A 200 response
    pub fn ok(url: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self::new(url, 200, content)
    }

    /// Only a plain 200 counts; 204 and other 2xx codes carry no page to index
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    pub fn body(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}
