//! Streaming wrapper around a successful QR response.

use std::io::{self, Read};

use crate::http::HttpResponse;

/// Image bytes returned by the service, read incrementally.
///
/// The body stream is released by [`close`](Response::close) or when the
/// value is dropped. Reading after `close` fails.
pub struct Response {
    status: u16,
    headers: Vec<(String, String)>,
    body: Option<Box<dyn Read + Send>>,
}

impl Response {
    pub(crate) fn new(http: HttpResponse) -> Self {
        Self {
            status: http.status,
            headers: http.headers,
            body: Some(http.body),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers as returned by the transport.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    pub fn is_closed(&self) -> bool {
        self.body.is_none()
    }

    /// Release the underlying stream. Later calls are no-ops.
    pub fn close(&mut self) {
        self.body = None;
    }
}

impl Read for Response {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.body.as_mut() {
            Some(body) => body.read(buf),
            None => Err(io::Error::other("read on closed response body")),
        }
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("closed", &self.is_closed())
            .finish()
    }
}
