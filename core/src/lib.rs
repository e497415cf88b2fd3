//! Blocking client for the Scanova QR-code generation service.
//!
//! # Overview
//! Describe a QR code with a [`Request`], hand it to [`Client::new_qr`], and
//! read the rendered image from the returned [`Response`]. All rendering
//! happens on the service; the image bytes are passed through untouched.
//!
//! # Design
//! - `Request` is plain data; [`params`] flattens it into query pairs.
//! - The network is reached only through the [`Transport`] trait. The default
//!   is a `ureq` agent; any closure of the right shape can stand in for tests.
//! - `Response` streams the body and releases it on `close` or drop.
//!
//! ```no_run
//! use std::io::Read;
//! use scanova_core::{Client, ErrorCorrection, EyeShape, Request, Size};
//!
//! # fn main() -> scanova_core::Result<()> {
//! let client = Client::new();
//! let request = Request::new("https://example.com")
//!     .with_size(Size::Large)
//!     .with_error_correction(ErrorCorrection::Q)
//!     .with_eye_pattern(EyeShape::CircleCircle);
//!
//! let mut response = client.new_qr(&request)?;
//! let mut png = Vec::new();
//! response.read_to_end(&mut png).map_err(scanova_core::TransportError::from)?;
//! response.close();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod params;
pub mod response;
pub mod types;

pub use client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result, TransportError};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use response::Response;
pub use types::{ErrorCorrection, EyeShape, Gradient, Logo, Request, Size};
