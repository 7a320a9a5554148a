//! Typed Rust client for the GeezSMS HTTP API.
//!
//! The crate is split into a domain layer of validated types, a transport layer for
//! wire-format details, and a small client layer orchestrating requests. Input problems
//! are reported as [`GeezSmsError`] before anything is sent; network failures come back
//! as [`ApiResponse::Failed`] so every dispatched call yields a value.
//!
//! ```rust,no_run
//! use geezsms::GeezSmsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), geezsms::GeezSmsError> {
//!     let client = GeezSmsClient::builder("...").shortcode_id(1234).build()?;
//!     let response = client.send_sms("+251912345678", "hello").await?;
//!     if let Some(failure) = response.failure() {
//!         eprintln!("{}: {}", failure.message, failure.error_details);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxError, BoxFuture, GeezSmsClient, GeezSmsClientBuilder, GeezSmsError, HttpResponse,
    HttpTransport, ReqwestTransport, default_base_url,
};
pub use domain::{
    ApiResponse, ConfigurationError, GroupId, HttpMethod, MessageText, NotifyUrl, PhoneNumber,
    PhonePrefixes, RequestFailure, SendBulk, SendOtp, SendSms, ShortcodeId, Token,
    ValidationError,
};
pub use transport::OutboundRequest;
