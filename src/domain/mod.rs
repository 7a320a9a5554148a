//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{HttpMethod, SendBulk, SendOtp, SendSms};
pub use response::{ApiResponse, RequestFailure};
pub use validation::{ConfigurationError, ValidationError};
pub use value::{GroupId, MessageText, NotifyUrl, PhoneNumber, PhonePrefixes, ShortcodeId, Token};
