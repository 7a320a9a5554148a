//! Transport layer: wire-format details (parameter encoding, request shaping, envelopes).

mod envelope;
mod request;
mod send_bulk;
mod send_otp;
mod send_sms;

pub use envelope::decode_envelope;
pub use request::{OutboundRequest, build_request, merge_token};
pub use send_bulk::encode_send_bulk_params;
pub use send_otp::encode_send_otp_params;
pub use send_sms::encode_send_sms_params;
