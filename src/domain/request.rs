use crate::domain::value::{MessageText, NotifyUrl, PhoneNumber};

/// HTTP method used for a GeezSMS call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = crate::domain::ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => Err(crate::domain::ValidationError::UnsupportedMethod {
                method: value.to_owned(),
            }),
        }
    }
}

/// `POST|GET /otp`: ask GeezSMS to generate and deliver a one-time passcode.
#[derive(Debug, Clone)]
pub struct SendOtp {
    phone: PhoneNumber,
}

impl SendOtp {
    pub fn new(phone: PhoneNumber) -> Self {
        Self { phone }
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }
}

/// `POST|GET /send`: deliver one message to one recipient.
#[derive(Debug, Clone)]
pub struct SendSms {
    phone: PhoneNumber,
    msg: MessageText,
}

impl SendSms {
    pub fn new(phone: PhoneNumber, msg: MessageText) -> Self {
        Self { phone, msg }
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn msg(&self) -> &MessageText {
        &self.msg
    }
}

/// `POST /send/bulk`: deliver one message to many recipients.
#[derive(Debug, Clone)]
pub struct SendBulk {
    phones: Vec<PhoneNumber>,
    msg: MessageText,
    notify: NotifyUrl,
}

impl SendBulk {
    pub fn new(phones: Vec<PhoneNumber>, msg: MessageText, notify: NotifyUrl) -> Self {
        Self {
            phones,
            msg,
            notify,
        }
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn msg(&self) -> &MessageText {
        &self.msg
    }

    pub fn notify(&self) -> &NotifyUrl {
        &self.notify
    }
}
