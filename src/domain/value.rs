use crate::domain::validation::{ConfigurationError, ValidationError};

#[derive(Clone, PartialEq, Eq, Hash)]
/// GeezSMS API token (`token`).
///
/// Invariant: not blank. The value is sent exactly as provided.
pub struct Token(String);

impl Token {
    /// Parameter name used by GeezSMS (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`Token`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigurationError::MissingToken);
        }
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Set of prefixes a phone number must start with to be accepted.
///
/// The default set is `2519` and `+2519`.
pub struct PhonePrefixes(Vec<String>);

impl PhonePrefixes {
    /// Prefixes accepted when nothing else is configured.
    pub const DEFAULT: [&'static str; 2] = ["2519", "+2519"];

    /// Build a prefix set. Blank entries are dropped.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            prefixes
                .into_iter()
                .map(Into::into)
                .map(|prefix| prefix.trim().to_owned())
                .filter(|prefix| !prefix.is_empty())
                .collect(),
        )
    }

    /// Whether `phone` starts with any configured prefix.
    pub fn matches(&self, phone: &str) -> bool {
        self.0.iter().any(|prefix| phone.starts_with(prefix.as_str()))
    }

    /// Validate `input` against this prefix set.
    ///
    /// Numeric inputs are coerced to their decimal form first. Strings are checked and
    /// kept verbatim, so leading whitespace fails the prefix check.
    pub fn parse(&self, input: impl ToString) -> Result<PhoneNumber, ValidationError> {
        let input = input.to_string();
        if !self.matches(&input) {
            return Err(ValidationError::InvalidPhoneNumber { input });
        }
        Ok(PhoneNumber(input))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for PhonePrefixes {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to GeezSMS (`phone`).
///
/// Invariant: starts with one of the accepted [`PhonePrefixes`]. Sent exactly as provided.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parameter name used by GeezSMS (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Validate against the default prefix set.
    pub fn new(input: impl ToString) -> Result<Self, ValidationError> {
        PhonePrefixes::default().parse(input)
    }

    /// Borrow the validated phone number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`msg`).
///
/// Invariant: at most [`MessageText::MAX_CHARS`] Unicode scalar values. Empty text is allowed.
pub struct MessageText(String);

impl MessageText {
    /// Parameter name used by GeezSMS (`msg`).
    pub const FIELD: &'static str = "msg";

    /// Maximum message length in characters (not bytes).
    pub const MAX_CHARS: usize = 335;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ValidationError::MessageTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery notification URL for bulk sends (`notify`).
///
/// Invariant: either empty, or an absolute URL with a host.
pub struct NotifyUrl(String);

impl NotifyUrl {
    /// Parameter name used by GeezSMS (`notify`).
    pub const FIELD: &'static str = "notify";

    /// Create a validated notify URL. An empty string means "no notification".
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Ok(Self(value));
        }
        match url::Url::parse(&value) {
            Ok(parsed) if parsed.has_host() => Ok(Self(value)),
            _ => Err(ValidationError::InvalidNotifyUrl { input: value }),
        }
    }

    /// An empty notify URL.
    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the URL as provided (possibly empty).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account shortcode id attached to OTP and single sends (`shortcode_id`).
///
/// Invariant: non-empty after trimming and not `0`.
pub struct ShortcodeId(String);

impl ShortcodeId {
    /// Parameter name used by GeezSMS (`shortcode_id`).
    pub const FIELD: &'static str = "shortcode_id";

    /// Normalize `value` to a shortcode id. Returns `None` for blank values and `0`, which
    /// mean "not configured".
    pub fn new(value: impl ToString) -> Option<Self> {
        non_empty(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Contact group id attached to bulk sends (`groupid`).
///
/// Invariant: non-empty after trimming and not `0`.
pub struct GroupId(String);

impl GroupId {
    /// Parameter name used by GeezSMS (`groupid`).
    pub const FIELD: &'static str = "groupid";

    /// Normalize `value` to a group id. Returns `None` for blank values and `0`.
    pub fn new(value: impl ToString) -> Option<Self> {
        non_empty(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_empty(value: impl ToString) -> Option<String> {
    let value = value.to_string();
    let trimmed = value.trim();
    (!trimmed.is_empty() && trimmed != "0").then(|| trimmed.to_owned())
}
