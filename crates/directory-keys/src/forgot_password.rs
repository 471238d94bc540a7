//! Field names of a password-reset (recovery) code record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One field of a recovery code record, with its fixed wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForgotPasswordCodeField {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "code")]
    Code,
    #[serde(rename = "expiryTime")]
    ExpiryTime,
    #[serde(rename = "resendCount")]
    ResendCount,
}

impl ForgotPasswordCodeField {
    pub const ALL: [ForgotPasswordCodeField; 4] =
        [Self::Email, Self::Code, Self::ExpiryTime, Self::ResendCount];

    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Code => "code",
            Self::ExpiryTime => "expiryTime",
            Self::ResendCount => "resendCount",
        }
    }

    /// Reverse lookup. Unknown names yield `None`, not an error: this is
    /// used on externally authored records of unknown shape.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == name)
    }
}

impl fmt::Display for ForgotPasswordCodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
