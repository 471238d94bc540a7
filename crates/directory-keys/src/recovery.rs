//! Password-reset (recovery) code records.
//!
//! On the wire a record is a flat string map keyed by
//! [`ForgotPasswordCodeField`] wire names, usually stored as a JSON
//! object. Decoding is tolerant of extra keys and strict about the four
//! known ones.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{KeyError, Result};
use crate::forgot_password::ForgotPasswordCodeField;
use crate::time::millis_to_rfc3339;

/// A recovery code issued to an account's recovery address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryCode {
    pub email: String,
    pub code: String,
    /// Unix epoch milliseconds.
    pub expiry_time: u64,
    pub resend_count: u32,
}

impl RecoveryCode {
    pub fn new(email: impl Into<String>, code: impl Into<String>, expiry_time: u64) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
            expiry_time,
            resend_count: 0,
        }
    }

    /// Value of `field`, rendered as on the wire.
    pub fn get(&self, field: ForgotPasswordCodeField) -> String {
        match field {
            ForgotPasswordCodeField::Email => self.email.clone(),
            ForgotPasswordCodeField::Code => self.code.clone(),
            ForgotPasswordCodeField::ExpiryTime => self.expiry_time.to_string(),
            ForgotPasswordCodeField::ResendCount => self.resend_count.to_string(),
        }
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        ForgotPasswordCodeField::ALL
            .into_iter()
            .map(|field| (field.wire_name().to_string(), self.get(field)))
            .collect()
    }

    /// Decode from a wire-name keyed map. Unknown keys are skipped.
    pub fn from_map<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut email = None;
        let mut code = None;
        let mut expiry_time = None;
        let mut resend_count = None;

        for (name, value) in entries {
            let Some(field) = ForgotPasswordCodeField::from_wire_name(name) else {
                debug!("skipping unknown recovery code field {name:?}");
                continue;
            };
            match field {
                ForgotPasswordCodeField::Email => email = Some(value.to_string()),
                ForgotPasswordCodeField::Code => code = Some(value.to_string()),
                ForgotPasswordCodeField::ExpiryTime => {
                    expiry_time = Some(parse_number::<u64>(field, value)?)
                }
                ForgotPasswordCodeField::ResendCount => {
                    resend_count = Some(parse_number::<u32>(field, value)?)
                }
            }
        }

        Ok(Self {
            email: email.ok_or(KeyError::MissingCodeField(ForgotPasswordCodeField::Email))?,
            code: code.ok_or(KeyError::MissingCodeField(ForgotPasswordCodeField::Code))?,
            expiry_time: expiry_time
                .ok_or(KeyError::MissingCodeField(ForgotPasswordCodeField::ExpiryTime))?,
            resend_count: resend_count
                .ok_or(KeyError::MissingCodeField(ForgotPasswordCodeField::ResendCount))?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_map()).map_err(|e| KeyError::Serialization(e.to_string()))
    }

    /// Decode from a JSON object whose values are all strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| KeyError::Serialization(e.to_string()))?;
        Self::from_map(map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Whether the code is no longer usable at `now_millis`.
    pub fn is_expired(&self, now_millis: u64) -> bool {
        now_millis >= self.expiry_time
    }

    /// Expiry as an RFC 3339 timestamp.
    pub fn expires_at(&self) -> String {
        millis_to_rfc3339(self.expiry_time)
    }
}

fn parse_number<T: std::str::FromStr>(field: ForgotPasswordCodeField, value: &str) -> Result<T> {
    value.parse().map_err(|_| KeyError::InvalidCodeField {
        field,
        value: value.to_string(),
    })
}
