//! Entity categories that lookup keys apply to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{KeyError, Result};

/// The category of directory entity a lookup key resolves.
///
/// Closed set. Each category has its own permitted key kinds, see
/// [`crate::lookup::AnyLookupKey::permitted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum KeyKind {
    Account,
    Domain,
    Server,
    Cos,
    DistributionList,
    CalendarResource,
    Identity,
    DataSource,
    Signature,
    CacheEntry,
    Zimlet,
    UCService,
    XMPPComponent,
    ShareLocator,
    AlwaysOnCluster,
}

impl KeyKind {
    /// Every category, in declaration order.
    pub const ALL: [KeyKind; 15] = [
        Self::Account,
        Self::Domain,
        Self::Server,
        Self::Cos,
        Self::DistributionList,
        Self::CalendarResource,
        Self::Identity,
        Self::DataSource,
        Self::Signature,
        Self::CacheEntry,
        Self::Zimlet,
        Self::UCService,
        Self::XMPPComponent,
        Self::ShareLocator,
        Self::AlwaysOnCluster,
    ];

    /// Stable label used in CLI arguments and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Domain => "domain",
            Self::Server => "server",
            Self::Cos => "cos",
            Self::DistributionList => "distributionList",
            Self::CalendarResource => "calendarResource",
            Self::Identity => "identity",
            Self::DataSource => "dataSource",
            Self::Signature => "signature",
            Self::CacheEntry => "cacheEntry",
            Self::Zimlet => "zimlet",
            Self::UCService => "ucService",
            Self::XMPPComponent => "xmppComponent",
            Self::ShareLocator => "shareLocator",
            Self::AlwaysOnCluster => "alwaysOnCluster",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for KeyKind {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| KeyError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for KeyKind {
    type Error = KeyError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<KeyKind> for &'static str {
    fn from(kind: KeyKind) -> Self {
        kind.as_str()
    }
}
