//! The lookup-key contract shared by every entity category.
//!
//! A lookup key names *which field* resolves an entity ("by id",
//! "by name", ...), never the field's value. Each category permits its own
//! closed set of keys, and each key has one canonical, case-sensitive
//! string fixed by the wire protocol.
//!
//! Two ways in:
//! - statically typed, through the per-category enums in [`crate::keys`]
//!   and the [`LookupKey`] trait;
//! - by runtime category, through [`AnyLookupKey`].

use std::fmt;
use std::hash::Hash;

use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::guess;
use crate::keys::{
    AccountBy, AlwaysOnClusterBy, CacheEntryBy, CalendarResourceBy, CosBy, DataSourceBy,
    DistributionListBy, DomainBy, IdentityBy, ServerBy, ShareLocatorBy, SignatureBy, UCServiceBy,
    XMPPComponentBy, ZimletBy,
};
use crate::kind::KeyKind;
use crate::registry::LookupKeyRegistry;

/// A category's closed set of permitted lookup keys.
pub trait LookupKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The category this key set belongs to.
    const KIND: KeyKind;

    /// Every permitted key, in declaration order.
    const VARIANTS: &'static [Self];

    /// Canonical protocol string. Total.
    fn as_str(self) -> &'static str;

    /// The category's table, built on first access.
    fn registry() -> &'static LookupKeyRegistry<Self>;

    /// Strict parse: `raw` must equal a canonical string byte for byte.
    fn parse(raw: &str) -> Result<Self> {
        Self::registry().parse(raw)
    }
}

macro_rules! any_lookup_key {
    ($($kind:ident($key:ty)),+ $(,)?) => {
        /// A lookup key whose category is only known at runtime.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AnyLookupKey {
            $($kind($key),)+
        }

        impl AnyLookupKey {
            /// Parse `raw` against the permitted keys of `kind`.
            pub fn parse(kind: KeyKind, raw: &str) -> Result<Self> {
                match kind {
                    $(KeyKind::$kind => <$key as LookupKey>::parse(raw).map(Self::$kind),)+
                }
            }

            /// Pick `id` or `name` for a bare identifier value.
            ///
            /// `None` when the category has no key of the guessed kind.
            pub fn guess(kind: KeyKind, value: &str) -> Option<Self> {
                match kind {
                    $(KeyKind::$kind => guess::guess::<$key>(value).map(Self::$kind),)+
                }
            }

            /// Canonical strings permitted for `kind`, in declaration order.
            pub fn permitted(kind: KeyKind) -> Vec<&'static str> {
                match kind {
                    $(KeyKind::$kind => <$key as LookupKey>::VARIANTS
                        .iter()
                        .map(|k| k.as_str())
                        .collect(),)+
                }
            }

            /// Every permitted key of `kind`.
            pub fn variants(kind: KeyKind) -> Vec<Self> {
                match kind {
                    $(KeyKind::$kind => <$key as LookupKey>::VARIANTS
                        .iter()
                        .map(|&k| Self::$kind(k))
                        .collect(),)+
                }
            }

            pub fn kind(self) -> KeyKind {
                match self {
                    $(Self::$kind(_) => KeyKind::$kind,)+
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$kind(key) => key.as_str(),)+
                }
            }
        }

        $(
            impl From<$key> for AnyLookupKey {
                fn from(key: $key) -> Self {
                    Self::$kind(key)
                }
            }
        )+
    };
}

any_lookup_key! {
    Account(AccountBy),
    Domain(DomainBy),
    Server(ServerBy),
    Cos(CosBy),
    DistributionList(DistributionListBy),
    CalendarResource(CalendarResourceBy),
    Identity(IdentityBy),
    DataSource(DataSourceBy),
    Signature(SignatureBy),
    CacheEntry(CacheEntryBy),
    Zimlet(ZimletBy),
    UCService(UCServiceBy),
    XMPPComponent(XMPPComponentBy),
    ShareLocator(ShareLocatorBy),
    AlwaysOnCluster(AlwaysOnClusterBy),
}

impl fmt::Display for AnyLookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Only the canonical string goes on the wire; the category is implied by
// the request it appears in.
impl Serialize for AnyLookupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
