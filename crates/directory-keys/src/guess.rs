//! Choosing between `id` and `name` for a bare identifier value.
//!
//! Operator tooling accepts "an id or a name" in one argument. Values
//! shaped like a UUID are looked up by id, everything else by name.

use crate::keys::{
    AccountBy, AlwaysOnClusterBy, CacheEntryBy, CalendarResourceBy, CosBy, DataSourceBy,
    DistributionListBy, DomainBy, IdentityBy, ServerBy, SignatureBy, UCServiceBy,
    XMPPComponentBy, ZimletBy,
};
use crate::lookup::LookupKey;

/// UUID shape check: 36 characters with `-` at 8, 13, 18 and 23.
///
/// Only the layout is checked, not the hex digits. Positions count UTF-16
/// code units, the unit the provisioning protocol uses for string length.
pub fn is_uuid(value: &str) -> bool {
    // UTF-16 length never exceeds the UTF-8 length.
    if value.len() < 36 {
        return false;
    }
    let units: Vec<u16> = value.encode_utf16().take(37).collect();
    units.len() == 36 && [8, 13, 18, 23].iter().all(|&i| units[i] == b'-' as u16)
}

/// Guess the key for `value` in any category.
///
/// Returns `None` when the guessed kind is not permitted by `K`, e.g. a
/// non-UUID value for a category that only allows `id`.
pub fn guess<K: LookupKey>(value: &str) -> Option<K> {
    let wire = if is_uuid(value) { "id" } else { "name" };
    K::registry().get(wire)
}

/// Categories that permit both `id` and `name`, where a guess always
/// succeeds.
pub trait IdOrName: LookupKey {
    const ID: Self;
    const NAME: Self;

    fn guess(value: &str) -> Self {
        if is_uuid(value) {
            Self::ID
        } else {
            Self::NAME
        }
    }
}

macro_rules! id_or_name {
    ($($key:ident),+ $(,)?) => {
        $(
            impl IdOrName for $key {
                const ID: Self = $key::Id;
                const NAME: Self = $key::Name;
            }
        )+
    };
}

id_or_name!(
    AccountBy,
    CacheEntryBy,
    CalendarResourceBy,
    CosBy,
    DataSourceBy,
    DistributionListBy,
    DomainBy,
    IdentityBy,
    ServerBy,
    AlwaysOnClusterBy,
    SignatureBy,
    UCServiceBy,
    XMPPComponentBy,
    ZimletBy,
);
