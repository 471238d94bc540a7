//! Directory Keys: typed lookup keys for directory entities.
//!
//! Provides the closed sets of "look up by" keys for accounts, domains,
//! servers, distribution lists and the other directory entity categories,
//! the signature content-type/attribute table, and the field names of
//! password-reset code records.
//!
//! Every table is immutable and built at most once, so all lookups are
//! safe to call from any thread without synchronization.

pub mod bimap;
pub mod error;
pub mod forgot_password;
pub mod guess;
pub mod keys;
pub mod kind;
pub mod lookup;
pub mod recovery;
pub mod registry;
pub mod signature;
pub mod time;

// Re-export primary types
pub use error::{KeyError, Result};
pub use forgot_password::ForgotPasswordCodeField;
pub use guess::{is_uuid, IdOrName};
pub use keys::{
    AccountBy, AlwaysOnClusterBy, CacheEntryBy, CalendarResourceBy, CosBy, DataSourceBy,
    DistributionListBy, DomainBy, IdentityBy, ServerBy, ShareLocatorBy, SignatureBy, UCServiceBy,
    XMPPComponentBy, ZimletBy,
};
pub use kind::KeyKind;
pub use lookup::{AnyLookupKey, LookupKey};
pub use recovery::RecoveryCode;
pub use registry::LookupKeyRegistry;
