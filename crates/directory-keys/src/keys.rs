//! Per-category lookup-key enums.
//!
//! Canonical strings are part of the wire protocol and are matched byte
//! for byte. Do not rename them.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{KeyError, Result};
use crate::kind::KeyKind;
use crate::lookup::LookupKey;
use crate::registry::LookupKeyRegistry;

macro_rules! lookup_key {
    (
        $(#[$meta:meta])*
        $name:ident for $kind:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $($variant,)+
        }

        impl LookupKey for $name {
            const KIND: KeyKind = KeyKind::$kind;
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn registry() -> &'static LookupKeyRegistry<Self> {
                static REGISTRY: OnceLock<LookupKeyRegistry<$name>> = OnceLock::new();
                REGISTRY.get_or_init(LookupKeyRegistry::build)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = KeyError;

            fn from_str(s: &str) -> Result<Self> {
                <Self as LookupKey>::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = KeyError;

            fn try_from(s: String) -> Result<Self> {
                <Self as LookupKey>::parse(&s)
            }
        }

        impl From<$name> for &'static str {
            fn from(key: $name) -> Self {
                key.as_str()
            }
        }
    };
}

lookup_key! {
    /// How to look up an account.
    AccountBy for Account {
        AdminName => "adminName",
        AppAdminName => "appAdminName",
        Id => "id",
        ForeignPrincipal => "foreignPrincipal",
        Name => "name",
        Krb5Principal => "krb5Principal",
    }
}

lookup_key! {
    /// How to look up a cached entry to flush.
    CacheEntryBy for CacheEntry {
        Id => "id",
        Name => "name",
    }
}

lookup_key! {
    /// How to look up a calendar resource.
    CalendarResourceBy for CalendarResource {
        Id => "id",
        ForeignPrincipal => "foreignPrincipal",
        Name => "name",
    }
}

lookup_key! {
    /// How to look up a class of service.
    CosBy for Cos {
        Id => "id",
        Name => "name",
    }
}

lookup_key! {
    DataSourceBy for DataSource {
        Id => "id",
        Name => "name",
    }
}

lookup_key! {
    DistributionListBy for DistributionList {
        Id => "id",
        Name => "name",
    }
}

lookup_key! {
    /// How to look up a domain.
    DomainBy for Domain {
        Id => "id",
        Name => "name",
        VirtualHostname => "virtualHostname",
        Krb5Realm => "krb5Realm",
        ForeignName => "foreignName",
    }
}

lookup_key! {
    IdentityBy for Identity {
        Id => "id",
        Name => "name",
    }
}

lookup_key! {
    /// How to look up a server.
    ServerBy for Server {
        Id => "id",
        Name => "name",
        ServiceHostname => "serviceHostname",
    }
}

lookup_key! {
    AlwaysOnClusterBy for AlwaysOnCluster {
        Id => "id",
        Name => "name",
    }
}

lookup_key! {
    /// Share locators are only ever addressed by id.
    ShareLocatorBy for ShareLocator {
        Id => "id",
    }
}

lookup_key! {
    SignatureBy for Signature {
        Id => "id",
        Name => "name",
    }
}

lookup_key! {
    /// How to look up a unified communications service.
    UCServiceBy for UCService {
        Id => "id",
        Name => "name",
    }
}

lookup_key! {
    XMPPComponentBy for XMPPComponent {
        Id => "id",
        Name => "name",
        ServiceHostname => "serviceHostname",
    }
}

lookup_key! {
    ZimletBy for Zimlet {
        Id => "id",
        Name => "name",
    }
}
