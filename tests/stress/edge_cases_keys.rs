//! Edge case tests for strict key parsing.
//!
//! Every permitted key is mutated in ways a sloppy client might send it
//! (case changes, padding, truncation) and every mutation must be rejected
//! unless it happens to be another permitted key of the same category.

use directory_keys::{AnyLookupKey, KeyError, KeyKind};

fn mutations(raw: &str) -> Vec<String> {
    let mut out = vec![
        raw.to_uppercase(),
        raw.to_lowercase(),
        format!(" {raw}"),
        format!("{raw} "),
        format!("{raw}\n"),
        format!("{raw}s"),
        raw[..raw.len() - 1].to_string(),
    ];
    let mut chars = raw.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_uppercase().chain(chars).collect());
    }
    out
}

#[test]
fn edge_case_mutations_rejected() {
    for kind in KeyKind::ALL {
        let permitted = AnyLookupKey::permitted(kind);
        for raw in &permitted {
            for candidate in mutations(raw) {
                if permitted.contains(&candidate.as_str()) {
                    continue;
                }
                let err = AnyLookupKey::parse(kind, &candidate).unwrap_err();
                assert_eq!(
                    err,
                    KeyError::InvalidLookupKey {
                        kind,
                        raw: candidate.clone(),
                    },
                    "{kind}: {candidate:?} must be rejected"
                );
            }
        }
    }
}

#[test]
fn edge_case_empty_and_unicode() {
    for kind in KeyKind::ALL {
        assert!(AnyLookupKey::parse(kind, "").is_err());
        assert!(AnyLookupKey::parse(kind, "ｉｄ").is_err());
        assert!(AnyLookupKey::parse(kind, "id\0").is_err());
    }
}

#[test]
fn edge_case_keys_from_other_categories() {
    let cases = [
        (KeyKind::ShareLocator, "name"),
        (KeyKind::Cos, "foreignPrincipal"),
        (KeyKind::Server, "virtualHostname"),
        (KeyKind::Domain, "serviceHostname"),
        (KeyKind::CalendarResource, "adminName"),
        (KeyKind::Zimlet, "krb5Principal"),
    ];
    for (kind, raw) in cases {
        assert!(
            AnyLookupKey::parse(kind, raw).is_err(),
            "{raw} is not a {kind} key"
        );
    }
}

#[test]
fn edge_case_every_category_has_id() {
    for kind in KeyKind::ALL {
        let key = AnyLookupKey::parse(kind, "id").unwrap();
        assert_eq!(key.kind(), kind);
    }
}
