//! Signature content types and the account attributes that store them.
//!
//! A mail signature is kept in one of two attributes depending on its
//! MIME type. The association is fixed:
//!
//! | Content type  | Attribute                     |
//! |---------------|-------------------------------|
//! | `text/plain`  | `zimbraPrefMailSignature`     |
//! | `text/html`   | `zimbraPrefMailSignatureHTML` |
//!
//! Anything else is not a signature type. Callers get an error, never a
//! plain-text fallback.

use std::sync::OnceLock;

use crate::bimap::Bimap;
use crate::error::{KeyError, Result};

pub const CT_TEXT_PLAIN: &str = "text/plain";
pub const CT_TEXT_HTML: &str = "text/html";

/// Attribute holding a plain-text signature.
pub const A_PREF_MAIL_SIGNATURE: &str = "zimbraPrefMailSignature";
/// Attribute holding an HTML signature.
pub const A_PREF_MAIL_SIGNATURE_HTML: &str = "zimbraPrefMailSignatureHTML";

fn content_types() -> &'static Bimap {
    static TABLE: OnceLock<Bimap> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = Bimap::from_pairs(&[
            (CT_TEXT_PLAIN, A_PREF_MAIL_SIGNATURE),
            (CT_TEXT_HTML, A_PREF_MAIL_SIGNATURE_HTML),
        ]);
        debug_assert!(table.is_bijective(), "signature content types must be one-to-one");
        table
    })
}

/// Attribute that stores a signature of `mime_type`.
pub fn attribute_for(mime_type: &str) -> Result<&'static str> {
    content_types()
        .right(mime_type)
        .ok_or_else(|| KeyError::ContentTypeNotFound(mime_type.to_string()))
}

/// MIME type of the signature stored in `attribute`.
pub fn mime_type_for(attribute: &str) -> Result<&'static str> {
    content_types()
        .left(attribute)
        .ok_or_else(|| KeyError::AttributeNotFound(attribute.to_string()))
}

/// Registered `(content type, attribute)` pairs.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    content_types().entries()
}
