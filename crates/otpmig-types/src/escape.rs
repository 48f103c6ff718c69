use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in URI components.
///
/// Everything non-alphanumeric except `- _ . ! ~ * ' ( )` — the set
/// JavaScript's `encodeURIComponent` leaves intact, which is what
/// authenticator apps expect in `otpauth://` labels and in the
/// `data=` parameter of a migration URI.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component.
#[must_use]
pub fn component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}
