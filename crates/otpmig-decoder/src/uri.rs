use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::percent_decode_str;

use crate::error::ExtractError;

/// The exact prefix every migration URI starts with. The scheme check is
/// a literal match on this string — there is no general URL parsing
/// because the export format never varies the authority or parameter
/// order.
pub const MIGRATION_PREFIX: &str = "otpauth-migration://offline?data=";

/// Extract the raw payload bytes from a migration URI.
///
/// The `data` parameter value is percent-decoded, then base64-decoded
/// with the standard alphabet (the export format does not use the
/// URL-safe variant; `+` and `/` arrive percent-escaped instead).
///
/// # Errors
///
/// - [`ExtractError::InvalidScheme`] if the input does not begin with
///   [`MIGRATION_PREFIX`].
/// - [`ExtractError::MissingData`] if nothing follows the prefix.
/// - [`ExtractError::MalformedEncoding`] if base64 decoding fails.
pub fn extract_data(uri: &str) -> Result<Vec<u8>, ExtractError> {
    let trimmed = uri.trim();
    let Some(value) = trimmed.strip_prefix(MIGRATION_PREFIX) else {
        return Err(ExtractError::InvalidScheme);
    };
    if value.is_empty() {
        return Err(ExtractError::MissingData);
    }

    // Percent-decoding cannot fail: stray '%' sequences pass through
    // unchanged and are then rejected by the base64 decoder.
    let unescaped: Vec<u8> = percent_decode_str(value).collect();
    Ok(STANDARD.decode(unescaped)?)
}
