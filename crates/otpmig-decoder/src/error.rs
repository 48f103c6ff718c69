/// Errors detected at the migration-URI boundary.
///
/// These are the only failures the pipeline can produce, and all of
/// them mean "the caller must resubmit corrected input". Once the raw
/// payload bytes are extracted, decoding is best-effort and infallible
/// (see [`decode_payload`](crate::decode_payload)).
///
/// ```text
///   ExtractError
///   ├── InvalidScheme      ← not an otpauth-migration://offline?data= URI
///   ├── MissingData        ← prefix present but no parameter value
///   └── MalformedEncoding  ← the data value is not valid base64
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The input does not start with the migration URI prefix.
    #[error("not a migration URI: expected it to begin with \"otpauth-migration://offline?data=\"")]
    InvalidScheme,

    /// The prefix is present but the `data` parameter value is empty.
    #[error("migration URI carries no data parameter value")]
    MissingData,

    /// Percent-decoding left something that is not standard-alphabet
    /// base64 (bad characters or padding).
    #[error("malformed data encoding: {0}")]
    MalformedEncoding(#[from] base64::DecodeError),
}
