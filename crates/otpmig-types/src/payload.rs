use crate::account::OtpAccount;

/// The root migration message: an ordered batch of accounts plus batch
/// bookkeeping.
///
/// Created fresh by each decode call and never cached. Account order is
/// the encounter order in the source buffer and is preserved through to
/// presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationPayload {
    pub accounts: Vec<OtpAccount>,
    pub version: u32,
    pub batch_size: u32,
    pub batch_index: u32,
    pub batch_id: u32,
    /// Set when decoding ended early somewhere — an unknown wire type or
    /// a field that ran off the end of its buffer. The payload still
    /// carries everything that was readable; this flag lets callers
    /// report the partial read without treating it as a failure.
    pub truncated: bool,
}

impl Default for MigrationPayload {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            version: 1,
            batch_size: 1,
            batch_index: 0,
            batch_id: 0,
            truncated: false,
        }
    }
}
