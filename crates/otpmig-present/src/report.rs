use otpmig_types::MigrationPayload;
use serde::Serialize;

use crate::presenter::{PresentedAccount, present};

/// Batch bookkeeping from the top-level payload message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchMetadata {
    pub version: u32,
    pub batch_size: u32,
    pub batch_index: u32,
    pub batch_id: u32,
}

/// The external result mapping for one decoded migration:
///
/// ```json
/// {
///   "accountsCount": 1,
///   "accounts": [
///     {
///       "name": "alice",
///       "issuer": "Example",
///       "secret": "JBSWY3DP",
///       "otpauthUri": "otpauth://totp/Example:alice?secret=JBSWY3DP&...",
///       "algorithm": "SHA1",
///       "digits": 6,
///       "type": "TOTP"
///     }
///   ],
///   "metadata": { "version": 1, "batchSize": 1, "batchIndex": 0, "batchId": 0 }
/// }
/// ```
///
/// An `accountsCount` of zero is a legitimate outcome (the payload
/// decoded but held nothing recognisable) and should be messaged as
/// information, not failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub accounts_count: usize,
    pub accounts: Vec<PresentedAccount>,
    pub metadata: BatchMetadata,
}

impl MigrationReport {
    /// Present every account of a payload, preserving order.
    #[must_use]
    pub fn from_payload(payload: &MigrationPayload) -> Self {
        let accounts: Vec<PresentedAccount> = payload.accounts.iter().map(present).collect();
        Self {
            accounts_count: accounts.len(),
            accounts,
            metadata: BatchMetadata {
                version: payload.version,
                batch_size: payload.batch_size,
                batch_index: payload.batch_index,
                batch_id: payload.batch_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otpmig_types::OtpAccount;

    #[test]
    fn empty_payload_reports_zero_accounts() {
        let report = MigrationReport::from_payload(&MigrationPayload::default());
        assert_eq!(report.accounts_count, 0);
        assert!(report.accounts.is_empty());
        assert_eq!(report.metadata.version, 1);
        assert_eq!(report.metadata.batch_size, 1);
    }

    #[test]
    fn account_order_is_preserved() {
        let mut payload = MigrationPayload::default();
        for name in ["first", "second", "third"] {
            payload.accounts.push(OtpAccount {
                name: name.into(),
                ..OtpAccount::default()
            });
        }
        let report = MigrationReport::from_payload(&payload);
        assert_eq!(report.accounts_count, 3);
        let names: Vec<&str> = report.accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn json_keys_are_camel_case() {
        let mut payload = MigrationPayload::default();
        payload.batch_id = 7;
        let json = serde_json::to_value(MigrationReport::from_payload(&payload)).unwrap();
        assert_eq!(json["accountsCount"], 0);
        assert_eq!(json["metadata"]["batchSize"], 1);
        assert_eq!(json["metadata"]["batchId"], 7);
    }
}
