#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: URI extraction plus the full decode pipeline.
//
// Feeds arbitrary UTF-8 to `decode_migration_uri`. Catches bugs in:
// - Prefix matching and whitespace trimming
// - Percent-decoding of the data parameter
// - Base64 decoding error paths
// - The binary decode stage on whatever bytes survive extraction
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let _ = otpmig_decoder::decode_migration_uri(text);
});
