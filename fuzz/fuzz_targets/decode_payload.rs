#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full binary payload decoder.
//
// Calls `decode_payload(data)` on arbitrary input bytes. The decoder is
// infallible — any input must produce a payload, never a panic.
// Catches bugs in:
// - Key byte parsing (field number / wire type split)
// - Length-delimited slicing (announced length vs available bytes)
// - Account sub-message decoding (nested field walk)
// - Enum fallback handling (out-of-range algorithm / type bytes)
// - Truncation flagging
fuzz_target!(|data: &[u8]| {
    let payload = otpmig_decoder::decode_payload(data);

    // Every decoded secret slice must have come out of the input.
    for account in &payload.accounts {
        assert!(account.secret.len() <= data.len());
    }
});
