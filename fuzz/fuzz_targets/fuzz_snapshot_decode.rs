#![no_main]

use libfuzzer_sys::fuzz_target;

// Decoding untrusted bytes must fail cleanly, never panic.
fuzz_target!(|data: &[u8]| {
    let _ = civic_ledger::LedgerState::from_bytes(data);
    let _ = civic_gate::GateState::from_bytes(data);
    let _ = civic_ledger::AdminCall::decode(data);
    let _ = civic_gate::ProxyCall::decode(data);
    let _ = civic_gate::ProxyAdmin::from_snapshot(data);
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = s.parse::<civic_types::Address>();
    }
    let _ = bincode::deserialize::<civic_types::Address>(data);
    let _ = bincode::deserialize::<civic_types::CivicParams>(data);

    if let Ok(call) = civic_ledger::AdminCall::decode(data) {
        // Re-encoding a decoded call is stable.
        if let Ok(bytes) = call.encode() {
            assert_eq!(civic_ledger::AdminCall::decode(&bytes).ok(), Some(call));
        }
    }
});
