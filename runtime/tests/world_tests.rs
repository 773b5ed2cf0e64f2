//! Ledger and gate deployed together, driven through `CivicWorld`.

use civic_crypto::call_hash;
use civic_gate::{Authority, GateError, GateEvent, ProxyCall};
use civic_ledger::{AdminCall, ClaimRequest, LedgerError};
use civic_nullables::{NullClock, NullDaoFactory, NullIdentityVerifier};
use civic_runtime::{CivicWorld, RuntimeConfig, RuntimeError};
use civic_types::{tokens, Address, SECS_PER_DAY};

const VERIFIER: u64 = 0x3000;
const FACTORY: u64 = 0x4000;
const FACTORY_BASE: u64 = 0x10_000;
const GENESIS_DAY: u64 = 100;
const CITIZEN_BASE: u64 = 0xc000;

fn addr(n: u64) -> Address {
    Address::from_low_u64(n)
}

struct Harness {
    world: CivicWorld,
    config: RuntimeConfig,
    clock: NullClock,
    verifier: NullIdentityVerifier,
}

impl Harness {
    fn new() -> Self {
        let config = RuntimeConfig::default();
        let clock = NullClock::at_day(GENESIS_DAY);
        let verifier = NullIdentityVerifier::new(addr(VERIFIER));
        let factory = NullDaoFactory::new(addr(FACTORY), FACTORY_BASE);
        let world = CivicWorld::genesis(
            &config,
            Box::new(verifier.clone()),
            Box::new(factory),
            clock.now(),
        )
        .unwrap();
        Self {
            world,
            config,
            clock,
            verifier,
        }
    }

    fn onboard(&mut self, n: u64, country: &str) -> Address {
        let who = addr(CITIZEN_BASE + n);
        let expires = self.clock.now().plus_secs(365 * SECS_PER_DAY);
        let proof = self.verifier.issue(who, country, expires);
        self.world.verify_identity(&self.clock.ctx(who), &proof).unwrap();
        who
    }

    fn operator(&self) -> Address {
        self.config.initial_operator
    }

    fn stranger(&self) -> Address {
        addr(0xbad)
    }

    /// Every registered country whitelists `call` at the current nonce.
    fn approve_everywhere(&mut self, call: &AdminCall) {
        let hash = self.world.pending_tx_hash(call).unwrap();
        for country in self.world.gate.countries().to_vec() {
            self.world.whitelist(&self.clock.ctx(country), hash).unwrap();
        }
    }
}

// ---- Genesis ----

#[test]
fn test_genesis_wires_ledger_to_gate() {
    let h = Harness::new();
    assert_eq!(h.world.ledger.gate_address(), h.config.gate_address);
    assert_eq!(h.world.gate.ledger_address(), h.config.ledger_address);
    let (operator, remaining) = h.world.gate.initial_operator(h.clock.now());
    assert_eq!(operator, h.operator());
    assert_eq!(remaining, 365 * SECS_PER_DAY);
}

#[test]
fn test_genesis_rejects_zero_operator() {
    let config = RuntimeConfig {
        initial_operator: Address::ZERO,
        ..RuntimeConfig::default()
    };
    let result = CivicWorld::genesis(
        &config,
        Box::new(NullIdentityVerifier::new(addr(VERIFIER))),
        Box::new(NullDaoFactory::new(addr(FACTORY), FACTORY_BASE)),
        NullClock::at_day(GENESIS_DAY).now(),
    );
    assert!(matches!(result, Err(RuntimeError::Gate(GateError::ZeroAddress(_)))));
}

// ---- Onboarding registers countries ----

#[test]
fn test_new_countries_register_with_gate() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    h.onboard(2, "A");
    assert_eq!(h.world.gate.countries().len(), 1);
    h.onboard(3, "B");
    h.onboard(4, "C");
    assert_eq!(h.world.gate.countries().len(), 3);

    let a_dao = h.world.gate.countries()[0];
    assert!(h.world.gate.is_country(a_dao));
    assert!(!h.world.gate.is_country(addr(CITIZEN_BASE + 1)));
}

// ---- Governance ----

#[test]
fn test_unanimous_pause_reaches_ledger() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    h.onboard(2, "B");
    h.onboard(3, "C");

    let pause = AdminCall::Pause;
    h.approve_everywhere(&pause);
    let executor = h.stranger();
    let tx = h.world.execute(&h.clock.ctx(executor), &pause).unwrap();

    assert!(h.world.ledger.is_paused());
    assert_eq!(h.world.gate.nonce(), 1);
    assert_eq!(tx, call_hash(&pause.encode().unwrap(), 0));
    let events = h.world.gate.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GateEvent::ExecutedTx { authority: Authority::Unanimous, nonce: 0, .. }
    )));
}

#[test]
fn test_partial_approval_is_not_enough() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    h.onboard(2, "B");

    let pause = AdminCall::Pause;
    let hash = h.world.pending_tx_hash(&pause).unwrap();
    let first = h.world.gate.countries()[0];
    h.world.whitelist(&h.clock.ctx(first), hash).unwrap();

    let executor = h.stranger();
    let err = h.world.execute(&h.clock.ctx(executor), &pause).unwrap_err();
    assert!(matches!(err, RuntimeError::Gate(GateError::NotWhitelisted)));
    assert!(!h.world.ledger.is_paused());
}

#[test]
fn test_revoked_approval_blocks_execution() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    h.onboard(2, "B");

    let pause = AdminCall::Pause;
    h.approve_everywhere(&pause);
    let hash = h.world.pending_tx_hash(&pause).unwrap();
    let first = h.world.gate.countries()[0];
    h.world.revoke(&h.clock.ctx(first), hash).unwrap();

    let executor = h.stranger();
    assert!(h.world.execute(&h.clock.ctx(executor), &pause).is_err());
}

#[test]
fn test_approval_does_not_replay() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    h.onboard(2, "B");

    let pause = AdminCall::Pause;
    let unpause = AdminCall::Unpause;
    let executor = h.stranger();

    h.approve_everywhere(&pause);
    h.world.execute(&h.clock.ctx(executor), &pause).unwrap();
    h.approve_everywhere(&unpause);
    h.world.execute(&h.clock.ctx(executor), &unpause).unwrap();
    assert!(!h.world.ledger.is_paused());

    // Same call data, new nonce: the old approvals no longer count.
    let err = h.world.execute(&h.clock.ctx(executor), &pause).unwrap_err();
    assert!(matches!(err, RuntimeError::Gate(GateError::NotWhitelisted)));
    assert_eq!(h.world.gate.nonce(), 2);
}

#[test]
fn test_operator_pauses_inside_window_only() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    let operator = h.operator();

    h.world.execute(&h.clock.ctx(operator), &AdminCall::Pause).unwrap();
    assert!(h.world.ledger.is_paused());
    h.world.execute(&h.clock.ctx(operator), &AdminCall::Unpause).unwrap();

    h.clock.advance_days(366);
    let err = h.world.execute(&h.clock.ctx(operator), &AdminCall::Pause).unwrap_err();
    assert!(matches!(err, RuntimeError::Gate(GateError::OperatorExpired)));
    assert!(!h.world.ledger.is_paused());
}

#[test]
fn test_redundant_pause_reverts_and_keeps_nonce() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    let operator = h.operator();

    h.world.execute(&h.clock.ctx(operator), &AdminCall::Pause).unwrap();
    let err = h.world.execute(&h.clock.ctx(operator), &AdminCall::Pause).unwrap_err();
    assert!(matches!(err, RuntimeError::Gate(GateError::CallFailed(_))));
    assert_eq!(h.world.gate.nonce(), 1);
}

#[test]
fn test_upgrade_through_gate() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    let operator = h.operator();
    let implementation = addr(0x9999);

    h.world
        .execute(&h.clock.ctx(operator), &AdminCall::UpgradeTo { implementation })
        .unwrap();
    assert_eq!(h.world.ledger.implementation(), implementation);
    assert_eq!(h.world.ledger.version(), 2);
}

#[test]
fn test_direct_pause_bypassing_gate_fails() {
    let mut h = Harness::new();
    let operator = h.operator();
    let err = h.world.ledger.pause(&h.clock.ctx(operator)).unwrap_err();
    assert!(matches!(err, LedgerError::NotGate));
}

#[test]
fn test_transferred_operator_keeps_expiry() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    let operator = h.operator();
    let successor = addr(0x5555);

    h.clock.advance_days(10);
    h.world
        .transfer_initial_operator(&h.clock.ctx(operator), successor)
        .unwrap();
    let (current, remaining) = h.world.gate.initial_operator(h.clock.now());
    assert_eq!(current, successor);
    assert_eq!(remaining, 355 * SECS_PER_DAY);

    let err = h.world.execute(&h.clock.ctx(operator), &AdminCall::Pause).unwrap_err();
    assert!(matches!(err, RuntimeError::Gate(GateError::NotWhitelisted)));
    h.world.execute(&h.clock.ctx(successor), &AdminCall::Pause).unwrap();
}

#[test]
fn test_renounced_operator_leaves_unanimity() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    let operator = h.operator();
    h.world.renounce_initial_operator(&h.clock.ctx(operator)).unwrap();

    assert!(h.world.execute(&h.clock.ctx(operator), &AdminCall::Pause).is_err());
    h.approve_everywhere(&AdminCall::Pause);
    h.world.execute(&h.clock.ctx(operator), &AdminCall::Pause).unwrap();
    assert!(h.world.ledger.is_paused());
}

// ---- Gate upgrades ----

#[test]
fn test_operator_upgrades_gate_and_keeps_operator() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    let operator = h.operator();
    h.clock.advance_days(30);
    let before = h.world.gate.initial_operator(h.clock.now());
    assert_eq!(h.world.gate_implementation(), Some(h.config.gate_implementation));

    let upgrade = ProxyCall::Upgrade {
        proxy: h.config.gate_address,
        implementation: addr(0x2222),
    };
    h.world.execute_proxy(&h.clock.ctx(operator), &upgrade).unwrap();

    assert_eq!(h.world.gate_implementation(), Some(addr(0x2222)));
    assert_eq!(h.world.gate.initial_operator(h.clock.now()), before);
    assert_eq!(before, (operator, 335 * SECS_PER_DAY));
    assert_eq!(h.world.gate.nonce(), 1);
}

#[test]
fn test_unanimous_gate_upgrade_after_window() {
    let mut h = Harness::new();
    h.onboard(1, "A");
    h.onboard(2, "B");
    h.clock.advance_days(400);

    let upgrade = ProxyCall::Upgrade {
        proxy: h.config.gate_address,
        implementation: addr(0x3333),
    };
    let operator = h.operator();
    let err = h.world.execute_proxy(&h.clock.ctx(operator), &upgrade).unwrap_err();
    assert!(matches!(err, RuntimeError::Gate(GateError::OperatorExpired)));

    let hash = h.world.pending_proxy_tx_hash(&upgrade).unwrap();
    for country in h.world.gate.countries().to_vec() {
        h.world.whitelist(&h.clock.ctx(country), hash).unwrap();
    }
    let executor = h.stranger();
    h.world.execute_proxy(&h.clock.ctx(executor), &upgrade).unwrap();
    assert_eq!(h.world.gate_implementation(), Some(addr(0x3333)));
    assert_eq!(h.world.proxy_admin.record(h.config.gate_address).unwrap().version, 2);
}

// ---- Paused ledger ----

#[test]
fn test_pause_blocks_claims_until_unpaused() {
    let mut h = Harness::new();
    let alice = h.onboard(1, "A");
    let operator = h.operator();

    h.world.execute(&h.clock.ctx(operator), &AdminCall::Pause).unwrap();
    let err = h.world.claim(&h.clock.ctx(alice), "hello", &[], alice).unwrap_err();
    assert!(matches!(err, RuntimeError::Ledger(LedgerError::Paused)));

    h.world.execute(&h.clock.ctx(operator), &AdminCall::Unpause).unwrap();
    let outcome = h.world.claim(&h.clock.ctx(alice), "hello", &[], alice).unwrap();
    assert_eq!(outcome.issued, tokens(64));
}

#[test]
fn test_batch_claim_through_world() {
    let mut h = Harness::new();
    let alice = h.onboard(1, "A");
    let bob = h.onboard(2, "A");
    let relayer = addr(0x7777);

    for who in [alice, bob] {
        h.world.approve(&h.clock.ctx(who), relayer, tokens(64)).unwrap();
    }
    h.world.approve(&h.clock.ctx(relayer), alice, tokens(64)).unwrap();
    h.world.approve(&h.clock.ctx(relayer), bob, tokens(64)).unwrap();

    let requests = vec![
        ClaimRequest {
            proposal: "alice batch".into(),
            votes: vec![],
            on_behalf_of: alice,
        },
        ClaimRequest {
            proposal: "bob batch".into(),
            votes: vec![],
            on_behalf_of: bob,
        },
    ];
    let outcomes = h.world.claim_batch(&h.clock.ctx(relayer), &requests).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(h.world.ledger.balance_of(alice), tokens(64));
    assert_eq!(h.world.ledger.balance_of(bob), tokens(64));
}

#[test]
fn test_wallet_change_through_world() {
    let mut h = Harness::new();
    let alice = h.onboard(1, "A");
    let fresh = addr(0x8888);
    h.world.change_wallet(&h.clock.ctx(alice), fresh).unwrap();
    assert!(h.world.ledger.citizen(fresh).is_qualified);
    assert!(!h.world.ledger.citizen(alice).is_qualified);
}

// ---- Persistence ----

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut h = Harness::new();
    let alice = h.onboard(1, "A");
    h.world.claim(&h.clock.ctx(alice), "persist me", &[], alice).unwrap();
    let operator = h.operator();
    h.world.execute(&h.clock.ctx(operator), &AdminCall::Pause).unwrap();
    let upgrade = ProxyCall::Upgrade {
        proxy: h.config.gate_address,
        implementation: addr(0x2222),
    };
    h.world.execute_proxy(&h.clock.ctx(operator), &upgrade).unwrap();
    h.world.save(dir.path()).unwrap();

    let mut fresh = Harness::new();
    fresh.world.load(dir.path()).unwrap();
    assert!(fresh.world.ledger.is_paused());
    assert_eq!(fresh.world.gate.nonce(), 2);
    assert_eq!(fresh.world.gate.countries().len(), 1);
    assert_eq!(fresh.world.gate_implementation(), Some(addr(0x2222)));
    assert_eq!(fresh.world.ledger.balance_of(alice), tokens(64));
}

#[test]
fn test_load_from_missing_dir_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let mut h = Harness::new();
    h.onboard(1, "A");
    let err = h.world.load(&dir.path().join("nothing-here")).unwrap_err();
    assert!(matches!(err, RuntimeError::Io(_)));
    assert_eq!(h.world.gate.countries().len(), 1);
}

#[test]
fn test_load_rejects_corrupt_ledger_and_keeps_gate() {
    let dir = tempfile::tempdir().unwrap();
    let mut h = Harness::new();
    h.onboard(1, "A");
    h.world.save(dir.path()).unwrap();
    std::fs::write(dir.path().join("ledger.bin"), b"garbage").unwrap();

    let mut fresh = Harness::new();
    let err = fresh.world.load(dir.path()).unwrap_err();
    assert!(matches!(err, RuntimeError::Ledger(_)));
    assert!(fresh.world.gate.countries().is_empty());
}

#[test]
fn test_config_file_drives_genesis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("civic.toml");
    std::fs::write(
        &path,
        "initial_operator = \"0x00000000000000000000000000000000000000ab\"\n\n[params]\noperator_window_days = 7\n",
    )
    .unwrap();
    let config = RuntimeConfig::from_toml_file(&path).unwrap();
    let clock = NullClock::at_day(GENESIS_DAY);
    let world = CivicWorld::genesis(
        &config,
        Box::new(NullIdentityVerifier::new(addr(VERIFIER))),
        Box::new(NullDaoFactory::new(addr(FACTORY), FACTORY_BASE)),
        clock.now(),
    )
    .unwrap();
    assert_eq!(world.gate.initial_operator(clock.now()), (addr(0xab), 7 * SECS_PER_DAY));
}
