#![no_main]

use libfuzzer_sys::fuzz_target;

use civic_ledger::{no_proposal_bonus, vote_cost, CountryDao};
use civic_types::{Address, Day};

// Vote pricing, drought bonus and DAO pool arithmetic with arbitrary inputs.
// None of them may panic; the pool may never grow.
fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let word = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        u64::from_le_bytes(bytes)
    };

    let score = word(0);
    let same = vote_cost(score, true);
    let cross = vote_cost(score, false);
    if let (Some(same), Some(cross)) = (same, cross) {
        assert!(cross >= same || score == 0);
    }

    let _ = no_proposal_bonus(Day::new(word(1)), Day::new(word(2)));

    let mut dao = CountryDao {
        token: Address::from_low_u64(1),
        dao: Address::from_low_u64(2),
        bonus_base: u128::from(word(3)),
        verified_count: 1,
    };
    for chunk in data[32..].chunks(8) {
        let before = dao.bonus_base;
        if chunk[0] % 2 == 0 {
            let _ = dao.admit();
        } else {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            dao.draw(u128::from(u64::from_le_bytes(bytes)));
        }
        assert!(dao.bonus_base <= before);
    }
});
