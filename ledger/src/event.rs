//! Events emitted by committed ledger transitions.

use civic_types::{Address, CountryHash, Day, ProposalHash, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    Verified {
        citizen: Address,
        country: String,
        revalidate_at: Timestamp,
    },
    NewCountryOnboarded {
        country: String,
        country_hash: CountryHash,
        token: Address,
        dao: Address,
        founder: Address,
    },
    CitizenOnboarded {
        citizen: Address,
        country_hash: CountryHash,
        bonus: u128,
        verified_count: u64,
    },
    GlobalCitizenOnboarded {
        citizen: Address,
        bonus: u128,
        verified_count: u64,
    },
    ProposingByAddress {
        proposer: Address,
        day: Day,
        proposal_hash: ProposalHash,
        text: String,
    },
    ProposingByCountry {
        country_hash: CountryHash,
        day: Day,
        proposal_hash: ProposalHash,
    },
    VotingByAddress {
        voter: Address,
        day: Day,
        proposal_hash: ProposalHash,
        voter_country: CountryHash,
        proposer_country: CountryHash,
        score: u64,
    },
    Claimed {
        account: Address,
        day: Day,
        issued: u128,
        spent: u128,
    },
    WalletChanged {
        from: Address,
        to: Address,
    },
    Paused,
    Unpaused,
    Upgraded {
        implementation: Address,
        version: u64,
    },
}
