use civic_types::{Address, TxHash};
use serde::{Deserialize, Serialize};

/// Which path authorised an execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Authority {
    Operator,
    Unanimous,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateEvent {
    CountryAdded {
        country: Address,
    },
    TxWhitelisted {
        tx_hash: TxHash,
        country: Address,
    },
    TxRevoked {
        tx_hash: TxHash,
        country: Address,
    },
    ExecutedTx {
        tx_hash: TxHash,
        nonce: u64,
        target: Address,
        executor: Address,
        authority: Authority,
    },
    OperatorTransferred {
        from: Address,
        to: Address,
    },
    OperatorRenounced {
        operator: Address,
    },
    ProxyUpgraded {
        proxy: Address,
        implementation: Address,
        version: u64,
    },
}
