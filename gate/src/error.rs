use civic_interfaces::ExternalError;
use thiserror::Error;

/// Failure class of a rejected gate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateErrorKind {
    Authorization,
    Validation,
    State,
    External,
}

#[derive(Debug, Error)]
pub enum GateError {
    #[error("caller is not the ledger")]
    NotLedger,

    #[error("caller is not a registered country")]
    NotCountry,

    #[error("caller is not the initial operator")]
    NotOperator,

    #[error("{0} is the zero address")]
    ZeroAddress(&'static str),

    #[error("country already exists")]
    CountryExists,

    #[error("tx already whitelisted by this country")]
    AlreadyWhitelisted,

    #[error("tx is not whitelisted")]
    NotWhitelisted,

    #[error("initial operator expired")]
    OperatorExpired,

    #[error("caller is not the proxy owner")]
    NotProxyOwner,

    #[error("proxy is not registered")]
    UnknownProxy,

    #[error("proxy already registered")]
    ProxyExists,

    #[error("call encoding error: {0}")]
    Encoding(String),

    #[error("arithmetic overflow in gate counter")]
    Overflow,

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("tx failed: {0}")]
    CallFailed(#[from] ExternalError),
}

impl GateError {
    pub fn kind(&self) -> GateErrorKind {
        use GateError::*;
        match self {
            NotLedger | NotCountry | NotOperator | NotProxyOwner => GateErrorKind::Authorization,
            ZeroAddress(_) | CountryExists | UnknownProxy | ProxyExists | Encoding(_) => {
                GateErrorKind::Validation
            }
            AlreadyWhitelisted | NotWhitelisted | OperatorExpired | Overflow | Snapshot(_) => {
                GateErrorKind::State
            }
            CallFailed(_) => GateErrorKind::External,
        }
    }
}
