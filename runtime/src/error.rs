use civic_gate::GateError;
use civic_ledger::LedgerError;
use civic_utils::LoggingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("gate error: {0}")]
    Gate(#[from] GateError),

    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
