//! Runtime configuration with TOML file support.

use civic_types::{tokens, Address, CivicParams, SECS_PER_DAY};
use civic_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::RuntimeError;

/// Configuration for a ledger deployment.
///
/// Can be loaded from a TOML file via [`RuntimeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Address of the ledger; also names its issuance token.
    #[serde(default = "default_ledger_address")]
    pub ledger_address: Address,

    #[serde(default = "default_gate_address")]
    pub gate_address: Address,

    /// Admin of the upgradeable gate proxy; owned by the gate.
    #[serde(default = "default_proxy_admin_address")]
    pub proxy_admin_address: Address,

    /// Implementation the gate proxy points at after genesis.
    #[serde(default = "default_gate_implementation")]
    pub gate_implementation: Address,

    /// Bootstrap operator trusted alone during the operator window.
    #[serde(default = "default_initial_operator")]
    pub initial_operator: Address,

    /// Where `CivicWorld::save` writes its snapshots.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter, e.g. "info" or "debug,civic_ledger=trace".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Kept last so it serialises as a trailing `[params]` table.
    #[serde(default)]
    pub params: ParamsConfig,
}

/// Tunables in whole tokens and days, converted to raw [`CivicParams`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub claimable_tokens: u64,
    pub max_vote_score: u64,
    pub max_proposal_len: usize,
    pub country_pool_tokens: u64,
    pub global_pool_tokens: u64,
    pub operator_window_days: u64,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_ledger_address() -> Address {
    Address::from_low_u64(1)
}

fn default_gate_address() -> Address {
    Address::from_low_u64(2)
}

fn default_initial_operator() -> Address {
    Address::from_low_u64(3)
}

fn default_proxy_admin_address() -> Address {
    Address::from_low_u64(4)
}

fn default_gate_implementation() -> Address {
    Address::from_low_u64(5)
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./civic_data")
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl RuntimeConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RuntimeError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| RuntimeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, RuntimeError> {
        toml::from_str(s).map_err(|e| RuntimeError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, RuntimeError> {
        toml::to_string_pretty(self).map_err(|e| RuntimeError::Config(e.to_string()))
    }

    /// Validated raw parameters.
    pub fn civic_params(&self) -> Result<CivicParams, RuntimeError> {
        let params = self.params.to_params();
        params
            .validate()
            .map_err(|e| RuntimeError::Config(e.to_string()))?;
        Ok(params)
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), RuntimeError> {
        civic_utils::init_logging(self.log_format, &self.log_level)?;
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            ledger_address: default_ledger_address(),
            gate_address: default_gate_address(),
            proxy_admin_address: default_proxy_admin_address(),
            gate_implementation: default_gate_implementation(),
            initial_operator: default_initial_operator(),
            data_dir: default_data_dir(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            params: ParamsConfig::default(),
        }
    }
}

impl ParamsConfig {
    pub fn to_params(&self) -> CivicParams {
        CivicParams {
            claimable_amount: tokens(u128::from(self.claimable_tokens)),
            max_vote_score: self.max_vote_score,
            max_proposal_len: self.max_proposal_len,
            country_issuance_pool: tokens(u128::from(self.country_pool_tokens)),
            global_issuance_pool: tokens(u128::from(self.global_pool_tokens)),
            operator_window_secs: self.operator_window_days.saturating_mul(SECS_PER_DAY),
        }
    }
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            claimable_tokens: 64,
            max_vote_score: 12,
            max_proposal_len: 1337,
            country_pool_tokens: 10_000,
            global_pool_tokens: 1_337_000,
            operator_window_days: 365,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = RuntimeConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = RuntimeConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = RuntimeConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.ledger_address, Address::from_low_u64(1));
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.civic_params().unwrap(), CivicParams::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            initial_operator = "0x00000000000000000000000000000000000000aa"
            log_format = "json"

            [params]
            max_vote_score = 8
            operator_window_days = 30
        "#;
        let config = RuntimeConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.initial_operator, Address::from_low_u64(0xaa));
        assert_eq!(config.log_format, LogFormat::Json);
        let params = config.civic_params().unwrap();
        assert_eq!(params.max_vote_score, 8);
        assert_eq!(params.operator_window_secs, 30 * SECS_PER_DAY);
        assert_eq!(params.claimable_amount, tokens(64)); // default
    }

    #[test]
    fn bad_address_is_a_config_error() {
        let err = RuntimeConfig::from_toml_str(r#"gate_address = "0x12""#).unwrap_err();
        assert!(matches!(err, RuntimeError::Config(_)));

        let signed = format!("gate_address = \"0x+f{}\"", "0".repeat(38));
        assert!(matches!(
            RuntimeConfig::from_toml_str(&signed),
            Err(RuntimeError::Config(_))
        ));
    }

    #[test]
    fn zero_score_cap_rejected() {
        let config = RuntimeConfig::from_toml_str("[params]\nmax_vote_score = 0").unwrap();
        assert!(matches!(config.civic_params(), Err(RuntimeError::Config(_))));
    }
}
