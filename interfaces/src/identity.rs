use civic_types::{Address, Timestamp};
use serde::{Deserialize, Serialize};

use crate::ExternalError;

/// Opaque proof blob. Its format belongs to the verifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProof(pub Vec<u8>);

impl IdentityProof {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// What a verifier attests about the holder of a proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAttestation {
    /// Account the proof is bound to.
    pub subject: Address,
    pub country: String,
    pub expires_at: Timestamp,
    pub is_expired: bool,
}

impl IdentityAttestation {
    /// Expired when the verifier says so or when the expiry is not in the future.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.is_expired || self.expires_at <= now
    }
}

/// Checks identity proofs. Pure from the ledger's point of view.
pub trait IdentityVerifier {
    fn address(&self) -> Address;
    fn verify(&self, proof: &IdentityProof) -> Result<IdentityAttestation, ExternalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attestation(expires_at: u64, is_expired: bool) -> IdentityAttestation {
        IdentityAttestation {
            subject: Address::from_low_u64(1),
            country: "Ukraine".into(),
            expires_at: Timestamp::new(expires_at),
            is_expired,
        }
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let now = Timestamp::new(1_000);
        assert!(attestation(1_000, false).is_expired_at(now));
        assert!(!attestation(1_001, false).is_expired_at(now));
    }

    #[test]
    fn verifier_flag_wins() {
        assert!(attestation(u64::MAX, true).is_expired_at(Timestamp::new(0)));
    }
}
