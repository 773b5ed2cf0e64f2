//! Nullable identity verifier: proofs are tickets issued by the test.

use civic_interfaces::{ExternalError, IdentityAttestation, IdentityProof, IdentityVerifier};
use civic_types::{Address, Timestamp};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Attests whatever the test registered for a proof. Clones share the registry.
#[derive(Clone)]
pub struct NullIdentityVerifier {
    address: Address,
    issued: Rc<RefCell<HashMap<Vec<u8>, IdentityAttestation>>>,
}

impl NullIdentityVerifier {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            issued: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Issue a valid proof binding `subject` to `country` until `expires_at`.
    pub fn issue(&self, subject: Address, country: &str, expires_at: Timestamp) -> IdentityProof {
        self.register(IdentityAttestation {
            subject,
            country: country.to_string(),
            expires_at,
            is_expired: false,
        })
    }

    /// Issue a proof the verifier itself reports as expired.
    pub fn issue_expired(&self, subject: Address, country: &str) -> IdentityProof {
        self.register(IdentityAttestation {
            subject,
            country: country.to_string(),
            expires_at: Timestamp::EPOCH,
            is_expired: true,
        })
    }

    pub fn register(&self, attestation: IdentityAttestation) -> IdentityProof {
        let mut issued = self.issued.borrow_mut();
        let mut bytes = attestation.subject.as_bytes().to_vec();
        bytes.extend_from_slice(&(issued.len() as u64).to_be_bytes());
        issued.insert(bytes.clone(), attestation);
        IdentityProof::new(bytes)
    }
}

impl IdentityVerifier for NullIdentityVerifier {
    fn address(&self) -> Address {
        self.address
    }

    fn verify(&self, proof: &IdentityProof) -> Result<IdentityAttestation, ExternalError> {
        self.issued
            .borrow()
            .get(proof.as_bytes())
            .cloned()
            .ok_or_else(|| ExternalError::Rejected("unknown proof".into()))
    }
}
