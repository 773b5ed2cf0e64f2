//! Identity onboarding.
//!
//! A verified proof writes the caller's citizen record, then, for a first-time
//! holder, joins the caller to its country DAO and to the global DAO. Unknown
//! countries are instantiated through the DAO factory and announced to the
//! consensus gate.
//!
//! The citizen record and DAO counters are written to the staged state before
//! any factory or registry call. Collaborators never hold a handle to the
//! ledger, and nothing is committed until every call has returned.

use civic_crypto::country_hash;
use civic_interfaces::{CountryRegistry, DaoFactory, ExternalError, IdentityProof};
use civic_types::{Address, CallContext, CivicParams, CountryHash};

use crate::citizen::Citizen;
use crate::dao::CountryDao;
use crate::engine::{CivicLedger, Staged};
use crate::error::LedgerError;
use crate::event::LedgerEvent;

/// Name handed to the factory when the global DAO is first instantiated.
pub const GLOBAL_DAO_NAME: &str = "global";

impl CivicLedger {
    pub fn verify_identity(
        &mut self,
        ctx: &CallContext,
        proof: &IdentityProof,
        registry: &mut dyn CountryRegistry,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;

        let attestation = self.identity.verify(proof)?;
        if attestation.is_expired_at(ctx.now) {
            return Err(LedgerError::ExpiredIdentity);
        }
        if attestation.subject != ctx.caller {
            return Err(LedgerError::SubjectMismatch);
        }

        let hash = country_hash(&attestation.country);
        let mut staged = self.stage();
        let previous = staged.state.citizen(&ctx.caller);
        let joins_country = !(previous.is_qualified && previous.country_hash == hash);
        let joins_global = !previous.is_qualified;

        staged.state.citizens.insert(
            ctx.caller,
            Citizen {
                country: attestation.country.clone(),
                country_hash: hash,
                revalidate_at: attestation.expires_at,
                is_qualified: true,
                last_claimed_day: previous.last_claimed_day,
            },
        );

        let ledger = self.address();
        if joins_country {
            join_country(
                &mut staged,
                &mut *self.factory,
                registry,
                &ctx.with_caller(ledger),
                &self.params,
                ctx.caller,
                &attestation.country,
                hash,
            )?;
        }
        if joins_global {
            join_global(&mut staged, &mut *self.factory, &self.params, ctx.caller)?;
        }

        staged.emit(LedgerEvent::Verified {
            citizen: ctx.caller,
            country: attestation.country,
            revalidate_at: attestation.expires_at,
        });
        self.commit(staged);
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn join_country(
    staged: &mut Staged,
    factory: &mut dyn DaoFactory,
    registry: &mut dyn CountryRegistry,
    ledger_ctx: &CallContext,
    params: &CivicParams,
    citizen: Address,
    country: &str,
    hash: CountryHash,
) -> Result<(), LedgerError> {
    if let Some(dao) = staged.state.daos.get_mut(&hash) {
        let bonus = dao.admit()?;
        let (token, verified_count) = (dao.token, dao.verified_count);
        staged.state.tokens.mint(token, citizen, bonus)?;
        staged.emit(LedgerEvent::CitizenOnboarded {
            citizen,
            country_hash: hash,
            bonus,
            verified_count,
        });
        return Ok(());
    }

    let instance = factory.instantiate(country)?;
    if instance.token.is_zero() || instance.dao.is_zero() {
        return Err(ExternalError::Malformed("factory returned a zero address".into()).into());
    }
    staged
        .state
        .daos
        .insert(hash, CountryDao::founded(instance, params.country_issuance_pool));
    registry.add_country(ledger_ctx, instance.dao)?;
    staged.emit(LedgerEvent::NewCountryOnboarded {
        country: country.to_string(),
        country_hash: hash,
        token: instance.token,
        dao: instance.dao,
        founder: citizen,
    });
    Ok(())
}

fn join_global(
    staged: &mut Staged,
    factory: &mut dyn DaoFactory,
    params: &CivicParams,
    citizen: Address,
) -> Result<(), LedgerError> {
    let (bonus, verified_count) = match staged.state.daos.get_mut(&CountryHash::GLOBAL) {
        Some(dao) => {
            let bonus = dao.admit()?;
            let token = dao.token;
            let count = dao.verified_count;
            staged.state.tokens.mint(token, citizen, bonus)?;
            (bonus, count)
        }
        None => {
            let instance = factory.instantiate(GLOBAL_DAO_NAME)?;
            if instance.token.is_zero() || instance.dao.is_zero() {
                return Err(
                    ExternalError::Malformed("factory returned a zero address".into()).into(),
                );
            }
            staged.state.daos.insert(
                CountryHash::GLOBAL,
                CountryDao::founded(instance, params.global_issuance_pool),
            );
            (0, 1)
        }
    };
    staged.emit(LedgerEvent::GlobalCitizenOnboarded {
        citizen,
        bonus,
        verified_count,
    });
    Ok(())
}
