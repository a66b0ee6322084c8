//! Capability to mint contributor badges on the reward contract.
//!
//! The reward contract only accepts `mint` from its owner, which is set to
//! this ledger's contract address after deployment. The ledger's own reward
//! record (`storage::is_rewarded`) decides whether a mint happens at all.

use soroban_sdk::{contractclient, Address, Env};

use crate::storage;
use crate::Error;

#[contractclient(name = "RewardIssuerClient")]
pub trait RewardIssuer {
    fn mint(env: Env, campaign_id: u64, contributor: Address) -> u64;
}

/// Mint a badge for `contributor` unless they already hold one for this campaign.
///
/// Returns the new badge id, or `None` for a repeat contributor.
pub fn reward_first_contribution(
    env: &Env,
    campaign_id: u64,
    contributor: &Address,
) -> Result<Option<u64>, Error> {
    if storage::is_rewarded(env, campaign_id, contributor) {
        return Ok(None);
    }

    let issuer = storage::get_reward_contract(env)?;
    storage::mark_rewarded(env, campaign_id, contributor);
    let badge_id = RewardIssuerClient::new(env, &issuer).mint(&campaign_id, contributor);
    Ok(Some(badge_id))
}
