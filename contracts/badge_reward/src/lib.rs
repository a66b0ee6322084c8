//! # Badge Reward Contract
//!
//! Issues one non-fungible badge per `(campaign, contributor)` pair on behalf
//! of the campaign ledger. Badge ids come from a single global counter starting
//! at 0, and each badge carries a descriptor URI built from the configured
//! prefix and its decimal id (`https://example.com/nft/7`).
//!
//! Only the contract owner may mint. After deployment the owner is handed to
//! the ledger contract with [`BadgeReward::transfer_ownership`].

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
};

mod storage;
mod uri;


pub use uri::MAX_BASE_URI_LEN;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    UnknownBadge = 3,
    NotOwner = 4,
    UriTooLong = 5,
    Overflow = 6,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BadgeMinted {
    pub badge_id: u64,
    pub campaign_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous: Address,
    pub current: Address,
}

#[contract]
pub struct BadgeReward;

#[contractimpl]
impl BadgeReward {
    /// Set the minting owner and the descriptor prefix. Callable once.
    pub fn init(env: Env, owner: Address, base_uri: String) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if base_uri.len() > MAX_BASE_URI_LEN {
            return Err(Error::UriTooLong);
        }
        owner.require_auth();
        storage::init_config(&env, &owner, &base_uri);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn base_uri(env: Env) -> Result<String, Error> {
        storage::get_base_uri(&env)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        if caller != storage::get_owner(&env)? {
            return Err(Error::NotOwner);
        }
        storage::set_owner(&env, &new_owner);
        env.events().publish(
            (symbol_short!("owner"),),
            OwnershipTransferred {
                previous: caller,
                current: new_owner,
            },
        );
        Ok(())
    }

    /// Issue a badge to `contributor` for `campaign_id` and return its id.
    ///
    /// Requires the owner's authorization. Minting again for a pair that
    /// already holds a badge returns the existing id and changes nothing.
    pub fn mint(env: Env, campaign_id: u64, contributor: Address) -> Result<u64, Error> {
        storage::get_owner(&env)?.require_auth();

        if let Some(existing) = storage::badge_of(&env, campaign_id, &contributor) {
            return Ok(existing);
        }

        let base_uri = storage::get_base_uri(&env)?;
        let badge_id = storage::get_and_increment_badge_id(&env)?;
        let descriptor = uri::descriptor(&env, &base_uri, badge_id);
        storage::save_badge(&env, badge_id, campaign_id, &contributor, &descriptor)?;

        env.events().publish(
            (symbol_short!("minted"), badge_id),
            BadgeMinted {
                badge_id,
                campaign_id,
                owner: contributor,
            },
        );
        Ok(badge_id)
    }

    /// Descriptor URI of a minted badge.
    pub fn descriptor_of(env: Env, badge_id: u64) -> Result<String, Error> {
        storage::descriptor_of(&env, badge_id)
    }

    pub fn owner_of(env: Env, badge_id: u64) -> Result<Address, Error> {
        storage::owner_of(&env, badge_id)
    }

    /// Number of badges held by `holder`, across all campaigns.
    pub fn balance_of(env: Env, holder: Address) -> u32 {
        storage::balance_of(&env, &holder)
    }

    pub fn badge_of(env: Env, campaign_id: u64, holder: Address) -> Option<u64> {
        storage::badge_of(&env, campaign_id, &holder)
    }

    pub fn total_minted(env: Env) -> u64 {
        storage::total_minted(&env)
    }
}
