//! # Campaign Ledger Contract
//!
//! Crowdfunding escrow: anyone may open a campaign with a money goal and a
//! deadline, anyone may contribute to it, and the creator may withdraw the
//! accumulated funds once either goal is reached. First-time contributors to
//! a campaign receive one badge from the reward contract.
//!
//! | Phase        | Entry Point(s)                                     |
//! |--------------|----------------------------------------------------|
//! | Bootstrap    | [`CampaignLedger::init`]                           |
//! | Admin        | `lock_campaign`, `unlock_campaign`, `transfer_admin` |
//! | Registration | [`CampaignLedger::create_campaign`]                |
//! | Funding      | [`CampaignLedger::contribute`]                     |
//! | Release      | [`CampaignLedger::withdraw`]                       |
//! | Queries      | `get_campaign`, `campaign_balance`, `is_complete`, ... |
//!
//! Storage access is delegated to [`storage`], badge minting to [`reward`],
//! and event emission to [`events`]. Every entry point validates all of its
//! preconditions before the first write.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env, String};

pub mod events;
mod reward;
mod storage;
mod types;

#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_rewards;

pub use reward::{RewardIssuer, RewardIssuerClient};
pub use types::{Campaign, CampaignConfig, CampaignState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    EmptyField = 1,
    InsufficientGoal = 2,
    InvalidTimeGoal = 3,
    NonExistentCampaign = 4,
    CampaignLocked = 5,
    InsufficientAmount = 6,
    ActiveCampaign = 7,
    Unauthorized = 8,
    AlreadyUnlocked = 9,
    NotAdministrator = 10,
    AlreadyInitialized = 11,
    NotInitialized = 12,
    AlreadyWithdrawn = 13,
    CampaignClosed = 14,
    Overflow = 15,
}

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Configure the administrator, the funding token and the reward contract.
    ///
    /// Must be called exactly once after deployment. The reward contract's
    /// ownership should then be handed to this contract's address so that
    /// badge minting succeeds.
    pub fn init(env: Env, admin: Address, token: Address, reward: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::init_config(&env, &admin, &token, &reward);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    pub fn reward_contract(env: Env) -> Result<Address, Error> {
        storage::get_reward_contract(&env)
    }

    /// Hand the administrator capability to `new_admin`.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        caller.require_auth();
        require_admin(&env, &caller)?;

        storage::set_admin(&env, &new_admin);
        events::emit_admin_transferred(&env, caller, new_admin);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Register a new campaign and return its id.
    ///
    /// Open to any caller; `creator` becomes the only address able to withdraw.
    /// `deadline` is an absolute ledger timestamp and must lie strictly in the
    /// future.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        description: String,
        deadline: u64,
        money_goal: i128,
    ) -> Result<u64, Error> {
        creator.require_auth();

        if name.is_empty() || description.is_empty() {
            return Err(Error::EmptyField);
        }
        if money_goal < 1 {
            return Err(Error::InsufficientGoal);
        }
        if deadline <= env.ledger().timestamp() {
            return Err(Error::InvalidTimeGoal);
        }

        let id = storage::get_and_increment_campaign_id(&env)?;
        let config = CampaignConfig {
            id,
            creator: creator.clone(),
            name: name.clone(),
            description: description.clone(),
            time_goal: deadline,
            money_goal,
        };
        storage::save_campaign(&env, &config);

        events::emit_campaign_created(
            &env,
            events::CampaignCreated {
                campaign_id: id,
                creator,
                name,
                description,
                time_goal: deadline,
                money_goal,
            },
        );
        Ok(id)
    }

    /// Move `amount` of the funding token from `contributor` into custody.
    ///
    /// The first accepted contribution of an address to a campaign mints it a
    /// badge; later ones do not.
    pub fn contribute(
        env: Env,
        campaign_id: u64,
        contributor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();

        // Existence first: an unknown id would otherwise read as unlocked.
        let (_, mut state) = storage::load_campaign_pair(&env, campaign_id)?;
        if state.locked {
            return Err(Error::CampaignLocked);
        }
        if amount <= 0 {
            return Err(Error::InsufficientAmount);
        }
        if state.withdrawn {
            return Err(Error::CampaignClosed);
        }
        let new_balance = state.balance.checked_add(amount).ok_or(Error::Overflow)?;
        let token = storage::get_token(&env)?;

        token::Client::new(&env, &token).transfer(
            &contributor,
            &env.current_contract_address(),
            &amount,
        );

        state.balance = new_balance;
        storage::save_campaign_state(&env, campaign_id, &state);

        if let Some(badge_id) =
            reward::reward_first_contribution(&env, campaign_id, &contributor)?
        {
            log!(&env, "badge minted", campaign_id, badge_id);
        }

        events::emit_contribution_received(&env, campaign_id, amount);
        Ok(())
    }

    /// Release the campaign's funds to its creator.
    ///
    /// Allowed once the balance has reached the money goal or the ledger clock
    /// has reached the deadline, and only once per campaign. The balance is
    /// zeroed and persisted before the token transfer, so a re-entrant call
    /// sees a drained, withdrawn campaign. Returns the amount released.
    pub fn withdraw(env: Env, campaign_id: u64, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let (config, state) = storage::load_campaign_pair(&env, campaign_id)?;
        if caller != config.creator {
            return Err(Error::Unauthorized);
        }
        if state.withdrawn {
            return Err(Error::AlreadyWithdrawn);
        }
        if !config.is_complete(state.balance, env.ledger().timestamp()) {
            return Err(Error::ActiveCampaign);
        }
        let token = storage::get_token(&env)?;

        // Effects before interaction.
        let amount = storage::drain_campaign_balance(&env, campaign_id, state);

        if amount > 0 {
            token::Client::new(&env, &token).transfer(
                &env.current_contract_address(),
                &config.creator,
                &amount,
            );
        }
        log!(&env, "campaign withdrawn", campaign_id, amount);

        events::emit_funds_withdrawn(&env, campaign_id, amount);
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Administration
    // ─────────────────────────────────────────────────────────

    /// Block contributions to a campaign. Locking twice is allowed.
    pub fn lock_campaign(env: Env, caller: Address, campaign_id: u64) -> Result<(), Error> {
        caller.require_auth();
        require_admin(&env, &caller)?;

        let (_, mut state) = storage::load_campaign_pair(&env, campaign_id)?;
        state.locked = true;
        storage::save_campaign_state(&env, campaign_id, &state);

        events::emit_campaign_locked(&env, campaign_id);
        Ok(())
    }

    /// Accept contributions again. Fails if the campaign is not locked.
    pub fn unlock_campaign(env: Env, caller: Address, campaign_id: u64) -> Result<(), Error> {
        caller.require_auth();
        require_admin(&env, &caller)?;

        let (_, mut state) = storage::load_campaign_pair(&env, campaign_id)?;
        if !state.locked {
            return Err(Error::AlreadyUnlocked);
        }
        state.locked = false;
        storage::save_campaign_state(&env, campaign_id, &state);

        events::emit_campaign_unlocked(&env, campaign_id);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    /// Funds held for `campaign_id`; `0` for ids that were never created.
    pub fn campaign_balance(env: Env, campaign_id: u64) -> i128 {
        storage::load_campaign_state(&env, campaign_id)
            .map(|state| state.balance)
            .unwrap_or(0)
    }

    pub fn campaign_count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    pub fn is_registered(env: Env, campaign_id: u64) -> bool {
        storage::campaign_exists(&env, campaign_id)
    }

    /// Whether the money goal or the deadline has been reached right now.
    pub fn is_complete(env: Env, campaign_id: u64) -> Result<bool, Error> {
        let (config, state) = storage::load_campaign_pair(&env, campaign_id)?;
        Ok(config.is_complete(state.balance, env.ledger().timestamp()))
    }

    /// Whether `contributor` has already been issued a badge for `campaign_id`.
    pub fn is_rewarded(env: Env, campaign_id: u64, contributor: Address) -> bool {
        storage::is_rewarded(&env, campaign_id, &contributor)
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    if *caller != storage::get_admin(env)? {
        return Err(Error::NotAdministrator);
    }
    Ok(())
}
