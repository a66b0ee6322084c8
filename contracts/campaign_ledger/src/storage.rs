//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type      | Description                          |
//! |------------------|-----------|--------------------------------------|
//! | `Admin`          | `Address` | Administrator (lock / unlock)        |
//! | `Token`          | `Address` | Funding asset (SEP-41 token)         |
//! | `RewardContract` | `Address` | Badge issuer invoked on contribution |
//! | `CampaignCount`  | `u64`     | Next campaign id                     |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                     | Type             | Description                    |
//! |-------------------------|------------------|--------------------------------|
//! | `CampConfig(id)`        | `CampaignConfig` | Immutable campaign fields      |
//! | `CampState(id)`         | `CampaignState`  | Balance, lock and drain flags  |
//! | `Rewarded(id, address)` | `bool`           | Contributor already has badge  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Campaign, CampaignConfig, CampaignState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Token,
    RewardContract,
    CampaignCount,
    CampConfig(u64),
    CampState(u64),
    Rewarded(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Write the one-time configuration. Caller checks `is_initialized` first.
pub fn init_config(env: &Env, admin: &Address, token: &Address, reward: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Admin, admin);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::RewardContract, reward);
    instance.set(&DataKey::CampaignCount, &0u64);
    bump_instance(env);
}

fn get_address(env: &Env, key: &DataKey) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(key)
        .ok_or(Error::NotInitialized)
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    get_address(env, &DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    get_address(env, &DataKey::Token)
}

pub fn get_reward_contract(env: &Env) -> Result<Address, Error> {
    get_address(env, &DataKey::RewardContract)
}

/// Number of campaigns created so far; also the next id to hand out.
pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Atomically reads, increments, and stores the campaign counter.
/// Returns the ID to use for the *current* campaign (pre-increment value).
pub fn get_and_increment_campaign_id(env: &Env) -> Result<u64, Error> {
    bump_instance(env);
    let current = campaign_count(env);
    let next = current.checked_add(1).ok_or(Error::Overflow)?;
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &next);
    Ok(current)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Store the immutable config and a zeroed, unlocked state for a new campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig) {
    let config_key = DataKey::CampConfig(config.id);
    let state_key = DataKey::CampState(config.id);

    env.storage().persistent().set(&config_key, config);
    env.storage()
        .persistent()
        .set(&state_key, &CampaignState::default());
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// `true` for every id handed out by [`get_and_increment_campaign_id`].
pub fn campaign_exists(env: &Env, id: u64) -> bool {
    id < campaign_count(env) && env.storage().persistent().has(&DataKey::CampConfig(id))
}

pub fn load_campaign_config(env: &Env, id: u64) -> Result<CampaignConfig, Error> {
    if id >= campaign_count(env) {
        return Err(Error::NonExistentCampaign);
    }
    let key = DataKey::CampConfig(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NonExistentCampaign)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_campaign_state(env: &Env, id: u64) -> Result<CampaignState, Error> {
    let key = DataKey::CampState(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NonExistentCampaign)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Load config and state together; the existence check comes first.
pub fn load_campaign_pair(
    env: &Env,
    id: u64,
) -> Result<(CampaignConfig, CampaignState), Error> {
    let config = load_campaign_config(env, id)?;
    let state = load_campaign_state(env, id)?;
    Ok((config, state))
}

pub fn load_campaign(env: &Env, id: u64) -> Result<Campaign, Error> {
    let (config, state) = load_campaign_pair(env, id)?;
    Ok(Campaign::from_parts(config, state))
}

pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::CampState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Read the balance and persist a zero in its place, marking the campaign
/// as withdrawn. Returns the amount that was held.
pub fn drain_campaign_balance(env: &Env, id: u64, mut state: CampaignState) -> i128 {
    let amount = state.balance;
    state.balance = 0;
    state.withdrawn = true;
    save_campaign_state(env, id, &state);
    amount
}

// ── Reward record ────────────────────────────────────────────────────

pub fn is_rewarded(env: &Env, id: u64, contributor: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Rewarded(id, contributor.clone()))
        .unwrap_or(false)
}

pub fn mark_rewarded(env: &Env, id: u64, contributor: &Address) {
    let key = DataKey::Rewarded(id, contributor.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
