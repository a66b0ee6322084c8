//! # Storage
//!
//! ## Instance storage
//!
//! | Key           | Type      | Description                        |
//! |---------------|-----------|------------------------------------|
//! | `Owner`       | `Address` | Only address allowed to mint       |
//! | `BaseUri`     | `String`  | Descriptor prefix                  |
//! | `NextBadgeId` | `u64`     | Global badge counter               |
//!
//! ## Persistent storage
//!
//! | Key                          | Type      | Description                   |
//! |------------------------------|-----------|-------------------------------|
//! | `BadgeOwner(id)`             | `Address` | Holder of a badge             |
//! | `Descriptor(id)`             | `String`  | `BaseUri` + decimal id        |
//! | `Balance(address)`           | `u32`     | Badges held by an address     |
//! | `CampaignBadge(id, address)` | `u64`     | Badge issued for a campaign   |

use soroban_sdk::{contracttype, Address, Env, String};

use crate::Error;

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    BaseUri,
    NextBadgeId,
    BadgeOwner(u64),
    Descriptor(u64),
    Balance(Address),
    CampaignBadge(u64, Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn init_config(env: &Env, owner: &Address, base_uri: &String) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::BaseUri, base_uri);
    instance.set(&DataKey::NextBadgeId, &0u64);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn get_base_uri(env: &Env) -> Result<String, Error> {
    env.storage()
        .instance()
        .get(&DataKey::BaseUri)
        .ok_or(Error::NotInitialized)
}

pub fn total_minted(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextBadgeId)
        .unwrap_or(0)
}

/// Returns the id for the badge being minted and advances the counter.
pub fn get_and_increment_badge_id(env: &Env) -> Result<u64, Error> {
    let current = total_minted(env);
    let next = current.checked_add(1).ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::NextBadgeId, &next);
    bump_instance(env);
    Ok(current)
}

pub fn badge_of(env: &Env, campaign_id: u64, holder: &Address) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::CampaignBadge(campaign_id, holder.clone()))
}

pub fn balance_of(env: &Env, holder: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

/// Record a freshly minted badge under every index it is reachable from.
pub fn save_badge(
    env: &Env,
    badge_id: u64,
    campaign_id: u64,
    holder: &Address,
    descriptor: &String,
) -> Result<(), Error> {
    let balance = balance_of(env, holder)
        .checked_add(1)
        .ok_or(Error::Overflow)?;

    let keys = [
        DataKey::BadgeOwner(badge_id),
        DataKey::Descriptor(badge_id),
        DataKey::Balance(holder.clone()),
        DataKey::CampaignBadge(campaign_id, holder.clone()),
    ];
    let persistent = env.storage().persistent();
    persistent.set(&keys[0], holder);
    persistent.set(&keys[1], descriptor);
    persistent.set(&keys[2], &balance);
    persistent.set(&keys[3], &badge_id);
    for key in keys.iter() {
        bump_persistent(env, key);
    }
    Ok(())
}

pub fn owner_of(env: &Env, badge_id: u64) -> Result<Address, Error> {
    let key = DataKey::BadgeOwner(badge_id);
    let holder = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::UnknownBadge)?;
    bump_persistent(env, &key);
    Ok(holder)
}

pub fn descriptor_of(env: &Env, badge_id: u64) -> Result<String, Error> {
    let key = DataKey::Descriptor(badge_id);
    let descriptor = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::UnknownBadge)?;
    bump_persistent(env, &key);
    Ok(descriptor)
}
