//! # Events
//!
//! Every state change publishes exactly one event, after the storage write
//! it describes. Topics are `(kind, campaign_id)`; the data is one of the
//! typed payloads below.
//!
//! | Topic       | Payload                |
//! |-------------|------------------------|
//! | `created`   | [`CampaignCreated`]      |
//! | `contrib`   | [`ContributionReceived`] |
//! | `withdrawn` | [`FundsWithdrawn`]       |
//! | `locked`    | [`CampaignLocked`]       |
//! | `unlocked`  | [`CampaignUnlocked`]     |
//! | `admin`     | [`AdminTransferred`]     |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub creator: Address,
    pub name: String,
    pub description: String,
    pub time_goal: u64,
    pub money_goal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionReceived {
    pub campaign_id: u64,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub campaign_id: u64,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignLocked {
    pub campaign_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignUnlocked {
    pub campaign_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferred {
    pub previous: Address,
    pub current: Address,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreated) {
    env.events()
        .publish((symbol_short!("created"), event.campaign_id), event);
}

pub fn emit_contribution_received(env: &Env, campaign_id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("contrib"), campaign_id),
        ContributionReceived {
            campaign_id,
            amount,
        },
    );
}

pub fn emit_funds_withdrawn(env: &Env, campaign_id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"), campaign_id),
        FundsWithdrawn {
            campaign_id,
            amount,
        },
    );
}

pub fn emit_campaign_locked(env: &Env, campaign_id: u64) {
    env.events().publish(
        (symbol_short!("locked"), campaign_id),
        CampaignLocked { campaign_id },
    );
}

pub fn emit_campaign_unlocked(env: &Env, campaign_id: u64) {
    env.events().publish(
        (symbol_short!("unlocked"), campaign_id),
        CampaignUnlocked { campaign_id },
    );
}

pub fn emit_admin_transferred(env: &Env, previous: Address, current: Address) {
    env.events().publish(
        (symbol_short!("admin"),),
        AdminTransferred { previous, current },
    );
}
