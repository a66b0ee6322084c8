//! # Types
//!
//! Shared data structures used across all modules of the campaign ledger.
//!
//! ## Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at creation; never mutated.
//! - [`CampaignState`] — written on every contribution, lock toggle and
//!   withdrawal.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for convenience.
//!
//! ## Completion is derived
//!
//! There is no stored "complete" flag. A campaign is complete when its balance
//! has reached `money_goal` or the ledger clock has reached `time_goal`, see
//! [`CampaignConfig::is_complete`]. Only the one-shot `withdrawn` marker is
//! persisted, because it cannot be recomputed once the balance is drained.

use soroban_sdk::{contracttype, Address, String};

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub creator: Address,
    pub name: String,
    pub description: String,
    pub time_goal: u64,
    pub money_goal: i128,
}

impl CampaignConfig {
    /// `now >= time_goal` counts as reached; ledger timestamps are only
    /// trustworthy to within a few seconds.
    pub fn is_complete(&self, balance: i128, now: u64) -> bool {
        balance >= self.money_goal || now >= self.time_goal
    }
}

/// Mutable campaign state.
///
/// Kept small so that frequent writes (contributions) are cheap.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CampaignState {
    /// Funds currently held in custody for this campaign.
    pub balance: i128,
    /// Set by the administrator; blocks contributions only.
    pub locked: bool,
    /// Set once the creator has drained the campaign.
    pub withdrawn: bool,
}

/// Full on-chain representation of a campaign.
///
/// Used as the public API return type; reconstructed internally from
/// the split `CampaignConfig` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Sequential identifier, starting at 0.
    pub id: u64,
    /// Address that created the campaign; the only party allowed to withdraw.
    pub creator: Address,
    pub name: String,
    pub description: String,
    /// Ledger timestamp from which the campaign may be withdrawn regardless of funds.
    pub time_goal: u64,
    /// Amount at which the campaign may be withdrawn before `time_goal`.
    pub money_goal: i128,
    /// Current funded amount.
    pub balance: i128,
    /// Always `true` for a campaign returned by the contract.
    pub registered: bool,
    pub locked: bool,
    pub withdrawn: bool,
}

impl Campaign {
    pub fn from_parts(config: CampaignConfig, state: CampaignState) -> Self {
        Campaign {
            id: config.id,
            creator: config.creator,
            name: config.name,
            description: config.description,
            time_goal: config.time_goal,
            money_goal: config.money_goal,
            balance: state.balance,
            registered: true,
            locked: state.locked,
            withdrawn: state.withdrawn,
        }
    }
}
