extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::reward;
use crate::test::{Fixture, BASE_URI};
use crate::Error;

#[test]
fn test_first_contribution_mints_badge() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let alice = Address::generate(&f.env);
    let mike = Address::generate(&f.env);
    let id = f.create(&bob, 1, 2_000);

    assert_eq!(f.badges.balance_of(&alice), 0);
    f.contribute(id, &alice, 1);
    assert_eq!(f.badges.balance_of(&alice), 1);
    assert!(f.ledger.is_rewarded(&id, &alice));

    assert_eq!(f.badges.balance_of(&mike), 0);
    f.contribute(id, &mike, 3);
    assert_eq!(f.badges.balance_of(&mike), 1);

    assert_eq!(f.badges.owner_of(&0), alice);
    assert_eq!(f.badges.owner_of(&1), mike);
    assert!(!f.ledger.is_rewarded(&id, &bob));
}

#[test]
fn test_reward_yields_badge_id_only_once() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let alice = Address::generate(&f.env);
    let mike = Address::generate(&f.env);
    let id = f.create(&bob, 1, 2_000);

    f.env.as_contract(&f.ledger.address, || {
        assert_eq!(
            reward::reward_first_contribution(&f.env, id, &alice),
            Ok(Some(0))
        );
        assert_eq!(
            reward::reward_first_contribution(&f.env, id, &mike),
            Ok(Some(1))
        );
        assert_eq!(reward::reward_first_contribution(&f.env, id, &alice), Ok(None));
    });

    assert_eq!(f.badges.badge_of(&id, &alice), Some(0));
    assert_eq!(f.badges.badge_of(&id, &mike), Some(1));
    assert_eq!(f.badges.total_minted(), 2);
}

#[test]
fn test_badge_descriptors_increment() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let alice = Address::generate(&f.env);
    let id = f.create(&bob, 1, 2_000);

    f.contribute(id, &alice, 1);
    assert_eq!(
        f.badges.descriptor_of(&0),
        f.text("https://example.com/nft/0")
    );

    // The creator may contribute to their own campaign too.
    f.contribute(id, &bob, 1);
    assert_eq!(
        f.badges.descriptor_of(&1),
        f.text("https://example.com/nft/1")
    );
    assert_eq!(f.badges.base_uri(), f.text(BASE_URI));
}

#[test]
fn test_repeat_contributor_gets_one_badge() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let alice = Address::generate(&f.env);
    let id = f.create(&bob, 1, 2_000);

    f.contribute(id, &alice, 1);
    f.contribute(id, &alice, 1);

    assert_eq!(f.ledger.campaign_balance(&id), 2);
    assert_eq!(f.badges.balance_of(&alice), 1);
    assert_eq!(f.badges.total_minted(), 1);
}

#[test]
fn test_one_badge_per_campaign() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let alice = Address::generate(&f.env);
    let first = f.create(&bob, 1, 2_000);
    let second = f.create(&bob, 2, 2_000);

    f.contribute(first, &alice, 5);
    f.contribute(second, &alice, 5);
    f.contribute(second, &alice, 5);

    assert_eq!(f.badges.balance_of(&alice), 2);
    assert_eq!(f.badges.badge_of(&first, &alice), Some(0));
    assert_eq!(f.badges.badge_of(&second, &alice), Some(1));
    assert!(f.ledger.is_rewarded(&first, &alice));
    assert!(f.ledger.is_rewarded(&second, &alice));
}

#[test]
fn test_rejected_contribution_mints_nothing() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let alice = Address::generate(&f.env);
    let id = f.create(&bob, 1, 2_000);
    f.token_sac.mint(&alice, &10);

    assert_eq!(
        f.ledger.try_contribute(&id, &alice, &0),
        Err(Ok(Error::InsufficientAmount))
    );
    assert_eq!(
        f.ledger.try_contribute(&99, &alice, &10),
        Err(Ok(Error::NonExistentCampaign))
    );

    f.ledger.lock_campaign(&f.admin, &id);
    assert_eq!(
        f.ledger.try_contribute(&id, &alice, &10),
        Err(Ok(Error::CampaignLocked))
    );

    assert_eq!(f.badges.balance_of(&alice), 0);
    assert_eq!(f.badges.total_minted(), 0);
    assert!(!f.ledger.is_rewarded(&id, &alice));
}

#[test]
fn test_only_ledger_can_mint() {
    let f = Fixture::new();
    let alice = Address::generate(&f.env);

    assert_eq!(f.badges.owner(), f.ledger.address);
    assert_eq!(
        f.badges.try_transfer_ownership(&f.admin, &alice),
        Err(Ok(badge_reward::Error::NotOwner))
    );

    // Without any authorization the issuer refuses a direct mint.
    f.env.set_auths(&[]);
    assert!(f.badges.try_mint(&0, &alice).is_err());
    assert_eq!(f.badges.total_minted(), 0);
}
