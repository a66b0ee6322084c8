extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, Symbol, TryIntoVal, Val, Vec,
};

use crate::events::{
    AdminTransferred, CampaignCreated, CampaignLocked, CampaignUnlocked, ContributionReceived,
    FundsWithdrawn,
};
use crate::test::{units, Fixture, DAY};

/// Last event published by `contract`, as `(topics, data)`.
fn last_event_from(env: &Env, contract: &Address) -> (Vec<Val>, Val) {
    let events = env.events().all();
    let mut found = None;
    for (address, event_topics, data) in events.iter() {
        if address == *contract {
            found = Some((event_topics, data));
        }
    }
    found.expect("No events found")
}

fn topics(env: &Env, kind: Symbol, campaign_id: u64) -> Vec<Val> {
    vec![env, kind.into_val(env), campaign_id.into_val(env)]
}

#[test]
fn test_campaign_created_event() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let deadline = f.now() + DAY;

    let id = f.ledger.create_campaign(
        &bob,
        &f.text("title"),
        &f.text("description"),
        &deadline,
        &1,
    );

    let (event_topics, data) = last_event_from(&f.env, &f.ledger.address);
    assert_eq!(event_topics, topics(&f.env, symbol_short!("created"), id));

    let event_data: CampaignCreated = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: id,
            creator: bob,
            name: f.text("title"),
            description: f.text("description"),
            time_goal: deadline,
            money_goal: 1,
        }
    );
}

#[test]
fn test_contribution_events_carry_id_and_amount() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let alice = Address::generate(&f.env);
    let mike = Address::generate(&f.env);
    let id = f.create(&bob, 1, units(100));

    for (contributor, amount) in [(&alice, 1i128), (&mike, 3i128)] {
        f.contribute(id, contributor, amount);

        let (event_topics, data) = last_event_from(&f.env, &f.ledger.address);
        assert_eq!(event_topics, topics(&f.env, symbol_short!("contrib"), id));
        let event_data: ContributionReceived = data.try_into_val(&f.env).unwrap();
        assert_eq!(
            event_data,
            ContributionReceived {
                campaign_id: id,
                amount,
            }
        );
    }

    assert_eq!(f.ledger.campaign_balance(&id), 4);
}

#[test]
fn test_funds_withdrawn_event() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let alice = Address::generate(&f.env);
    let id = f.create(&bob, 10, units(1000));

    f.contribute(id, &alice, units(1000));
    f.ledger.withdraw(&id, &bob);

    let (event_topics, data) = last_event_from(&f.env, &f.ledger.address);
    assert_eq!(event_topics, topics(&f.env, symbol_short!("withdrawn"), id));
    let event_data: FundsWithdrawn = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            campaign_id: id,
            amount: units(1000),
        }
    );
}

#[test]
fn test_zero_withdrawal_event() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let id = f.create(&bob, 1, 2_000);

    f.set_time(f.now() + 2 * DAY);
    assert_eq!(f.ledger.withdraw(&id, &bob), 0);

    let (event_topics, data) = last_event_from(&f.env, &f.ledger.address);
    assert_eq!(event_topics, topics(&f.env, symbol_short!("withdrawn"), id));
    let event_data: FundsWithdrawn = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            campaign_id: id,
            amount: 0,
        }
    );
}

#[test]
fn test_relock_emits_locked_again() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let id = f.create(&bob, 1, 2_000);

    for _ in 0..2 {
        f.ledger.lock_campaign(&f.admin, &id);
        let (event_topics, data) = last_event_from(&f.env, &f.ledger.address);
        assert_eq!(event_topics, topics(&f.env, symbol_short!("locked"), id));
        let locked: CampaignLocked = data.try_into_val(&f.env).unwrap();
        assert_eq!(locked, CampaignLocked { campaign_id: id });
    }
}

#[test]
fn test_lock_and_unlock_events() {
    let f = Fixture::new();
    let bob = Address::generate(&f.env);
    let id = f.create(&bob, 1, 2_000);

    f.ledger.lock_campaign(&f.admin, &id);
    let (event_topics, data) = last_event_from(&f.env, &f.ledger.address);
    assert_eq!(event_topics, topics(&f.env, symbol_short!("locked"), id));
    let locked: CampaignLocked = data.try_into_val(&f.env).unwrap();
    assert_eq!(locked, CampaignLocked { campaign_id: id });

    f.ledger.unlock_campaign(&f.admin, &id);
    let (event_topics, data) = last_event_from(&f.env, &f.ledger.address);
    assert_eq!(event_topics, topics(&f.env, symbol_short!("unlocked"), id));
    let unlocked: CampaignUnlocked = data.try_into_val(&f.env).unwrap();
    assert_eq!(unlocked, CampaignUnlocked { campaign_id: id });
}

#[test]
fn test_admin_transferred_event() {
    let f = Fixture::new();
    let next = Address::generate(&f.env);

    f.ledger.transfer_admin(&f.admin, &next);

    let (event_topics, data) = last_event_from(&f.env, &f.ledger.address);
    assert_eq!(
        event_topics,
        vec![&f.env, symbol_short!("admin").into_val(&f.env)]
    );
    let event_data: AdminTransferred = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        AdminTransferred {
            previous: f.admin.clone(),
            current: next,
        }
    );
}
