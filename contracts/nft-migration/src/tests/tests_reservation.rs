use assert_matches::assert_matches;
use near_sdk::json_types::U64;
use near_sdk::{test_utils, testing_env};
use pretty_assertions::assert_eq;

use crate::tests::utils::*;
use crate::MigrationError;

#[test]
fn reserve_in_two_chunks() {
    let (_, mut ctr) = setup(&admin(), 10);
    let ids = legacy_ids(10);
    assert!(!ctr.ready_to_mint());

    assert_eq!(ctr.reserve_batch(ids[..5].to_vec()), Ok(5));
    assert!(!ctr.ready_to_mint(), "not ready after the first chunk");
    assert_eq!(ctr.total_reserved(), 5);

    assert_eq!(ctr.reserve_batch(ids[5..].to_vec()), Ok(10));
    assert!(ctr.ready_to_mint(), "ready after the second chunk");

    // reserved tokens are assigned in order, starting from 1
    for (i, legacy) in ids.iter().enumerate() {
        assert_eq!(ctr.reserved_token(legacy.clone()), Some(i as u64 + 1));
        assert_eq!(ctr.nft_token(i as u64 + 1).unwrap().owner_id, migration());
    }
    assert_eq!(ctr.nft_total_supply(), U64(10));
    assert_eq!(ctr.nft_supply_for_owner(migration()), U64(10));
    assert_eq!(ctr.next_token_id, 11);

    let logs = test_utils::get_logs();
    assert_eq!(
        logs[logs.len() - 2],
        r#"EVENT_JSON:{"standard":"nft-migration","version":"1.0.0","event":"reserve","data":{"count":5,"first_token_id":6,"last_token_id":10,"total_reserved":10}}"#
    );
    assert_eq!(logs[logs.len() - 1], "all swap tokens reserved: ready to mint");
}

#[test]
fn reserve_full_chunk() {
    let (ctx, mut ctr) = setup(&admin(), 190);
    let ids = legacy_ids(190);

    assert_eq!(ctr.reserve_batch(ids[..100].to_vec()), Ok(100));
    assert_eq!(ctr.nft_supply_for_owner(migration()), U64(100));
    assert_eq!(ctr.reserved_token(ids[99].clone()), Some(100));
    assert_eq!(ctr.next_token_id, 101);

    // next transaction
    testing_env!(ctx);
    assert_eq!(ctr.reserve_batch(ids[100..].to_vec()), Ok(190));
    assert!(ctr.ready_to_mint());
    assert_eq!(ctr.nft_supply_for_owner(migration()), U64(190));
    assert_eq!(ctr.nft_total_supply(), U64(190));
    assert_eq!(ctr.reserved_token(ids[189].clone()), Some(190));
    assert_eq!(ctr.nft_token(190).unwrap().owner_id, migration());
}

#[test]
fn reserve_not_admin() {
    let (_, mut ctr) = setup(&alice(), 10);
    assert_eq!(
        ctr.reserve_batch(legacy_ids(2)),
        Err(MigrationError::Unauthorized)
    );
    assert_eq!(ctr.total_reserved(), 0);
    assert_eq!(ctr.next_token_id, 1);
}

#[test]
fn reserve_capacity() {
    let (_, mut ctr) = setup(&admin(), 4);
    let ids = legacy_ids(5);
    assert_eq!(
        ctr.reserve_batch(ids.clone()),
        Err(MigrationError::CapacityExceeded {
            reserved: 0,
            requested: 5,
            target: 4
        })
    );
    assert_eq!(ctr.total_reserved(), 0);

    assert_eq!(ctr.reserve_batch(ids[..3].to_vec()), Ok(3));
    // the failing call must not change the state
    assert_matches!(
        ctr.reserve_batch(ids[3..].to_vec()),
        Err(MigrationError::CapacityExceeded { reserved: 3, .. })
    );
    assert_eq!(ctr.total_reserved(), 3);
    assert_eq!(ctr.reserved_token(ids[3].clone()), None);
    assert!(!ctr.ready_to_mint());

    assert_eq!(ctr.reserve_batch(ids[3..4].to_vec()), Ok(4));
    assert!(ctr.ready_to_mint());
    // once ready, nothing more can be reserved
    assert_matches!(
        ctr.reserve_batch(ids[4..].to_vec()),
        Err(MigrationError::CapacityExceeded { .. })
    );
    assert!(ctr.ready_to_mint());
}

#[test]
fn reserve_duplicates() {
    let (_, mut ctr) = setup(&admin(), 10);
    let ids = legacy_ids(4);

    // duplicate within the same batch
    let batch = vec![ids[0].clone(), ids[1].clone(), ids[0].clone()];
    assert_eq!(
        ctr.reserve_batch(batch),
        Err(MigrationError::AlreadyReserved(ids[0].clone()))
    );
    assert_eq!(ctr.total_reserved(), 0);
    assert_eq!(ctr.reserved_token(ids[1].clone()), None);

    // duplicate across batches
    assert_eq!(ctr.reserve_batch(ids[..2].to_vec()), Ok(2));
    assert_eq!(
        ctr.reserve_batch(vec![ids[2].clone(), ids[1].clone()]),
        Err(MigrationError::AlreadyReserved(ids[1].clone()))
    );
    assert_eq!(ctr.total_reserved(), 2);
    assert_eq!(ctr.reserved_token(ids[2].clone()), None);
    assert_eq!(ctr.next_token_id, 3);
}

#[test]
fn reserve_empty_batch() {
    let (_, mut ctr) = setup(&admin(), 3);
    assert_eq!(ctr.reserve_batch(vec![]), Ok(0));
    assert_eq!(ctr.next_token_id, 1);
    assert!(test_utils::get_logs().is_empty());
}

#[test]
fn zero_target_is_ready() {
    let (_, ctr) = setup(&admin(), 0);
    assert!(ctr.ready_to_mint());
}

#[test]
fn reserved_tokens_pagination() {
    let (_, mut ctr) = setup(&admin(), 6);
    let ids = legacy_ids(6);
    ctr.reserve_batch(ids.clone()).unwrap();

    let all = ctr.reserved_tokens(None, None);
    assert_eq!(all.len(), 6);
    assert_eq!(all[0], (ids[0].clone(), 1));

    let page = ctr.reserved_tokens(Some(U64(4)), Some(5));
    assert_eq!(page, vec![(ids[4].clone(), 5), (ids[5].clone(), 6)]);
    assert!(ctr.reserved_tokens(Some(U64(6)), None).is_empty());
}

#[test]
fn admins() {
    let (mut ctx, mut ctr) = setup(&admin(), 10);
    assert!(ctr.is_admin(admin()));
    assert!(!ctr.is_admin(bob()));

    ctr.add_admins(vec![bob()]).unwrap();
    assert!(ctr.is_admin(bob()));

    // bob can reserve now
    ctx.predecessor_account_id = bob();
    testing_env!(ctx.clone());
    assert_eq!(ctr.reserve_batch(legacy_ids(1)), Ok(1));

    ctr.remove_admins(vec![admin()]).unwrap();
    assert!(!ctr.is_admin(admin()));

    ctx.predecessor_account_id = admin();
    testing_env!(ctx);
    assert_eq!(ctr.add_admins(vec![alice()]), Err(MigrationError::Unauthorized));
}

#[test]
#[should_panic(expected = "can't remove all admins")]
fn remove_last_admin() {
    let (_, mut ctr) = setup(&admin(), 10);
    let _ = ctr.remove_admins(vec![admin()]);
}
