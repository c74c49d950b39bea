use near_contract_standards::non_fungible_token::metadata::{
    NFTContractMetadata, NFT_METADATA_SPEC,
};
use near_sdk::mock::VmAction;
use near_sdk::test_utils::{self, VMContextBuilder};
use near_sdk::{testing_env, AccountId, Balance, Gas, VMContext};

use mt::LegacyTokenId;

use crate::{Contract, InitConfig, MILI_NEAR};

pub const MAX_GAS: Gas = Gas(300_000_000_000_000);
pub const MINT_FEE: Balance = 100 * MILI_NEAR;
pub const BASE_URI: &str = "ipfs://QmUaG9DJMQprYoSWXp3X1V1YMS5E37pjt4MkQGpQtgZkeK";
/// block timestamp used in tests, in nanoseconds
pub const START: u64 = 1_690_000_000_000_000_000;

pub fn acc(name: &str) -> AccountId {
    AccountId::new_unchecked(name.to_string())
}

pub fn admin() -> AccountId {
    acc("admin.near")
}

pub fn alice() -> AccountId {
    acc("alice.near")
}

pub fn bob() -> AccountId {
    acc("bob.near")
}

pub fn frank() -> AccountId {
    acc("frank.near")
}

pub fn fee_receiver() -> AccountId {
    acc("treasury.near")
}

pub fn legacy() -> AccountId {
    acc("stickers.near")
}

pub fn migration() -> AccountId {
    acc("phantz.near")
}

/// `n` distinct legacy token ids, shaped like the 256 bit ids of the legacy collection.
pub fn legacy_ids(n: usize) -> Vec<LegacyTokenId> {
    (1..=n)
        .map(|i| format!("4652821077895066621523699106946478265313714863786076616070880475736242{:05}", i))
        .collect()
}

pub fn metadata() -> NFTContractMetadata {
    NFTContractMetadata {
        spec: NFT_METADATA_SPEC.to_string(),
        name: "Phantz".to_string(),
        symbol: "PHANTZ".to_string(),
        icon: None,
        base_uri: Some(BASE_URI.to_string()),
        reference: None,
        reference_hash: None,
    }
}

pub fn init_config(target: u64) -> InitConfig {
    InitConfig {
        auction: acc("auction.near"),
        marketplace: acc("marketplace.near"),
        bundle_marketplace: acc("bundle-marketplace.near"),
        platform_fee_bps: 250,
        fee_receiver: fee_receiver(),
        legacy_collection: legacy(),
        swap_reservation_target: target,
        mint_fee: None,
    }
}

/// Initializes the contract with `target` swap tokens and sets `predecessor` as the caller.
pub fn setup(predecessor: &AccountId, target: u64) -> (VMContext, Contract) {
    let mut ctx = VMContextBuilder::new()
        .current_account_id(migration())
        .predecessor_account_id(admin())
        .signer_account_id(admin())
        .block_timestamp(START)
        .prepaid_gas(MAX_GAS)
        .is_view(false)
        .build();
    testing_env!(ctx.clone());
    let ctr = Contract::new(vec![admin()], metadata(), init_config(target));
    ctx.predecessor_account_id = predecessor.clone();
    ctx.signer_account_id = predecessor.clone();
    testing_env!(ctx.clone());
    (ctx, ctr)
}

/// Same as `setup`, but with all `target` swap tokens reserved (in two chunks).
pub fn setup_ready(predecessor: &AccountId, target: u64) -> (VMContext, Contract) {
    let (mut ctx, mut ctr) = setup(&admin(), target);
    let ids = legacy_ids(target as usize);
    let half = ids.len() / 2;
    ctr.reserve_batch(ids[..half].to_vec()).unwrap();
    ctr.reserve_batch(ids[half..].to_vec()).unwrap();
    assert!(ctr.ready_to_mint());
    ctx.predecessor_account_id = predecessor.clone();
    ctx.signer_account_id = predecessor.clone();
    testing_env!(ctx.clone());
    (ctx, ctr)
}

/// NEAR transfers scheduled by the current call, as (receiver, amount).
pub fn transfers() -> Vec<(AccountId, Balance)> {
    test_utils::get_created_receipts()
        .into_iter()
        .flat_map(|r| {
            let receiver = r.receiver_id;
            r.actions.into_iter().filter_map(move |a| match a {
                VmAction::Transfer { deposit } => Some((receiver.clone(), deposit)),
                _ => None,
            })
        })
        .collect()
}
