use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{require, AccountId, BorshStorageKey};

use mt::TokenId;

use crate::consts::{DEFAULT_MINT_FEE, MAX_PLATFORM_FEE_BPS};

/// Helper structure for keys of the persistent collections.
#[derive(BorshSerialize, BorshStorageKey)]
pub enum StorageKey {
    Admins,
    ContractMetadata,
    Reserved,
    Swapped,
    PendingSwaps,
    Owners,
    SupplyByOwner,
}

/// Deployment configuration, set once in `new`.
#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, Clone))]
pub struct InitConfig {
    pub auction: AccountId,
    pub marketplace: AccountId,
    pub bundle_marketplace: AccountId,
    /// platform fee for the marketplaces, in basis points
    pub platform_fee_bps: u16,
    pub fee_receiver: AccountId,
    /// legacy multi-token collection whose units are swapped
    pub legacy_collection: AccountId,
    /// number of legacy tokens eligible for swap
    pub swap_reservation_target: u64,
    /// public mint price in yoctoNEAR, defaults to `DEFAULT_MINT_FEE`
    pub mint_fee: Option<U128>,
}

/// Immutable ledger configuration.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone)]
#[serde(crate = "near_sdk::serde")]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq))]
pub struct Config {
    pub auction: AccountId,
    pub marketplace: AccountId,
    pub bundle_marketplace: AccountId,
    pub platform_fee_bps: u16,
    pub fee_receiver: AccountId,
    pub legacy_collection: AccountId,
    pub swap_reservation_target: u64,
    pub mint_fee: U128,
}

impl From<InitConfig> for Config {
    fn from(c: InitConfig) -> Self {
        require!(
            c.platform_fee_bps <= MAX_PLATFORM_FEE_BPS,
            format!("platform fee can't exceed {} bps", MAX_PLATFORM_FEE_BPS)
        );
        Self {
            auction: c.auction,
            marketplace: c.marketplace,
            bundle_marketplace: c.bundle_marketplace,
            platform_fee_bps: c.platform_fee_bps,
            fee_receiver: c.fee_receiver,
            legacy_collection: c.legacy_collection,
            swap_reservation_target: c.swap_reservation_target,
            mint_fee: c.mint_fee.unwrap_or(U128(DEFAULT_MINT_FEE)),
        }
    }
}

/// Token of the new collection.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq, Clone))]
pub struct Token {
    pub token_id: TokenId,
    pub owner_id: AccountId,
    pub token_uri: String,
}
