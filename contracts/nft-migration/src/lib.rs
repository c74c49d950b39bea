use near_contract_standards::non_fungible_token::metadata::{
    NFTContractMetadata, NonFungibleTokenMetadataProvider,
};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LazyOption, LookupMap, LookupSet, UnorderedMap, UnorderedSet};
use near_sdk::json_types::{U128, U64};
use near_sdk::{env, near_bindgen, require, AccountId, PanicOnDefault};

use mt::{LegacyTokenId, TokenId};

pub use crate::consts::*;
pub use crate::errors::*;
pub use crate::storage::*;

mod consts;
mod errors;
mod events;
mod ledger;
mod nft;
mod public_mint;
mod reservation;
mod storage;
mod swap;
#[cfg(test)]
mod tests;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    /// Accounts authorized to reserve tokens for swap.
    pub admins: UnorderedSet<AccountId>,
    pub config: Config,
    pub metadata: LazyOption<NFTContractMetadata>,

    /// number of tokens reserved for swap so far
    pub total_reserved: u64,
    /// legacy token -> reserved token, in reservation order
    pub reserved: UnorderedMap<LegacyTokenId, TokenId>,
    /// legacy tokens already swapped. Never shrinks.
    pub swapped: LookupSet<LegacyTokenId>,
    /// legacy tokens with a swap in flight (waiting for the legacy collection)
    pub pending_swaps: LookupSet<LegacyTokenId>,

    pub(crate) owners: LookupMap<TokenId, AccountId>,
    pub(crate) supply_by_owner: LookupMap<AccountId, u64>,
    pub next_token_id: TokenId,
}

// Implement the contract structure
#[near_bindgen]
impl Contract {
    /// @admins: initial set of accounts allowed to reserve tokens for swap.
    /// @metadata: NFT contract metadata. `base_uri` is required: token URIs are
    ///   `{base_uri}/{token_id}.json`.
    /// @config: deployment configuration, immutable after init.
    #[init]
    pub fn new(admins: Vec<AccountId>, metadata: NFTContractMetadata, config: InitConfig) -> Self {
        require!(!admins.is_empty(), "admins must be a non empty list");
        metadata.assert_valid();
        require!(
            metadata
                .base_uri
                .as_ref()
                .map_or(false, |uri| !uri.is_empty()),
            "metadata.base_uri is required"
        );
        let mut admin_set = UnorderedSet::new(StorageKey::Admins);
        for a in admins {
            admin_set.insert(&a);
        }
        Self {
            admins: admin_set,
            config: config.into(),
            metadata: LazyOption::new(StorageKey::ContractMetadata, Some(&metadata)),
            total_reserved: 0,
            reserved: UnorderedMap::new(StorageKey::Reserved),
            swapped: LookupSet::new(StorageKey::Swapped),
            pending_swaps: LookupSet::new(StorageKey::PendingSwaps),
            owners: LookupMap::new(StorageKey::Owners),
            supply_by_owner: LookupMap::new(StorageKey::SupplyByOwner),
            next_token_id: 1,
        }
    }

    /**********
     * QUERIES
     **********/

    /// Returns true once all swap tokens are reserved. Public mint and swap are only
    /// possible in this state. Once true, it never becomes false.
    pub fn ready_to_mint(&self) -> bool {
        self.total_reserved == self.config.swap_reservation_target
    }

    /// Metadata URI of a minted token: `{base_uri}/{token_id}.json`.
    #[handle_result]
    pub fn token_uri(&self, token_id: TokenId) -> Result<String, MigrationError> {
        if !self.owners.contains_key(&token_id) {
            return Err(MigrationError::UnknownIdentifier(token_id));
        }
        Ok(self.format_token_uri(token_id))
    }

    pub fn total_reserved(&self) -> u64 {
        self.total_reserved
    }

    pub fn swap_reservation_target(&self) -> u64 {
        self.config.swap_reservation_target
    }

    pub fn mint_fee(&self) -> U128 {
        self.config.mint_fee
    }

    pub fn config(&self) -> Config {
        self.config.clone()
    }

    /// Token reserved for the given legacy token, if any.
    pub fn reserved_token(&self, legacy_token_id: LegacyTokenId) -> Option<TokenId> {
        self.reserved.get(&legacy_token_id)
    }

    pub fn is_swapped(&self, legacy_token_id: LegacyTokenId) -> bool {
        self.swapped.contains(&legacy_token_id)
    }

    /// Returns true while a swap of the legacy token waits for the legacy collection.
    pub fn is_pending_swap(&self, legacy_token_id: LegacyTokenId) -> bool {
        self.pending_swaps.contains(&legacy_token_id)
    }

    /// Paginated view of the reserved pool, in reservation order.
    /// Returns list of pairs: (legacy token, reserved token).
    pub fn reserved_tokens(
        &self,
        from_index: Option<U64>,
        limit: Option<u32>,
    ) -> Vec<(LegacyTokenId, TokenId)> {
        let from = from_index.map_or(0, |i| i.0);
        let limit = limit.unwrap_or(100) as usize;
        let keys = self.reserved.keys_as_vector();
        let values = self.reserved.values_as_vector();
        (from..keys.len())
            .take(limit)
            .filter_map(|i| Some((keys.get(i)?, values.get(i)?)))
            .collect()
    }

    /// returns true if given account is an admin.
    pub fn is_admin(&self, account: AccountId) -> bool {
        self.admins.contains(&account)
    }

    /**********
     * ADMIN
     **********/

    #[handle_result]
    pub fn add_admins(&mut self, admins: Vec<AccountId>) -> Result<(), MigrationError> {
        self.assert_admin(&env::predecessor_account_id())?;
        for a in admins {
            self.admins.insert(&a);
        }
        Ok(())
    }

    /// Any admin can remove any other admin, but the admin set can't become empty.
    #[handle_result]
    pub fn remove_admins(&mut self, admins: Vec<AccountId>) -> Result<(), MigrationError> {
        self.assert_admin(&env::predecessor_account_id())?;
        for a in admins {
            self.admins.remove(&a);
        }
        require!(!self.admins.is_empty(), "can't remove all admins");
        Ok(())
    }

    /**********
     * INTERNAL
     **********/

    pub(crate) fn assert_admin(&self, caller: &AccountId) -> Result<(), MigrationError> {
        if !self.admins.contains(caller) {
            return Err(MigrationError::Unauthorized);
        }
        Ok(())
    }

    pub(crate) fn assert_ready(&self) -> Result<(), MigrationError> {
        if !self.ready_to_mint() {
            return Err(MigrationError::ReservationIncomplete);
        }
        Ok(())
    }
}

#[near_bindgen]
impl NonFungibleTokenMetadataProvider for Contract {
    fn nft_metadata(&self) -> NFTContractMetadata {
        self.metadata.get().unwrap()
    }
}
