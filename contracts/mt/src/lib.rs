mod events;

use near_sdk::json_types::U128;
use near_sdk::{ext_contract, AccountId};

pub use crate::events::*;

/// Identifier of a unit class in the legacy multi-token collection.
/// Legacy ids are 256 bit numbers in their origin collection, so we keep them as
/// decimal strings rather than forcing them into a native integer.
pub type LegacyTokenId = String;

/// Identifier of a token in the new collection. Minimum valid `TokenId` is 1.
pub type TokenId = u64;

/// Minimal interface of the legacy semi-fungible collection consumed by the migration
/// ledger. Units transferred to the collection's own account are burned.
pub trait LegacyCollection {
    /**********
     * QUERIES
     **********/

    /// Returns how many units of `token_id` the `account_id` holds.
    fn mt_balance_of(&self, account_id: AccountId, token_id: LegacyTokenId) -> U128;

    /// Returns true if `operator_id` may move all units owned by `owner_id`.
    fn mt_is_approved_for_all(&self, owner_id: AccountId, operator_id: AccountId) -> bool;

    /*************
     * Transactions
     *************/

    /// Grants or revokes operator rights over all caller's units.
    fn mt_set_approval_for_all(&mut self, operator_id: AccountId, approved: bool);

    /// Moves `amount` units of `token_id` from `sender_id` to `receiver_id`.
    /// Must be called by the sender or an approved operator.
    /// Returns the remaining sender balance of `token_id`.
    fn mt_transfer_from(
        &mut self,
        sender_id: AccountId,
        receiver_id: AccountId,
        token_id: LegacyTokenId,
        amount: U128,
        memo: Option<String>,
    ) -> U128;
}

// ext_legacy is a helper to make cross contract calls to the legacy collection
#[ext_contract(ext_legacy)]
pub trait ExtLegacyCollection {
    fn mt_balance_of(&self, account_id: AccountId, token_id: LegacyTokenId) -> U128;
    fn mt_is_approved_for_all(&self, owner_id: AccountId, operator_id: AccountId) -> bool;
    fn mt_transfer_from(
        &mut self,
        sender_id: AccountId,
        receiver_id: AccountId,
        token_id: LegacyTokenId,
        amount: U128,
        memo: Option<String>,
    ) -> U128;
}
