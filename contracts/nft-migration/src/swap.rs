use near_sdk::json_types::U128;
use near_sdk::{env, near_bindgen, AccountId, Gas, Promise, PromiseError, PromiseOrValue};

use mt::{ext_legacy, LegacyTokenId, TokenId};

use crate::consts::*;
use crate::events::{emit_nft_transfer, emit_swapped, Swapped};
use crate::ledger::custody_account;
use crate::{Contract, ContractExt, MigrationError};

#[near_bindgen]
impl Contract {
    /// Exchanges one unit of `legacy_token_id` held by the caller for the token reserved
    /// for it. The caller must approve this contract as an operator in the legacy
    /// collection first. The legacy unit is burned (transferred to the legacy collection
    /// itself) before the reserved token is released.
    /// Returns the released token id once the promise chain resolves.
    #[handle_result]
    pub fn swap(&mut self, legacy_token_id: LegacyTokenId) -> Result<Promise, MigrationError> {
        self.assert_ready()?;
        self.swappable_token(&legacy_token_id)?;
        if env::prepaid_gas() < SWAP_MIN_GAS {
            return Err(MigrationError::InsufficientGas(
                SWAP_MIN_GAS.0 / Gas::ONE_TERA.0,
            ));
        }

        let caller = env::predecessor_account_id();
        // lock the legacy token until the legacy collection responds
        self.pending_swaps.insert(&legacy_token_id);

        let legacy = self.config.legacy_collection.clone();
        Ok(ext_legacy::ext(legacy.clone())
            .with_static_gas(LEGACY_QUERY_GAS)
            .mt_is_approved_for_all(caller.clone(), env::current_account_id())
            .and(
                ext_legacy::ext(legacy)
                    .with_static_gas(LEGACY_QUERY_GAS)
                    .mt_balance_of(caller.clone(), legacy_token_id.clone()),
            )
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(SWAP_CHECKED_CALLBACK_GAS)
                    .on_swap_checked(caller, legacy_token_id),
            ))
    }

    /// Receives the approval and balance of the swap caller and burns the legacy unit.
    #[private]
    pub fn on_swap_checked(
        &mut self,
        caller: AccountId,
        legacy_token_id: LegacyTokenId,
        #[callback_result] approved: Result<bool, PromiseError>,
        #[callback_result] balance: Result<U128, PromiseError>,
    ) -> PromiseOrValue<TokenId> {
        let checked = match (approved, balance) {
            (Err(_), _) => Err(MigrationError::LegacyCall(
                "mt_is_approved_for_all".to_owned(),
            )),
            (_, Err(_)) => Err(MigrationError::LegacyCall("mt_balance_of".to_owned())),
            (Ok(false), _) => Err(MigrationError::NotApproved),
            (Ok(true), Ok(b)) if b.0 == 0 => Err(MigrationError::NothingToSwap),
            (Ok(true), Ok(_)) => Ok(()),
        };
        if let Err(e) = checked {
            return self.abort_swap(&legacy_token_id, e);
        }

        let legacy = self.config.legacy_collection.clone();
        ext_legacy::ext(legacy.clone())
            .with_static_gas(LEGACY_BURN_GAS)
            .mt_transfer_from(
                caller.clone(),
                legacy,
                legacy_token_id.clone(),
                U128(1),
                Some("swap".to_owned()),
            )
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(SWAP_BURNED_CALLBACK_GAS + FAILURE_CALLBACK_GAS)
                    .on_swap_burned(caller, legacy_token_id),
            )
            .into()
    }

    /// Releases the reserved token to the caller once the legacy unit is burned.
    #[private]
    pub fn on_swap_burned(
        &mut self,
        caller: AccountId,
        legacy_token_id: LegacyTokenId,
        #[callback_result] burn_result: Result<U128, PromiseError>,
    ) -> PromiseOrValue<TokenId> {
        if burn_result.is_err() {
            return self.abort_swap(&legacy_token_id, MigrationError::BurnFailed);
        }
        // the swap could have been resolved by an admin in the meantime
        if self.swapped.contains(&legacy_token_id) {
            return self.abort_swap(&legacy_token_id, MigrationError::NotSwappable);
        }
        self.pending_swaps.remove(&legacy_token_id);
        // the token was reserved in `swap` and a reservation is never removed
        match self.commit_swap(&caller, &legacy_token_id) {
            Some(token_id) => PromiseOrValue::Value(token_id),
            None => self.abort_swap(&legacy_token_id, MigrationError::NotSwappable),
        }
    }

    /// Resolves a swap stuck in the pending state, eg when the final callback failed
    /// after the legacy unit was burned.
    /// With `owner_id` set, the reserved token is released to `owner_id` and the legacy
    /// token is marked as swapped; the admin must verify the burn in the legacy
    /// collection first. Without `owner_id`, the lock is only released and the legacy
    /// token can be swapped again.
    /// Must be called by an admin. Returns the released token, if any.
    #[handle_result]
    pub fn resolve_pending_swap(
        &mut self,
        legacy_token_id: LegacyTokenId,
        owner_id: Option<AccountId>,
    ) -> Result<Option<TokenId>, MigrationError> {
        self.assert_admin(&env::predecessor_account_id())?;
        if !self.pending_swaps.remove(&legacy_token_id) {
            return Err(MigrationError::NoPendingSwap(legacy_token_id));
        }
        env::log_str(&format!(
            "pending swap of legacy token {} resolved by {}",
            legacy_token_id,
            env::predecessor_account_id()
        ));
        match owner_id {
            None => Ok(None),
            Some(owner) => self
                .commit_swap(&owner, &legacy_token_id)
                .map(Some)
                .ok_or(MigrationError::NotSwappable),
        }
    }

    #[private]
    pub fn on_failure(&mut self, error: String) {
        env::panic_str(&error)
    }

    /**********
     * INTERNAL
     **********/

    /// Marks `legacy_token_id` as swapped and moves its reserved token from custody to
    /// `owner`. Returns None if the legacy token has no reservation.
    fn commit_swap(
        &mut self,
        owner: &AccountId,
        legacy_token_id: &LegacyTokenId,
    ) -> Option<TokenId> {
        let token_id = self.reserved.get(legacy_token_id)?;
        let custody = custody_account();
        self.swapped.insert(legacy_token_id);
        self.internal_transfer(&custody, owner, token_id);

        emit_nft_transfer(&custody, owner, token_id, Some("swap"));
        emit_swapped(Swapped {
            owner_id: owner,
            legacy_token_id,
            token_id,
            timestamp: env::block_timestamp_ms(),
        });
        Some(token_id)
    }

    /// Returns the token reserved for `legacy_token_id` if it can be swapped now.
    fn swappable_token(&self, legacy_token_id: &LegacyTokenId) -> Result<TokenId, MigrationError> {
        if self.swapped.contains(legacy_token_id) || self.pending_swaps.contains(legacy_token_id)
        {
            return Err(MigrationError::NotSwappable);
        }
        self.reserved
            .get(legacy_token_id)
            .ok_or(MigrationError::NotSwappable)
    }

    /// Unlocks the legacy token and fails the transaction with the error reason.
    /// The callback itself must not panic, otherwise the unlock would be reverted.
    fn abort_swap(
        &mut self,
        legacy_token_id: &LegacyTokenId,
        err: MigrationError,
    ) -> PromiseOrValue<TokenId> {
        self.pending_swaps.remove(legacy_token_id);
        env::log_str(&format!(
            "swap of legacy token {} aborted: {}",
            legacy_token_id,
            err.reason()
        ));
        Self::ext(env::current_account_id())
            .with_static_gas(FAILURE_CALLBACK_GAS)
            .on_failure(err.reason())
            .into()
    }
}
