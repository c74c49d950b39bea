use std::collections::HashSet;

use near_sdk::{env, near_bindgen};

use mt::LegacyTokenId;

use crate::events::{emit_nft_mint, emit_reserve, Reserve};
use crate::ledger::custody_account;
use crate::{Contract, ContractExt, MigrationError};

#[near_bindgen]
impl Contract {
    /// Reserves one new token for each of the given legacy tokens. Reserved tokens are
    /// held by the contract until the legacy token owner swaps them.
    /// Expected to be called in chunks (eg 100 tokens per call) until
    /// `total_reserved == swap_reservation_target`.
    /// Must be called by an admin.
    /// Returns the total number of reserved tokens.
    #[handle_result]
    pub fn reserve_batch(
        &mut self,
        legacy_token_ids: Vec<LegacyTokenId>,
    ) -> Result<u64, MigrationError> {
        self.assert_admin(&env::predecessor_account_id())?;
        self.check_reservation(&legacy_token_ids)?;
        if legacy_token_ids.is_empty() {
            return Ok(self.total_reserved);
        }

        let custody = custody_account();
        let tokens = self.internal_mint_batch(&custody, legacy_token_ids.len() as u64);
        for (legacy, token_id) in legacy_token_ids.iter().zip(&tokens) {
            self.reserved.insert(legacy, token_id);
        }
        self.total_reserved += tokens.len() as u64;

        emit_nft_mint(&custody, &tokens, None);
        emit_reserve(Reserve {
            count: tokens.len() as u64,
            first_token_id: tokens[0],
            last_token_id: tokens[tokens.len() - 1],
            total_reserved: self.total_reserved,
        });
        if self.ready_to_mint() {
            env::log_str("all swap tokens reserved: ready to mint");
        }
        Ok(self.total_reserved)
    }

    /// Validates the whole batch before any token is reserved.
    fn check_reservation(&self, legacy_token_ids: &[LegacyTokenId]) -> Result<(), MigrationError> {
        let requested = legacy_token_ids.len() as u64;
        if self.total_reserved + requested > self.config.swap_reservation_target {
            return Err(MigrationError::CapacityExceeded {
                reserved: self.total_reserved,
                requested,
                target: self.config.swap_reservation_target,
            });
        }
        let mut seen = HashSet::with_capacity(legacy_token_ids.len());
        for legacy in legacy_token_ids {
            if !seen.insert(legacy) || self.reserved.get(legacy).is_some() {
                return Err(MigrationError::AlreadyReserved(legacy.clone()));
            }
        }
        Ok(())
    }
}
