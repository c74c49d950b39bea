use near_sdk::env::STORAGE_PRICE_PER_BYTE;
use near_sdk::{env, near_bindgen, AccountId, Balance, Promise};

use mt::TokenId;

use crate::events::{emit_minted, emit_nft_mint, Minted};
use crate::{Contract, ContractExt, MigrationError};

#[near_bindgen]
impl Contract {
    /// Mints a new token for `receiver_id`. Available only after all swap tokens are
    /// reserved, so public tokens always follow the reserved ones.
    /// Requires attaching at least `mint_fee`. The fee is sent to the fee receiver.
    /// The storage of the new token is paid from the deposit above the fee, and the rest
    /// is refunded to the caller. When nothing above the fee is attached, the contract
    /// covers the storage.
    #[payable]
    #[handle_result]
    pub fn nft_mint(&mut self, receiver_id: AccountId) -> Result<TokenId, MigrationError> {
        self.assert_ready()?;
        let deposit = env::attached_deposit();
        let fee = self.config.mint_fee.0;
        if deposit < fee {
            return Err(MigrationError::InsufficientPayment(fee));
        }

        let minter = env::predecessor_account_id();
        let storage_start = env::storage_usage();
        let token_id = self.internal_mint(&receiver_id);
        let storage_cost =
            Balance::from(env::storage_usage() - storage_start) * STORAGE_PRICE_PER_BYTE;
        let token_uri = self.format_token_uri(token_id);

        if fee > 0 {
            Promise::new(self.config.fee_receiver.clone()).transfer(fee);
        }
        let refund = (deposit - fee).saturating_sub(storage_cost);
        if refund > 0 {
            Promise::new(minter.clone()).transfer(refund);
        }

        emit_nft_mint(&receiver_id, &[token_id], None);
        emit_minted(Minted {
            token_id,
            receiver_id: &receiver_id,
            token_uri: &token_uri,
            minter: &minter,
        });
        Ok(token_id)
    }
}
