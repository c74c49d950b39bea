use near_sdk::json_types::U64;
use near_sdk::{assert_one_yocto, env, near_bindgen, require, AccountId};

use mt::TokenId;

use crate::events::emit_nft_transfer;
use crate::ledger::custody_account;
use crate::{Contract, ContractExt, Token};

// NFT compatibility: queries and owner initiated transfers.
#[near_bindgen]
impl Contract {
    /**********
     * QUERIES
     **********/

    /// returns information about specific token ID
    pub fn nft_token(&self, token_id: TokenId) -> Option<Token> {
        self.owner_of(token_id).map(|owner_id| Token {
            token_id,
            owner_id,
            token_uri: self.format_token_uri(token_id),
        })
    }

    /// Returns total amount of tokens minted by this contract, including tokens reserved
    /// for swap and not claimed yet.
    pub fn nft_total_supply(&self) -> U64 {
        U64(self.next_token_id - 1)
    }

    /// Number of tokens owned by `account_id`.
    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U64 {
        U64(self.supply_by_owner.get(&account_id).unwrap_or(0))
    }

    /************
     * FUNCTIONS
     ************/

    /// Transfers a token owned by the caller to `receiver_id`.
    /// Requires attaching exactly 1 yoctoNEAR.
    #[payable]
    pub fn nft_transfer(&mut self, receiver_id: AccountId, token_id: TokenId, memo: Option<String>) {
        assert_one_yocto();
        let sender = env::predecessor_account_id();
        let owner = self.owner_of(token_id).unwrap_or_else(|| env::panic_str("token not found"));
        require!(owner == sender, "sender must be the token owner");
        require!(owner != receiver_id, "receiver must be different from the owner");
        require!(
            receiver_id != custody_account(),
            "can't transfer a token to the migration contract"
        );

        self.internal_transfer(&sender, &receiver_id, token_id);
        emit_nft_transfer(&sender, &receiver_id, token_id, memo.as_deref());
    }
}
