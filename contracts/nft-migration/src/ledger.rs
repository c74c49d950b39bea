use near_sdk::{env, AccountId};

use mt::TokenId;

use crate::Contract;

/// Account holding reserved tokens until they are swapped: the ledger itself.
#[inline]
pub(crate) fn custody_account() -> AccountId {
    env::current_account_id()
}

impl Contract {
    /// Allocates the next token id and assigns it to `owner`.
    pub(crate) fn internal_mint(&mut self, owner: &AccountId) -> TokenId {
        let token_id = self.assign_next_token(owner);
        self.inc_supply(owner, 1);
        token_id
    }

    /// Allocates `n` consecutive token ids to `owner`. The owner supply counter is
    /// updated once for the whole batch.
    pub(crate) fn internal_mint_batch(&mut self, owner: &AccountId, n: u64) -> Vec<TokenId> {
        let tokens: Vec<TokenId> = (0..n).map(|_| self.assign_next_token(owner)).collect();
        self.inc_supply(owner, n);
        tokens
    }

    /// The only place where token ids are created. Doesn't touch the supply counters.
    fn assign_next_token(&mut self, owner: &AccountId) -> TokenId {
        let token_id = self.next_token_id;
        self.next_token_id += 1;
        let prev = self.owners.insert(&token_id, owner);
        debug_assert!(prev.is_none(), "token {} minted twice", token_id);
        token_id
    }

    /// Moves `token` between owners. The caller must assure `from` is the current owner.
    pub(crate) fn internal_transfer(&mut self, from: &AccountId, to: &AccountId, token: TokenId) {
        self.owners.insert(&token, to);
        self.dec_supply(from);
        self.inc_supply(to, 1);
    }

    pub(crate) fn owner_of(&self, token: TokenId) -> Option<AccountId> {
        self.owners.get(&token)
    }

    pub(crate) fn format_token_uri(&self, token: TokenId) -> String {
        let base_uri = self
            .metadata
            .get()
            .and_then(|m| m.base_uri)
            .unwrap_or_default();
        format!("{}/{}.json", base_uri.trim_end_matches('/'), token)
    }

    fn inc_supply(&mut self, owner: &AccountId, n: u64) {
        let s = self.supply_by_owner.get(owner).unwrap_or(0);
        self.supply_by_owner.insert(owner, &(s + n));
    }

    fn dec_supply(&mut self, owner: &AccountId) {
        match self.supply_by_owner.get(owner).unwrap_or(0) {
            0 | 1 => {
                self.supply_by_owner.remove(owner);
            }
            s => {
                self.supply_by_owner.insert(owner, &(s - 1));
            }
        }
    }
}
