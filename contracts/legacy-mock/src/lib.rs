use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, LookupSet};
use near_sdk::json_types::U128;
use near_sdk::serde::Serialize;
use near_sdk::{env, near_bindgen, require, AccountId, PanicOnDefault};

use mt::{EventPayload, LegacyCollection, LegacyTokenId, NearEvent};

/// Mock of the legacy semi-fungible collection used to test swaps.
/// Anyone can mint units to themselves. Units transferred to this contract are burned.
#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    /// (holder, token) -> units
    pub balances: LookupMap<(AccountId, LegacyTokenId), u128>,
    /// (owner, operator)
    pub approvals: LookupSet<(AccountId, AccountId)>,
    pub supply: LookupMap<LegacyTokenId, u128>,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct MtEventData<'a> {
    owner_id: &'a AccountId,
    token_ids: [&'a str; 1],
    amounts: [U128; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    memo: Option<&'a str>,
}

fn emit_mt_event(event: &'static str, data: MtEventData) {
    NearEvent {
        standard: "nep245",
        version: "1.0.0",
        event: EventPayload {
            event,
            data: [data],
        },
    }
    .emit();
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new() -> Self {
        Self {
            balances: LookupMap::new(b"b"),
            approvals: LookupSet::new(b"a"),
            supply: LookupMap::new(b"s"),
        }
    }

    /// Mints `amount` units of `token_id` to the caller.
    pub fn mt_mint(&mut self, token_id: LegacyTokenId, amount: U128) {
        require!(amount.0 > 0, "amount must be positive");
        let owner = env::predecessor_account_id();
        self.add_balance(&owner, &token_id, amount.0);
        let s = self.supply.get(&token_id).unwrap_or(0);
        self.supply.insert(&token_id, &(s + amount.0));
        emit_mt_event(
            "mt_mint",
            MtEventData {
                owner_id: &owner,
                token_ids: [token_id.as_str()],
                amounts: [amount],
                memo: None,
            },
        );
    }

    /// Transfers caller's units. Transfer to this contract burns them.
    pub fn mt_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: LegacyTokenId,
        amount: U128,
        memo: Option<String>,
    ) -> U128 {
        let sender = env::predecessor_account_id();
        U128(self.internal_transfer(&sender, &receiver_id, &token_id, amount.0, memo.as_deref()))
    }

    pub fn mt_supply(&self, token_id: LegacyTokenId) -> U128 {
        U128(self.supply.get(&token_id).unwrap_or(0))
    }

    /**********
     * INTERNAL
     **********/

    fn balance(&self, owner: &AccountId, token_id: &LegacyTokenId) -> u128 {
        self.balances
            .get(&(owner.clone(), token_id.clone()))
            .unwrap_or(0)
    }

    fn add_balance(&mut self, owner: &AccountId, token_id: &LegacyTokenId, amount: u128) {
        let b = self.balance(owner, token_id);
        self.balances
            .insert(&(owner.clone(), token_id.clone()), &(b + amount));
    }

    /// Returns the remaining sender balance.
    fn internal_transfer(
        &mut self,
        sender: &AccountId,
        receiver: &AccountId,
        token_id: &LegacyTokenId,
        amount: u128,
        memo: Option<&str>,
    ) -> u128 {
        require!(amount > 0, "amount must be positive");
        require!(sender != receiver, "sender and receiver must differ");
        let b = self.balance(sender, token_id);
        require!(b >= amount, "not enough balance");
        let remaining = b - amount;
        let key = (sender.clone(), token_id.clone());
        if remaining == 0 {
            self.balances.remove(&key);
        } else {
            self.balances.insert(&key, &remaining);
        }

        if *receiver == env::current_account_id() {
            let s = self.supply.get(token_id).unwrap_or(0);
            self.supply.insert(token_id, &(s - amount));
            emit_mt_event(
                "mt_burn",
                MtEventData {
                    owner_id: sender,
                    token_ids: [token_id.as_str()],
                    amounts: [U128(amount)],
                    memo,
                },
            );
        } else {
            self.add_balance(receiver, token_id, amount);
            emit_mt_event(
                "mt_transfer",
                MtEventData {
                    owner_id: sender,
                    token_ids: [token_id.as_str()],
                    amounts: [U128(amount)],
                    memo,
                },
            );
        }
        remaining
    }
}

#[near_bindgen]
impl LegacyCollection for Contract {
    fn mt_balance_of(&self, account_id: AccountId, token_id: LegacyTokenId) -> U128 {
        U128(self.balance(&account_id, &token_id))
    }

    fn mt_is_approved_for_all(&self, owner_id: AccountId, operator_id: AccountId) -> bool {
        self.approvals.contains(&(owner_id, operator_id))
    }

    fn mt_set_approval_for_all(&mut self, operator_id: AccountId, approved: bool) {
        let key = (env::predecessor_account_id(), operator_id);
        if approved {
            self.approvals.insert(&key);
        } else {
            self.approvals.remove(&key);
        }
    }

    fn mt_transfer_from(
        &mut self,
        sender_id: AccountId,
        receiver_id: AccountId,
        token_id: LegacyTokenId,
        amount: U128,
        memo: Option<String>,
    ) -> U128 {
        let operator = env::predecessor_account_id();
        require!(
            operator == sender_id || self.approvals.contains(&(sender_id.clone(), operator)),
            "caller is not owner nor approved"
        );
        U128(self.internal_transfer(&sender_id, &receiver_id, &token_id, amount.0, memo.as_deref()))
    }
}
