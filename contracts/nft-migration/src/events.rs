use near_contract_standards::non_fungible_token::events::{NftMint, NftTransfer};
use near_sdk::serde::Serialize;
use near_sdk::AccountId;

use mt::{EventPayload, LegacyTokenId, NearEvent, TokenId};

use crate::consts::{EVENT_STANDARD, EVENT_VERSION};

fn emit_event<T: Serialize>(event: &'static str, data: T) {
    NearEvent {
        standard: EVENT_STANDARD,
        version: EVENT_VERSION,
        event: EventPayload { event, data },
    }
    .emit();
}

/// Reservation progress: `count` tokens `[first_token_id, last_token_id]` were
/// reserved for swap by a single `reserve_batch` call.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub struct Reserve {
    pub count: u64,
    pub first_token_id: TokenId,
    pub last_token_id: TokenId,
    pub total_reserved: u64,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub struct Minted<'a> {
    pub token_id: TokenId,
    pub receiver_id: &'a AccountId,
    pub token_uri: &'a str,
    pub minter: &'a AccountId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub struct Swapped<'a> {
    pub owner_id: &'a AccountId,
    pub legacy_token_id: &'a LegacyTokenId,
    pub token_id: TokenId,
    /// block timestamp in milliseconds
    pub timestamp: u64,
}

pub(crate) fn emit_reserve(r: Reserve) {
    emit_event("reserve", r);
}

pub(crate) fn emit_minted(m: Minted) {
    emit_event("minted", m);
}

pub(crate) fn emit_swapped(s: Swapped) {
    emit_event("swapped", s);
}

/// NEP-171 mint log for the given tokens.
pub(crate) fn emit_nft_mint(owner_id: &AccountId, tokens: &[TokenId], memo: Option<&str>) {
    let ids: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    let token_ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    NftMint {
        owner_id,
        token_ids: &token_ids,
        memo,
    }
    .emit();
}

/// NEP-171 transfer log for a single token.
pub(crate) fn emit_nft_transfer(
    old_owner_id: &AccountId,
    new_owner_id: &AccountId,
    token: TokenId,
    memo: Option<&str>,
) {
    let id = token.to_string();
    NftTransfer {
        old_owner_id,
        new_owner_id,
        token_ids: &[&id],
        authorized_id: None,
        memo,
    }
    .emit();
}
