use near_sdk::env::panic_str;
use near_sdk::{Balance, FunctionError};

use mt::{LegacyTokenId, TokenId};

/// Contract errors. Every variant rejects the whole call: no state is modified.
#[cfg_attr(not(target_arch = "wasm32"), derive(PartialEq))]
#[derive(Debug)]
pub enum MigrationError {
    /// public mint or swap attempted before all swap tokens were reserved
    ReservationIncomplete,
    CapacityExceeded {
        reserved: u64,
        requested: u64,
        target: u64,
    },
    AlreadyReserved(LegacyTokenId),
    InsufficientPayment(Balance),
    NotSwappable,
    NotApproved,
    NothingToSwap,
    UnknownIdentifier(TokenId),
    Unauthorized,
    /// the legacy collection rejected the burn of the swapped unit
    BurnFailed,
    /// a query to the legacy collection failed
    LegacyCall(String),
    InsufficientGas(u64),
    NoPendingSwap(LegacyTokenId),
}

impl MigrationError {
    /// Human readable reason, stable per variant.
    pub fn reason(&self) -> String {
        match self {
            MigrationError::ReservationIncomplete => "Should mint NFTs for swap first.".to_owned(),
            MigrationError::CapacityExceeded {
                reserved,
                requested,
                target,
            } => format!(
                "reservation exceeds swap capacity: reserved {}, requested {}, target {}",
                reserved, requested, target
            ),
            MigrationError::AlreadyReserved(id) => {
                format!("legacy token {} is already reserved", id)
            }
            MigrationError::InsufficientPayment(_) => "Insufficient funds to mint.".to_owned(),
            MigrationError::NotSwappable => "Not swappable tokenID".to_owned(),
            MigrationError::NotApproved => "Should approve contract first".to_owned(),
            MigrationError::NothingToSwap => "No NFT to swap".to_owned(),
            MigrationError::UnknownIdentifier(id) => format!("unknown token id {}", id),
            MigrationError::Unauthorized => "not an admin".to_owned(),
            MigrationError::BurnFailed => "burn of the legacy token failed".to_owned(),
            MigrationError::LegacyCall(method) => {
                format!("legacy collection call {} failed", method)
            }
            MigrationError::InsufficientGas(tgas) => {
                format!("swap requires at least {} TGas", tgas)
            }
            MigrationError::NoPendingSwap(id) => {
                format!("no pending swap for legacy token {}", id)
            }
        }
    }
}

impl FunctionError for MigrationError {
    fn panic(&self) -> ! {
        panic_str(&self.reason())
    }
}
