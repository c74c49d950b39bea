use near_sdk::{Balance, Gas};

pub const MILI_NEAR: Balance = 1_000_000_000_000_000_000_000;

/// Public mint price used when the deployer doesn't set one: 0.1 NEAR.
pub const DEFAULT_MINT_FEE: Balance = 100 * MILI_NEAR;

/// 100% in basis points.
pub const MAX_PLATFORM_FEE_BPS: u16 = 10_000;

/// NEP-297 standard name of the ledger events.
pub const EVENT_STANDARD: &str = "nft-migration";
pub const EVENT_VERSION: &str = "1.0.0";

/// Gas for each of the `mt_balance_of` and `mt_is_approved_for_all` queries.
pub const LEGACY_QUERY_GAS: Gas = Gas(5 * Gas::ONE_TERA.0);
/// Gas for the `mt_transfer_from` call burning the swapped legacy unit.
pub const LEGACY_BURN_GAS: Gas = Gas(10 * Gas::ONE_TERA.0);

/// Gas reserved for the final failure callback which panics with the failure reason.
pub const FAILURE_CALLBACK_GAS: Gas = Gas(5 * Gas::ONE_TERA.0);
/// Gas for the `on_swap_burned` callback (excluding the failure callback).
pub const SWAP_BURNED_CALLBACK_GAS: Gas = Gas(15 * Gas::ONE_TERA.0);
/// Gas for the `on_swap_checked` callback own work.
pub const SWAP_CHECKED_RESERVED_GAS: Gas = Gas(10 * Gas::ONE_TERA.0);
/// Gas reserved for the `swap` method itself.
pub const SWAP_RESERVED_GAS: Gas = Gas(10 * Gas::ONE_TERA.0);

/// Static gas attached to `on_swap_checked`: its own work plus everything it schedules.
pub const SWAP_CHECKED_CALLBACK_GAS: Gas = Gas(SWAP_CHECKED_RESERVED_GAS.0
    + LEGACY_BURN_GAS.0
    + SWAP_BURNED_CALLBACK_GAS.0
    + 2 * FAILURE_CALLBACK_GAS.0);

/// Minimum prepaid gas required by `swap` to complete the whole promise chain.
pub const SWAP_MIN_GAS: Gas =
    Gas(SWAP_RESERVED_GAS.0 + 2 * LEGACY_QUERY_GAS.0 + SWAP_CHECKED_CALLBACK_GAS.0);
