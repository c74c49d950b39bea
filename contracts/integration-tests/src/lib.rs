use near_units::parse_near;
use near_workspaces::network::{NetworkClient, NetworkInfo};
use near_workspaces::result::ExecutionFinalResult;
use near_workspaces::{Account, AccountId, Contract, DevNetwork, Worker};
use serde_json::json;

use mt::LegacyTokenId;

pub const MIGRATION_PATH: &str = "./../nft-migration";
pub const LEGACY_MOCK_PATH: &str = "./../legacy-mock";
pub const BASE_URI: &str = "ipfs://QmUaG9DJMQprYoSWXp3X1V1YMS5E37pjt4MkQGpQtgZkeK";

// Build contract from sources and initialize it
pub async fn build_contract<T>(
    worker: &Worker<T>,
    project_path: &str,
    args: serde_json::Value,
) -> anyhow::Result<Contract>
where
    T: NetworkInfo + NetworkClient + DevNetwork + Send + Sync,
{
    let mut wasm;
    let mut retry_count = 3;
    // compilation sometimes returns an empty wasm, retry in that case
    loop {
        wasm = near_workspaces::compile_project(project_path).await?;
        if !wasm.is_empty() || retry_count == 0 {
            break;
        }
        retry_count -= 1;
    }

    let (id, sk) = worker.dev_generate().await;
    let contract = worker
        .create_tla_and_deploy(id, sk, &wasm)
        .await?
        .into_result()?;

    let _ = contract
        .call("new")
        .args_json(args)
        .max_gas()
        .transact()
        .await?
        .into_result()?;

    Ok(contract)
}

/// Deploys the legacy collection mock and the migration contract reading from it.
/// `admin` can reserve tokens, `fee_receiver` collects the public mint fee.
pub async fn deploy_migration<T>(
    worker: &Worker<T>,
    admin: &AccountId,
    fee_receiver: &AccountId,
    swap_reservation_target: u64,
) -> anyhow::Result<(Contract, Contract)>
where
    T: NetworkInfo + NetworkClient + DevNetwork + Send + Sync,
{
    let legacy = build_contract(worker, LEGACY_MOCK_PATH, json!({})).await?;
    let migration = build_contract(
        worker,
        MIGRATION_PATH,
        json!({
            "admins": [admin],
            "metadata": {
                "spec": "nft-1.0.0",
                "name": "Phantz",
                "symbol": "PHANTZ",
                "base_uri": BASE_URI,
            },
            "config": {
                "auction": "auction.test.near",
                "marketplace": "marketplace.test.near",
                "bundle_marketplace": "bundle-marketplace.test.near",
                "platform_fee_bps": 250,
                "fee_receiver": fee_receiver,
                "legacy_collection": legacy.id(),
                "swap_reservation_target": swap_reservation_target,
                "mint_fee": parse_near!("0.1 N").to_string(),
            },
        }),
    )
    .await?;
    Ok((legacy, migration))
}

pub async fn reserve_batch(
    migration: &AccountId,
    admin: &Account,
    legacy_token_ids: &[LegacyTokenId],
) -> anyhow::Result<u64> {
    let res = admin
        .call(migration, "reserve_batch")
        .args_json(json!({ "legacy_token_ids": legacy_token_ids }))
        .max_gas()
        .transact()
        .await?;
    assert!(res.is_success(), "{:?}", res.receipt_failures());
    Ok(res.json()?)
}

/// Mints `amount` legacy units of `token_id` to `holder`.
pub async fn legacy_mint(
    legacy: &AccountId,
    holder: &Account,
    token_id: &str,
    amount: u128,
) -> anyhow::Result<()> {
    let res = holder
        .call(legacy, "mt_mint")
        .args_json(json!({ "token_id": token_id, "amount": amount.to_string() }))
        .max_gas()
        .transact()
        .await?;
    assert!(res.is_success(), "{:?}", res.receipt_failures());
    Ok(())
}

pub async fn legacy_approve(
    legacy: &AccountId,
    holder: &Account,
    operator: &AccountId,
) -> anyhow::Result<()> {
    let res = holder
        .call(legacy, "mt_set_approval_for_all")
        .args_json(json!({ "operator_id": operator, "approved": true }))
        .max_gas()
        .transact()
        .await?;
    assert!(res.is_success(), "{:?}", res.receipt_failures());
    Ok(())
}

pub async fn swap(
    migration: &AccountId,
    holder: &Account,
    legacy_token_id: &str,
) -> anyhow::Result<ExecutionFinalResult> {
    Ok(holder
        .call(migration, "swap")
        .args_json(json!({ "legacy_token_id": legacy_token_id }))
        .max_gas()
        .transact()
        .await?)
}

/// Returns true if any receipt of the transaction failed with a message containing `msg`.
pub fn failed_with(res: &ExecutionFinalResult, msg: &str) -> bool {
    res.receipt_failures()
        .iter()
        .any(|f| format!("{:?}", f).contains(msg))
}
