//! End-to-end flow against a live cluster and DAS indexer. These tests are
//! ignored by default; point the env vars below at a devnet deployment and
//! run with `--ignored`.
//!
//! - `CNFT_VAULT_RPC_URL`       cluster JSON-RPC endpoint
//! - `CNFT_VAULT_INDEXER_URL`   DAS indexer endpoint (api-key in the query)
//! - `CNFT_VAULT_PAYER`         path to the payer/tree-delegate keypair
//! - `CNFT_VAULT_LEAF_OWNER`    path to the leaf owner keypair
//! - `CNFT_VAULT_MERKLE_TREE`   merkle tree address
//! - `CNFT_VAULT_COLLECTION`    collection mint address
//! - `CNFT_VAULT_ASSET_ID`      asset to burn (burn flow only)

use std::str::FromStr;

use cnft_vault_client::{
    constants::MPL_BUBBLEGUM_PROGRAM_ID,
    das::DasClient,
    rpc::ConcurrentMerkleTreeExt,
    vault::{
        burn_args, burn_cnft, mint_cnft, proof_path_metas, pda, BurnCnftAccounts,
        MintCnftAccounts,
    },
};
use solana_client::{
    nonblocking::rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig,
};
use serial_test::serial;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
    signer::Signer,
    transaction::Transaction,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{} must be set", name))
}

fn keypair(name: &str) -> Keypair {
    read_keypair_file(env(name)).unwrap_or_else(|e| panic!("failed to read {}: {:?}", name, e))
}

fn pubkey(name: &str) -> Pubkey {
    Pubkey::from_str(&env(name)).unwrap_or_else(|e| panic!("bad {}: {}", name, e))
}

#[tokio::test]
#[serial]
#[ignore = "requires a live cluster and DAS indexer"]
async fn mint_flow_against_live_cluster() {
    init_logging();
    let rpc = RpcClient::new(env("CNFT_VAULT_RPC_URL"));
    let payer = keypair("CNFT_VAULT_PAYER");
    let leaf_owner = keypair("CNFT_VAULT_LEAF_OWNER");
    let merkle_tree = pubkey("CNFT_VAULT_MERKLE_TREE");
    let collection_mint = pubkey("CNFT_VAULT_COLLECTION");

    let instruction = mint_cnft(
        MintCnftAccounts {
            payer: payer.pubkey(),
            tree_config: pda::tree_config(&merkle_tree).0,
            leaf_owner: leaf_owner.pubkey(),
            leaf_delegate: leaf_owner.pubkey(),
            merkle_tree,
            tree_delegate: payer.pubkey(),
            collection_authority: payer.pubkey(),
            collection_authority_record_pda: MPL_BUBBLEGUM_PROGRAM_ID,
            collection_mint,
            collection_metadata: pda::metadata(&collection_mint).0,
            edition_account: pda::master_edition(&collection_mint).0,
            bubblegum_signer: pda::bubblegum_signer().0,
        },
        "Vaulted cNFT".to_string(),
        "VCNFT".to_string(),
        "https://example.com/cnft.json".to_string(),
        0,
    )
    .unwrap();

    let blockhash = rpc.get_latest_blockhash().await.unwrap();
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[&payer],
        blockhash,
    );
    let signature = rpc
        .send_and_confirm_transaction(&transaction)
        .await
        .unwrap();
    println!("minted: {}", signature);
}

#[tokio::test]
#[serial]
#[ignore = "requires a live cluster and DAS indexer"]
async fn burn_flow_against_live_cluster() {
    init_logging();
    let rpc = RpcClient::new(env("CNFT_VAULT_RPC_URL"));
    let indexer = DasClient::from_url(env("CNFT_VAULT_INDEXER_URL")).unwrap();
    let leaf_owner = keypair("CNFT_VAULT_LEAF_OWNER");
    let asset_id = env("CNFT_VAULT_ASSET_ID");

    let asset = indexer.get_asset(&asset_id).await.unwrap();
    let proof = indexer.get_asset_proof(&asset_id).await.unwrap();
    let merkle_tree = Pubkey::from_str(&asset.compression.tree).unwrap();

    let canopy_depth = rpc.get_canopy_depth(&merkle_tree).await.unwrap();
    let proof_path = proof_path_metas(&asset.id, &proof, canopy_depth).unwrap();

    let instruction = burn_cnft(
        BurnCnftAccounts {
            leaf_owner: leaf_owner.pubkey(),
            leaf_delegate: leaf_owner.pubkey(),
            merkle_tree,
            tree_config: pda::tree_config(&merkle_tree).0,
        },
        burn_args(&asset, &proof).unwrap(),
        proof_path,
    )
    .unwrap();

    let blockhash = rpc.get_latest_blockhash().await.unwrap();
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&leaf_owner.pubkey()),
        &[&leaf_owner],
        blockhash,
    );
    let signature = rpc
        .send_transaction_with_config(
            &transaction,
            RpcSendTransactionConfig {
                skip_preflight: true,
                ..RpcSendTransactionConfig::default()
            },
        )
        .await
        .unwrap();
    println!("burned: {}", signature);
}
