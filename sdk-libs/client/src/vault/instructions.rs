use borsh::BorshSerialize;
use solana_program::{
    hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program, sysvar,
};

use super::error::Result;
use crate::constants::{
    ASSOCIATED_TOKEN_PROGRAM_ID, CNFT_VAULT_PROGRAM_ID, MPL_BUBBLEGUM_PROGRAM_ID,
    MPL_TOKEN_METADATA_PROGRAM_ID, SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, SPL_NOOP_PROGRAM_ID,
    TOKEN_PROGRAM_ID,
};

/// Anchor global-namespace instruction discriminator.
fn discriminator(name: &str) -> [u8; 8] {
    let digest = hash::hash(format!("global:{}", name).as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.to_bytes()[..8]);
    bytes
}

fn instruction_data<T: BorshSerialize>(name: &str, args: &T) -> Result<Vec<u8>> {
    let mut data = discriminator(name).to_vec();
    args.serialize(&mut data)?;
    Ok(data)
}

#[derive(BorshSerialize, Debug, Clone)]
struct InitializeArgs {
    name: String,
    symbol: String,
    uri: String,
}

#[derive(BorshSerialize, Debug, Clone)]
struct MintCnftArgs {
    name: String,
    symbol: String,
    uri: String,
    seller_fee_basis_points: u16,
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct BurnCnftArgs {
    pub root: [u8; 32],
    pub data_hash: [u8; 32],
    pub creator_hash: [u8; 32],
    pub nonce: u64,
    pub index: u32,
}

#[derive(Debug, Clone)]
pub struct InitializeAccounts {
    pub signer: Pubkey,
    pub central_authority: Pubkey,
    pub mint: Pubkey,
    pub associated_token_account: Pubkey,
    pub metadata_account: Pubkey,
    pub master_edition_account: Pubkey,
}

/// Creates the vault's collection NFT. The mint is a fresh keypair and must
/// co-sign the transaction.
pub fn initialize(
    accounts: InitializeAccounts,
    name: String,
    symbol: String,
    uri: String,
) -> Result<Instruction> {
    let data = instruction_data("initialize", &InitializeArgs { name, symbol, uri })?;

    Ok(Instruction {
        program_id: CNFT_VAULT_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(accounts.signer, true),
            AccountMeta::new(accounts.central_authority, false),
            AccountMeta::new(accounts.mint, true),
            AccountMeta::new(accounts.associated_token_account, false),
            AccountMeta::new(accounts.metadata_account, false),
            AccountMeta::new(accounts.master_edition_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(MPL_TOKEN_METADATA_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ],
        data,
    })
}

#[derive(Debug, Clone)]
pub struct MintCnftAccounts {
    pub payer: Pubkey,
    pub tree_config: Pubkey,
    pub leaf_owner: Pubkey,
    pub leaf_delegate: Pubkey,
    pub merkle_tree: Pubkey,
    pub tree_delegate: Pubkey,
    pub collection_authority: Pubkey,
    /// Pass the Bubblegum program id when no collection authority record
    /// PDA exists.
    pub collection_authority_record_pda: Pubkey,
    pub collection_mint: Pubkey,
    pub collection_metadata: Pubkey,
    pub edition_account: Pubkey,
    pub bubblegum_signer: Pubkey,
}

/// Mints a cNFT into an existing tree and collection.
pub fn mint_cnft(
    accounts: MintCnftAccounts,
    name: String,
    symbol: String,
    uri: String,
    seller_fee_basis_points: u16,
) -> Result<Instruction> {
    let data = instruction_data(
        "mint_cnft",
        &MintCnftArgs {
            name,
            symbol,
            uri,
            seller_fee_basis_points,
        },
    )?;

    Ok(Instruction {
        program_id: CNFT_VAULT_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(accounts.payer, true),
            AccountMeta::new(accounts.tree_config, false),
            AccountMeta::new_readonly(accounts.leaf_owner, false),
            AccountMeta::new_readonly(accounts.leaf_delegate, false),
            AccountMeta::new(accounts.merkle_tree, false),
            AccountMeta::new_readonly(accounts.tree_delegate, true),
            AccountMeta::new_readonly(accounts.collection_authority, true),
            AccountMeta::new_readonly(accounts.collection_authority_record_pda, false),
            AccountMeta::new_readonly(accounts.collection_mint, false),
            AccountMeta::new(accounts.collection_metadata, false),
            AccountMeta::new_readonly(accounts.edition_account, false),
            AccountMeta::new_readonly(accounts.bubblegum_signer, false),
            AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
            AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
            AccountMeta::new_readonly(MPL_TOKEN_METADATA_PROGRAM_ID, false),
            AccountMeta::new_readonly(MPL_BUBBLEGUM_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

#[derive(Debug, Clone)]
pub struct BurnCnftAccounts {
    pub leaf_owner: Pubkey,
    pub leaf_delegate: Pubkey,
    pub merkle_tree: Pubkey,
    pub tree_config: Pubkey,
}

/// Burns an existing cNFT. `proof_path` holds the canopy-truncated proof
/// accounts produced by [`super::proof_path_metas`]; they are appended as
/// remaining accounts.
pub fn burn_cnft(
    accounts: BurnCnftAccounts,
    args: BurnCnftArgs,
    proof_path: Vec<AccountMeta>,
) -> Result<Instruction> {
    let data = instruction_data("burn_cnft", &args)?;

    let mut metas = vec![
        AccountMeta::new(accounts.leaf_owner, true),
        AccountMeta::new(accounts.leaf_delegate, true),
        AccountMeta::new(accounts.merkle_tree, false),
        AccountMeta::new_readonly(accounts.tree_config, false),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
        AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
        AccountMeta::new_readonly(MPL_BUBBLEGUM_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ];
    metas.extend(proof_path);

    Ok(Instruction {
        program_id: CNFT_VAULT_PROGRAM_ID,
        accounts: metas,
        data,
    })
}
