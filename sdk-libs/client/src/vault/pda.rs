use solana_program::pubkey::Pubkey;

use crate::constants::{
    CENTRAL_AUTHORITY_SEED, CNFT_VAULT_PROGRAM_ID, COLLECTION_CPI_SEED, EDITION_SEED,
    METADATA_SEED, MPL_BUBBLEGUM_PROGRAM_ID, MPL_TOKEN_METADATA_PROGRAM_ID,
};

/// Authority PDA owned by the vault program; signs Bubblegum CPIs on its
/// behalf.
pub fn central_authority() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CENTRAL_AUTHORITY_SEED], &CNFT_VAULT_PROGRAM_ID)
}

/// Tree config account governing a given compression tree.
pub fn tree_config(merkle_tree: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[merkle_tree.as_ref()], &MPL_BUBBLEGUM_PROGRAM_ID)
}

pub fn bubblegum_signer() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[COLLECTION_CPI_SEED], &MPL_BUBBLEGUM_PROGRAM_ID)
}

pub fn metadata(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            MPL_TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
        ],
        &MPL_TOKEN_METADATA_PROGRAM_ID,
    )
}

pub fn master_edition(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            MPL_TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            EDITION_SEED,
        ],
        &MPL_TOKEN_METADATA_PROGRAM_ID,
    )
}
