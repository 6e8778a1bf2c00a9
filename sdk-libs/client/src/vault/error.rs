use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultSdkError {
    #[error("failed to serialize instruction data: {0}")]
    Serialize(#[from] io::Error),

    #[error("failed to decode `{field}` for asset {asset_id}: expected a base58 encoded 32 byte value")]
    HashDecode {
        asset_id: String,
        field: &'static str,
    },

    #[error("proof node {index} for asset {asset_id} is not a valid base58 pubkey")]
    ProofNode { asset_id: String, index: usize },

    #[error("leaf id {leaf_id} of asset {asset_id} does not fit into a u32 leaf index")]
    LeafIndexOverflow { asset_id: String, leaf_id: u64 },
}

pub type Result<T> = std::result::Result<T, VaultSdkError>;
