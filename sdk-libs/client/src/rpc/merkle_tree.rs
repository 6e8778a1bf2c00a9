use async_trait::async_trait;
use borsh::BorshDeserialize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::pubkey::Pubkey;
use spl_account_compression::state::{merkle_tree_get_size, ConcurrentMerkleTreeHeader};

use super::errors::RpcError;

/// Derives the canopy depth of a concurrent merkle tree from its raw account
/// image. Canopy nodes are cached on chain, so proof paths sent in
/// transactions omit that many trailing nodes.
pub fn canopy_depth_from_account(data: &[u8]) -> Result<u32, RpcError> {
    let mut rest = data;
    let header = ConcurrentMerkleTreeHeader::deserialize(&mut rest)
        .map_err(|e| RpcError::MalformedTreeAccount(e.to_string()))?;
    let header_size = data.len() - rest.len();
    let tree_size = merkle_tree_get_size(&header)
        .map_err(|e| RpcError::MalformedTreeAccount(e.to_string()))?;
    let canopy_bytes = data.len().checked_sub(header_size + tree_size).ok_or_else(|| {
        RpcError::MalformedTreeAccount(format!(
            "account holds {} bytes, expected at least {}",
            data.len(),
            header_size + tree_size
        ))
    })?;
    Ok(canopy_depth(canopy_bytes))
}

// A canopy of depth d stores 2^(d+1) - 2 nodes of 32 bytes each.
fn canopy_depth(canopy_byte_length: usize) -> u32 {
    let nodes = (canopy_byte_length / 32) as u64;
    if nodes == 0 {
        return 0;
    }
    (nodes + 2).ilog2() - 1
}

/// Convenience for reading compression-tree accounts through an RPC
/// connection.
#[async_trait]
pub trait ConcurrentMerkleTreeExt {
    async fn get_canopy_depth(&self, merkle_tree: &Pubkey) -> Result<u32, RpcError>;
}

#[async_trait]
impl ConcurrentMerkleTreeExt for RpcClient {
    async fn get_canopy_depth(&self, merkle_tree: &Pubkey) -> Result<u32, RpcError> {
        let account = self.get_account(merkle_tree).await?;
        canopy_depth_from_account(&account.data)
    }
}
