use solana_program::{instruction::AccountMeta, pubkey::Pubkey};

use super::{
    error::{Result, VaultSdkError},
    instructions::BurnCnftArgs,
};
use crate::das::{decode_base58_to_fixed_array, Asset, AssetProof};

/// Maps an indexer proof to the account list expected by the burn
/// instruction.
///
/// The last `canopy_depth` proof nodes are cached on chain and must not be
/// supplied again, so they are dropped before the remaining nodes become
/// read-only, non-signing account references.
pub fn proof_path_metas(
    asset_id: &str,
    proof: &AssetProof,
    canopy_depth: u32,
) -> Result<Vec<AccountMeta>> {
    let keep = proof.proof.len().saturating_sub(canopy_depth as usize);
    proof.proof[..keep]
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let key: [u8; 32] =
                decode_base58_to_fixed_array(node).map_err(|_| VaultSdkError::ProofNode {
                    asset_id: asset_id.to_string(),
                    index,
                })?;
            Ok(AccountMeta::new_readonly(Pubkey::new_from_array(key), false))
        })
        .collect()
}

/// Decodes the proof and asset hashes into the burn instruction's argument
/// shapes. Any malformed hash fails the whole assembly.
pub fn burn_args(asset: &Asset, proof: &AssetProof) -> Result<BurnCnftArgs> {
    let root = decode_hash(&asset.id, "root", &proof.root)?;
    let data_hash = decode_hash(&asset.id, "data_hash", &asset.compression.data_hash)?;
    let creator_hash = decode_hash(&asset.id, "creator_hash", &asset.compression.creator_hash)?;

    let leaf_id = asset.compression.leaf_id;
    let index = u32::try_from(leaf_id).map_err(|_| VaultSdkError::LeafIndexOverflow {
        asset_id: asset.id.clone(),
        leaf_id,
    })?;

    Ok(BurnCnftArgs {
        root,
        data_hash,
        creator_hash,
        nonce: leaf_id,
        index,
    })
}

fn decode_hash(asset_id: &str, field: &'static str, value: &str) -> Result<[u8; 32]> {
    decode_base58_to_fixed_array(value).map_err(|_| VaultSdkError::HashDecode {
        asset_id: asset_id.to_string(),
        field,
    })
}
