mod base58;
mod client;
mod config;
mod error;
mod types;

pub use base58::{decode_base58_to_fixed_array, Base58Conversions};
pub use client::{
    get_asset_params, get_asset_proof_params, get_assets_by_authority_params,
    get_assets_by_creator_params, get_assets_by_group_params, get_assets_by_owner_params,
    DasClient,
};
pub use config::{DasClientConfig, RetryConfig};
pub use error::DasError;
pub use types::{
    Asset, AssetList, AssetProof, AssetSortBy, AssetSortDirection, Compression, Grouping,
    Ownership, RpcErrorObject, RpcRequest, RpcResponse, SortBy,
};
