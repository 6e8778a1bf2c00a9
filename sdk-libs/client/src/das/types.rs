use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request envelope. The indexer echoes `id` back unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcRequest<T> {
    pub jsonrpc: String,
    pub id: String,
    pub method: String,
    pub params: T,
}

impl<T> RpcRequest<T> {
    pub fn new(method: &str, id: &str, params: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: id.to_string(),
            method: method.to_string(),
            params,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RpcErrorObject {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Sort criterion for the asset enumeration endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SortBy {
    pub sort_by: AssetSortBy,
    pub sort_direction: AssetSortDirection,
}

impl Default for SortBy {
    fn default() -> Self {
        Self {
            sort_by: AssetSortBy::Created,
            sort_direction: AssetSortDirection::Asc,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssetSortBy {
    Created,
    Updated,
    RecentAction,
    Id,
    None,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetSortDirection {
    Asc,
    Desc,
}

/// Merkle proof for one compressed leaf, fetched per burn and never cached.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetProof {
    pub root: String,
    pub proof: Vec<String>,
    pub node_index: u64,
    pub leaf: String,
    pub tree_id: String,
}

/// Asset record as returned by the indexer. Unknown fields are ignored so
/// that indexer-side schema additions do not break deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub interface: Option<String>,
    pub compression: Compression,
    pub ownership: Ownership,
    #[serde(default)]
    pub grouping: Vec<Grouping>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Compression {
    pub data_hash: String,
    pub creator_hash: String,
    pub leaf_id: u64,
    pub tree: String,
    #[serde(default)]
    pub compressed: bool,
    #[serde(default)]
    pub eligible: bool,
    #[serde(default)]
    pub seq: u64,
    #[serde(default)]
    pub asset_hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ownership {
    pub owner: String,
    #[serde(default)]
    pub delegate: Option<String>,
    #[serde(default)]
    pub delegated: bool,
    #[serde(default)]
    pub frozen: bool,
    #[serde(default)]
    pub ownership_model: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grouping {
    pub group_key: String,
    pub group_value: String,
}

/// One page of an asset enumeration response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetList {
    pub total: u64,
    pub limit: u32,
    #[serde(default)]
    pub page: Option<u32>,
    pub items: Vec<Asset>,
}
