pub mod errors;
pub mod merkle_tree;

pub use errors::RpcError;
pub use merkle_tree::ConcurrentMerkleTreeExt;
