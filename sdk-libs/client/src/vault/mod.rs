mod burn;
mod error;
pub mod instructions;
pub mod pda;

pub use burn::{burn_args, proof_path_metas};
pub use error::VaultSdkError;
pub use instructions::{
    burn_cnft, initialize, mint_cnft, BurnCnftAccounts, BurnCnftArgs, InitializeAccounts,
    MintCnftAccounts,
};
