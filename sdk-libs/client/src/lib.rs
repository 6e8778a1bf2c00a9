pub mod constants;
pub mod das;
pub mod rpc;
pub mod vault;
