#![no_std]

pub mod asset;
mod errors;
pub mod events;
mod multisig;
mod types;

pub use errors::MultisigError;
pub use multisig::{MultiSigContract, MultiSigContractClient};
pub use types::{DataKey, QuorumUpdateProposal, TransferProposal};
