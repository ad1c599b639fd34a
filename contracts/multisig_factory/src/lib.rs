#![no_std]

mod errors;
pub mod events;
mod factory;
mod types;

pub use errors::FactoryError;
pub use factory::{MultisigFactory, MultisigFactoryClient};

mod test;
