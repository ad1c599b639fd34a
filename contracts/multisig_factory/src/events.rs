use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultisigCreated {
    #[topic]
    pub creator: Address,
    pub wallet: Address,
    pub index: u32,
    pub quorum: u32,
}
