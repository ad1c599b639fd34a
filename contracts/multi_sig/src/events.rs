use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletCreated {
    #[topic]
    pub creator: Address,
    pub quorum: u32,
    pub signer_count: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferProposed {
    #[topic]
    pub id: u64,
    #[topic]
    pub proposer: Address,
    pub asset: Address,
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxApproved {
    #[topic]
    pub id: u64,
    #[topic]
    pub signer: Address,
    pub approvals: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxExecuted {
    #[topic]
    pub id: u64,
    pub asset: Address,
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumUpdateProposed {
    #[topic]
    pub id: u64,
    #[topic]
    pub proposer: Address,
    pub proposed_quorum: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumUpdateApproved {
    #[topic]
    pub id: u64,
    #[topic]
    pub signer: Address,
    pub approvals: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumUpdated {
    #[topic]
    pub id: u64,
    pub old_quorum: u32,
    pub new_quorum: u32,
}
