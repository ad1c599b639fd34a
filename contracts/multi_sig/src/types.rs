use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Quorum,
    SignerCount,
    Signers,
    Signer(Address),
    TxCount,
    QuorumUpdateCount,
    Transaction(u64),
    QuorumUpdate(u64),
}

/// A pending or completed asset transfer out of the wallet.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferProposal {
    pub id: u64,
    pub amount: i128,
    pub recipient: Address,
    pub asset: Address,
    pub approvals: Vec<Address>,
    pub completed: bool,
}

/// A pending or completed change of the approval threshold.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumUpdateProposal {
    pub id: u64,
    pub proposed_quorum: u32,
    pub approvals: Vec<Address>,
    pub completed: bool,
}
