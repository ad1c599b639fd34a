use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    NotInitialized = 0,
    InvalidQuorum = 1,
    NotASigner = 2,
    ZeroAmount = 3,
    ZeroAddress = 4,
    InsufficientFunds = 5,
    InvalidTxId = 6,
    AlreadySigned = 7,
    ApprovalsAlreadyReached = 8,
    AlreadyCompleted = 9,
    QuorumTooSmall = 10,
    QuorumTooBig = 11,
}
