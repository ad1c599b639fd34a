use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    NotInitialized = 0,
    QuorumTooSmall = 1,
    QuorumTooBig = 2,
    IndexOutOfRange = 3,
}
