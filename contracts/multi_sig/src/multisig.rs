use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, Env, String, TryFromVal, Val, Vec,
};

use crate::asset::Asset;
use crate::errors::MultisigError;
use crate::events::{
    QuorumUpdateApproved, QuorumUpdateProposed, QuorumUpdated, TransferProposed, TxApproved,
    TxExecuted, WalletCreated,
};
use crate::types::{DataKey, QuorumUpdateProposal, TransferProposal};

// All-zero account and contract strkeys; neither can hold or receive funds.
const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

const DAY_IN_LEDGERS: u32 = 17_280;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

const MIN_QUORUM: u32 = 2;

#[contract]
pub struct MultiSigContract;

#[contractimpl]
impl MultiSigContract {
    /// Sets up the signer set and the approval quorum.
    ///
    /// `creator` is always a signer; it is appended to `signers` when missing
    /// and counted before the quorum bound is checked. Repeated entries in
    /// `signers` are stored once.
    pub fn __constructor(env: Env, creator: Address, quorum: u32, signers: Vec<Address>) {
        let mut members: Vec<Address> = Vec::new(&env);
        for signer in signers.iter() {
            if !members.contains(&signer) {
                members.push_back(signer);
            }
        }
        if !members.contains(&creator) {
            members.push_back(creator.clone());
        }

        if quorum < MIN_QUORUM || quorum > members.len() {
            panic_with_error!(&env, MultisigError::InvalidQuorum);
        }

        let storage = env.storage().instance();
        for signer in members.iter() {
            storage.set(&DataKey::Signer(signer), &true);
        }
        storage.set(&DataKey::Signers, &members);
        storage.set(&DataKey::SignerCount, &members.len());
        storage.set(&DataKey::Quorum, &quorum);
        storage.set(&DataKey::TxCount, &0u64);
        storage.set(&DataKey::QuorumUpdateCount, &0u64);
        Self::bump_instance(&env);

        log!(&env, "wallet created", quorum, members.len());
        WalletCreated {
            creator,
            quorum,
            signer_count: members.len(),
        }
        .publish(&env);
    }

    /// Proposes moving `amount` of `asset` from this wallet to `recipient`.
    ///
    /// The caller is recorded as the first approver. Execution only ever
    /// happens from [`Self::approve_tx`].
    pub fn transfer(
        env: Env,
        caller: Address,
        amount: i128,
        recipient: Address,
        asset: Address,
    ) -> u64 {
        caller.require_auth();
        Self::require_signer(&env, &caller);

        if amount <= 0 {
            panic_with_error!(&env, MultisigError::ZeroAmount);
        }
        if Self::is_zero_address(&env, &recipient) {
            panic_with_error!(&env, MultisigError::ZeroAddress);
        }
        if Self::is_zero_address(&env, &asset) {
            panic_with_error!(&env, MultisigError::ZeroAddress);
        }

        let wallet = env.current_contract_address();
        if Asset::new(&env, &asset).balance_of(&wallet) < amount {
            panic_with_error!(&env, MultisigError::InsufficientFunds);
        }

        let id = Self::read::<u64>(&env, &DataKey::TxCount) + 1;
        env.storage().instance().set(&DataKey::TxCount, &id);
        Self::bump_instance(&env);

        let mut approvals = Vec::new(&env);
        approvals.push_back(caller.clone());

        let proposal = TransferProposal {
            id,
            amount,
            recipient: recipient.clone(),
            asset: asset.clone(),
            approvals,
            completed: false,
        };
        Self::save_transaction(&env, &proposal);

        log!(&env, "transfer proposed", id, amount);
        TransferProposed {
            id,
            proposer: caller,
            asset,
            recipient,
            amount,
        }
        .publish(&env);

        id
    }

    /// Adds the caller's approval to transfer proposal `id`.
    ///
    /// The approval that brings the count to the current quorum marks the
    /// proposal completed and then moves the funds. A failing token call
    /// aborts the whole invocation, completion flag included.
    pub fn approve_tx(env: Env, caller: Address, id: u64) {
        caller.require_auth();

        let mut proposal = Self::load_transaction(&env, id);
        Self::require_signer(&env, &caller);

        if proposal.completed {
            panic_with_error!(&env, MultisigError::ApprovalsAlreadyReached);
        }
        if proposal.approvals.contains(&caller) {
            panic_with_error!(&env, MultisigError::AlreadySigned);
        }

        proposal.approvals.push_back(caller.clone());
        let approvals = proposal.approvals.len();
        let quorum: u32 = Self::read(&env, &DataKey::Quorum);

        // Persist completion before the token call.
        proposal.completed = approvals == quorum;
        Self::save_transaction(&env, &proposal);
        Self::bump_instance(&env);

        TxApproved {
            id,
            signer: caller,
            approvals,
        }
        .publish(&env);

        if proposal.completed {
            let wallet = env.current_contract_address();
            Asset::new(&env, &proposal.asset).transfer(
                &wallet,
                &proposal.recipient,
                proposal.amount,
            );

            log!(&env, "transfer executed", id, proposal.amount);
            TxExecuted {
                id,
                asset: proposal.asset,
                recipient: proposal.recipient,
                amount: proposal.amount,
            }
            .publish(&env);
        }
    }

    /// Proposes a new approval quorum. The caller is the first approver.
    pub fn update_quorum(env: Env, caller: Address, new_quorum: u32) -> u64 {
        caller.require_auth();
        Self::require_signer(&env, &caller);

        if new_quorum < MIN_QUORUM {
            panic_with_error!(&env, MultisigError::QuorumTooSmall);
        }
        if new_quorum > Self::read::<u32>(&env, &DataKey::SignerCount) {
            panic_with_error!(&env, MultisigError::QuorumTooBig);
        }

        let id = Self::read::<u64>(&env, &DataKey::QuorumUpdateCount) + 1;
        env.storage().instance().set(&DataKey::QuorumUpdateCount, &id);
        Self::bump_instance(&env);

        let mut approvals = Vec::new(&env);
        approvals.push_back(caller.clone());

        let proposal = QuorumUpdateProposal {
            id,
            proposed_quorum: new_quorum,
            approvals,
            completed: false,
        };
        Self::save_quorum_update(&env, &proposal);

        log!(&env, "quorum update proposed", id, new_quorum);
        QuorumUpdateProposed {
            id,
            proposer: caller,
            proposed_quorum: new_quorum,
        }
        .publish(&env);

        id
    }

    /// Adds the caller's approval to quorum update `id`.
    ///
    /// The threshold is the quorum in force now, not the proposed one.
    pub fn approve_quorum_update(env: Env, caller: Address, id: u64) {
        caller.require_auth();

        let mut proposal = Self::load_quorum_update(&env, id);
        Self::require_signer(&env, &caller);

        if proposal.completed {
            panic_with_error!(&env, MultisigError::AlreadyCompleted);
        }
        if proposal.approvals.contains(&caller) {
            panic_with_error!(&env, MultisigError::AlreadySigned);
        }

        proposal.approvals.push_back(caller.clone());
        let approvals = proposal.approvals.len();
        let quorum: u32 = Self::read(&env, &DataKey::Quorum);

        proposal.completed = approvals == quorum;
        Self::save_quorum_update(&env, &proposal);
        Self::bump_instance(&env);

        QuorumUpdateApproved {
            id,
            signer: caller,
            approvals,
        }
        .publish(&env);

        if proposal.completed {
            env.storage()
                .instance()
                .set(&DataKey::Quorum, &proposal.proposed_quorum);

            log!(&env, "quorum updated", quorum, proposal.proposed_quorum);
            QuorumUpdated {
                id,
                old_quorum: quorum,
                new_quorum: proposal.proposed_quorum,
            }
            .publish(&env);
        }
    }

    pub fn quorum(env: Env) -> u32 {
        Self::read(&env, &DataKey::Quorum)
    }

    pub fn signer_count(env: Env) -> u32 {
        Self::read(&env, &DataKey::SignerCount)
    }

    pub fn tx_count(env: Env) -> u64 {
        Self::read(&env, &DataKey::TxCount)
    }

    pub fn quorum_update_count(env: Env) -> u64 {
        Self::read(&env, &DataKey::QuorumUpdateCount)
    }

    pub fn is_valid_signer(env: Env, signer: Address) -> bool {
        Self::is_signer(&env, &signer)
    }

    /// Signers in the order they were registered at creation.
    pub fn signers(env: Env) -> Vec<Address> {
        Self::read(&env, &DataKey::Signers)
    }

    pub fn get_transaction(env: Env, id: u64) -> TransferProposal {
        Self::load_transaction(&env, id)
    }

    pub fn get_quorum_update(env: Env, id: u64) -> QuorumUpdateProposal {
        Self::load_quorum_update(&env, id)
    }

    pub fn has_approved_tx(env: Env, id: u64, signer: Address) -> bool {
        Self::load_transaction(&env, id).approvals.contains(&signer)
    }

    pub fn has_approved_quorum_update(env: Env, id: u64, signer: Address) -> bool {
        Self::load_quorum_update(&env, id).approvals.contains(&signer)
    }
}

impl MultiSigContract {
    fn read<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> V {
        env.storage()
            .instance()
            .get(key)
            .unwrap_or_else(|| panic_with_error!(env, MultisigError::NotInitialized))
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    fn is_signer(env: &Env, account: &Address) -> bool {
        env.storage()
            .instance()
            .has(&DataKey::Signer(account.clone()))
    }

    fn require_signer(env: &Env, account: &Address) {
        if !Self::is_signer(env, account) {
            panic_with_error!(env, MultisigError::NotASigner);
        }
    }

    fn is_zero_address(env: &Env, address: &Address) -> bool {
        *address == Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
            || *address == Address::from_string(&String::from_str(env, ZERO_CONTRACT))
    }

    fn load_transaction(env: &Env, id: u64) -> TransferProposal {
        let count: u64 = Self::read(env, &DataKey::TxCount);
        if id == 0 || id > count {
            panic_with_error!(env, MultisigError::InvalidTxId);
        }
        env.storage()
            .persistent()
            .get(&DataKey::Transaction(id))
            .unwrap_or_else(|| panic_with_error!(env, MultisigError::InvalidTxId))
    }

    fn save_transaction(env: &Env, proposal: &TransferProposal) {
        let key = DataKey::Transaction(proposal.id);
        env.storage().persistent().set(&key, proposal);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    fn load_quorum_update(env: &Env, id: u64) -> QuorumUpdateProposal {
        let count: u64 = Self::read(env, &DataKey::QuorumUpdateCount);
        if id == 0 || id > count {
            panic_with_error!(env, MultisigError::InvalidTxId);
        }
        env.storage()
            .persistent()
            .get(&DataKey::QuorumUpdate(id))
            .unwrap_or_else(|| panic_with_error!(env, MultisigError::InvalidTxId))
    }

    fn save_quorum_update(env: &Env, proposal: &QuorumUpdateProposal) {
        let key = DataKey::QuorumUpdate(proposal.id);
        env.storage().persistent().set(&key, proposal);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }
}
