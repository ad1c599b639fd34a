use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, BytesN, Env, TryFromVal, Val, Vec,
};

use crate::errors::FactoryError;
use crate::events::MultisigCreated;
use crate::types::DataKey;

const DAY_IN_LEDGERS: u32 = 17_280;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contract]
pub struct MultisigFactory;

#[contractimpl]
impl MultisigFactory {
    /// `wallet_wasm_hash` is the uploaded multisig wallet code every clone
    /// is deployed from.
    pub fn __constructor(env: Env, wallet_wasm_hash: BytesN<32>) {
        let storage = env.storage().instance();
        storage.set(&DataKey::WalletWasmHash, &wallet_wasm_hash);
        storage.set(&DataKey::Clones, &Vec::<Address>::new(&env));
        Self::bump_instance(&env);
    }

    /// Deploys a new multisig wallet and records it.
    ///
    /// The quorum is checked against `signers` as given; the wallet itself
    /// then adds `creator` to its signer set. Returns the wallet address and
    /// its position in [`Self::get_clones`].
    pub fn create_multisig(
        env: Env,
        creator: Address,
        quorum: u32,
        signers: Vec<Address>,
    ) -> (Address, u32) {
        creator.require_auth();

        if quorum <= 1 {
            panic_with_error!(&env, FactoryError::QuorumTooSmall);
        }
        if quorum > signers.len() {
            panic_with_error!(&env, FactoryError::QuorumTooBig);
        }

        let wasm_hash: BytesN<32> = Self::read(&env, &DataKey::WalletWasmHash);
        let mut clones: Vec<Address> = Self::read(&env, &DataKey::Clones);
        let index = clones.len();

        let mut salt = [0u8; 32];
        salt[..4].copy_from_slice(&index.to_be_bytes());

        let wallet = env
            .deployer()
            .with_current_contract(BytesN::from_array(&env, &salt))
            .deploy_v2(wasm_hash, (creator.clone(), quorum, signers));

        clones.push_back(wallet.clone());
        env.storage().instance().set(&DataKey::Clones, &clones);
        Self::bump_instance(&env);

        log!(&env, "multisig created", index, quorum);
        MultisigCreated {
            creator,
            wallet: wallet.clone(),
            index,
            quorum,
        }
        .publish(&env);

        (wallet, index)
    }

    pub fn get_clones(env: Env) -> Vec<Address> {
        Self::read(&env, &DataKey::Clones)
    }

    pub fn get_clone(env: Env, index: u32) -> Address {
        let clones: Vec<Address> = Self::read(&env, &DataKey::Clones);
        clones
            .get(index)
            .unwrap_or_else(|| panic_with_error!(&env, FactoryError::IndexOutOfRange))
    }

    pub fn clone_count(env: Env) -> u32 {
        Self::read::<Vec<Address>>(&env, &DataKey::Clones).len()
    }

    pub fn wallet_wasm_hash(env: Env) -> BytesN<32> {
        Self::read(&env, &DataKey::WalletWasmHash)
    }
}

impl MultisigFactory {
    fn read<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> V {
        env.storage()
            .instance()
            .get(key)
            .unwrap_or_else(|| panic_with_error!(env, FactoryError::NotInitialized))
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }
}
