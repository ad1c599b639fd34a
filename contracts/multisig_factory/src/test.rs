#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, vec, Address, BytesN, Env, Error};

fn create_factory<'a>(env: &Env) -> MultisigFactoryClient<'a> {
    let wasm_hash = BytesN::from_array(env, &[7u8; 32]);
    let contract_id = env.register(MultisigFactory, (wasm_hash,));
    MultisigFactoryClient::new(env, &contract_id)
}

#[test]
fn test_constructor_stores_wasm_hash() {
    let env = Env::default();
    let client = create_factory(&env);

    assert_eq!(client.wallet_wasm_hash(), BytesN::from_array(&env, &[7u8; 32]));
    assert_eq!(client.get_clones().len(), 0);
    assert_eq!(client.clone_count(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_create_multisig_quorum_too_small() {
    let env = Env::default();
    env.mock_all_auths();
    let client = create_factory(&env);

    let creator = Address::generate(&env);
    let signers = vec![&env, Address::generate(&env), Address::generate(&env)];
    client.create_multisig(&creator, &1, &signers);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_create_multisig_quorum_too_big() {
    let env = Env::default();
    env.mock_all_auths();
    let client = create_factory(&env);

    let creator = Address::generate(&env);
    let signers = vec![&env, Address::generate(&env), Address::generate(&env)];
    client.create_multisig(&creator, &3, &signers);
}

#[test]
fn test_rejected_creation_records_nothing() {
    let env = Env::default();
    env.mock_all_auths();
    let client = create_factory(&env);

    let creator = Address::generate(&env);
    let signers = vec![&env, Address::generate(&env), Address::generate(&env)];

    assert_eq!(
        client.try_create_multisig(&creator, &1, &signers),
        Err(Ok(Error::from_contract_error(
            FactoryError::QuorumTooSmall as u32
        )))
    );
    assert_eq!(
        client.try_create_multisig(&creator, &3, &signers),
        Err(Ok(Error::from_contract_error(
            FactoryError::QuorumTooBig as u32
        )))
    );
    assert_eq!(client.clone_count(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_get_clone_out_of_range() {
    let env = Env::default();
    let client = create_factory(&env);

    client.get_clone(&0);
}
