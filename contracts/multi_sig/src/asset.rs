//! Narrow view of the fungible token a transfer proposal moves.
//!
//! Only the two calls the wallet relies on are exposed. The token contract
//! traps on any failure, which aborts the enclosing wallet invocation.

use soroban_sdk::{token, Address, Env};

pub struct Asset<'a> {
    client: token::TokenClient<'a>,
}

impl<'a> Asset<'a> {
    pub fn new(env: &'a Env, address: &Address) -> Self {
        Self {
            client: token::TokenClient::new(env, address),
        }
    }

    pub fn balance_of(&self, account: &Address) -> i128 {
        self.client.balance(account)
    }

    pub fn transfer(&self, from: &Address, to: &Address, amount: i128) {
        self.client.transfer(from, to, &amount);
    }
}
