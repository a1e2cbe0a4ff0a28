// Topics stay tuple-shaped: (name, addresses..) with the payload as data.
#![allow(deprecated)]

use soroban_sdk::{Address, Env, Symbol};

use crate::types::SwapReceipt;

pub fn maintainer_set(env: &Env, maintainer: &Address, enabled: bool) {
    env.events().publish(
        (Symbol::new(env, "maintainer_set"), maintainer.clone()),
        enabled,
    );
}

pub fn swap_executed(env: &Env, receipt: &SwapReceipt) {
    env.events().publish(
        (
            Symbol::new(env, "swap_executed"),
            receipt.user.clone(),
            receipt.maintainer.clone(),
        ),
        receipt.clone(),
    );
}

pub fn treasury_withdrawn(env: &Env, destination: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "treasury_withdrawn"), destination.clone()),
        amount,
    );
}

pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "ownership_transferred"), previous.clone()),
        new_owner.clone(),
    );
}
