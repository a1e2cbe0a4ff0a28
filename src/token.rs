//! Client for the tokens the engine touches: the permit-capable input
//! token and the base asset. Both speak the SEP-41 subset below; only the
//! input token needs `permit`.

use soroban_sdk::{contractclient, log, Address, BytesN, Env};

use crate::errors::SwapError;

#[allow(dead_code)]
#[contractclient(name = "TokenClient")]
pub trait TokenInterface {
    fn permit(
        env: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
        v: u32,
        r: BytesN<32>,
        s: BytesN<32>,
    );
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn balance(env: Env, id: Address) -> i128;
}

/// Moves `amount` of `token` from `from` into the engine using an
/// allowance previously granted to the engine.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), SwapError> {
    let this = env.current_contract_address();
    match TokenClient::new(env, token).try_transfer_from(&this, from, &this, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "pull failed", token.clone(), from.clone(), amount);
            Err(SwapError::TransferFailed)
        }
    }
}

/// Grants `spender` an allowance over the engine's `token` that expires
/// with the current ledger.
pub fn approve(env: &Env, token: &Address, spender: &Address, amount: i128) -> Result<(), SwapError> {
    let this = env.current_contract_address();
    let expiration_ledger = env.ledger().sequence();
    match TokenClient::new(env, token).try_approve(&this, spender, &amount, &expiration_ledger) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "approve failed", token.clone(), spender.clone(), amount);
            Err(SwapError::TransferFailed)
        }
    }
}

/// Pays `amount` of `token` out of the engine. Zero amounts are a no-op.
pub fn pay(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), SwapError> {
    if amount == 0 {
        return Ok(());
    }
    let this = env.current_contract_address();
    match TokenClient::new(env, token).try_transfer(&this, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "payout failed", token.clone(), to.clone(), amount);
            Err(SwapError::TransferFailed)
        }
    }
}

pub fn balance(env: &Env, token: &Address) -> i128 {
    TokenClient::new(env, token).balance(&env.current_contract_address())
}
