use soroban_sdk::Env;

use crate::errors::SwapError;
use crate::storage;

/// Adds a swap's retained share to the treasury.
pub fn credit(env: &Env, amount: i128) -> Result<i128, SwapError> {
    let balance = storage::get_treasury(env)
        .checked_add(amount)
        .ok_or(SwapError::ArithmeticOverflow)?;
    storage::set_treasury(env, balance);
    Ok(balance)
}

/// Removes `amount` from the treasury; the balance never goes negative.
pub fn debit(env: &Env, amount: i128) -> Result<i128, SwapError> {
    if amount < 0 {
        return Err(SwapError::InvalidArgument);
    }
    let current = storage::get_treasury(env);
    if amount > current {
        return Err(SwapError::InsufficientTreasury);
    }
    let balance = current - amount;
    storage::set_treasury(env, balance);
    Ok(balance)
}
