use soroban_sdk::{log, Address, Env, String};

use crate::errors::SwapError;
use crate::storage;

/// The strkey of the all-zero account, used as the "no address" sentinel.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    let zero_address = Address::from_string(&String::from_str(env, ZERO_ACCOUNT));
    address == &zero_address
}

/// Authenticates `caller` and checks it is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), SwapError> {
    caller.require_auth();
    if *caller != storage::get_owner(env) {
        log!(env, "caller is not owner", caller.clone());
        return Err(SwapError::Unauthorized);
    }
    Ok(())
}

/// Authenticates `caller` and checks it holds an enabled maintainer flag.
pub fn require_maintainer(env: &Env, caller: &Address) -> Result<(), SwapError> {
    caller.require_auth();
    if !storage::get_maintainer(env, caller) {
        log!(env, "Not maintainer", caller.clone());
        return Err(SwapError::Unauthorized);
    }
    storage::extend_maintainer_ttl(env, caller);
    Ok(())
}
