use soroban_sdk::{log, Address, Env};

use crate::errors::SwapError;
use crate::token::TokenClient;
use crate::types::PermitSignature;

/// Hands the signed permit to `token` so that `spender` receives an
/// allowance of `value` from `owner`.
///
/// Signature, nonce and deadline validation belong to the token. Any
/// rejection surfaces as [`SwapError::PermitRejected`].
pub fn redeem(
    env: &Env,
    token: &Address,
    owner: &Address,
    spender: &Address,
    value: i128,
    deadline: u64,
    signature: &PermitSignature,
) -> Result<(), SwapError> {
    let client = TokenClient::new(env, token);
    match client.try_permit(
        owner,
        spender,
        &value,
        &deadline,
        &signature.v,
        &signature.r,
        &signature.s,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "permit rejected", token.clone(), owner.clone(), value, deadline);
            Err(SwapError::PermitRejected)
        }
    }
}
