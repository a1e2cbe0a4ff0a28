use soroban_sdk::{contractclient, contracttype, log, Address, Env};

use crate::errors::SwapError;

/// Single-pool exact-input swap parameters, mirroring the V3-style router
/// `exactInputSingle` call. `sender` is the account the router pulls
/// `token_in` from using the allowance it was granted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExactInputSingleParams {
    pub amount_in: i128,
    pub amount_out_minimum: i128,
    pub deadline: u64,
    pub fee: u32,
    pub recipient: Address,
    pub sender: Address,
    pub sqrt_price_limit_x96: u128,
    pub token_in: Address,
    pub token_out: Address,
}

#[allow(dead_code)]
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    fn exact_input_single(env: Env, params: ExactInputSingleParams) -> i128;
}

/// Runs the swap and returns the amount the router reported. The router
/// guarantees `amount_out >= amount_out_minimum` or fails the call.
pub fn swap_exact_input(
    env: &Env,
    router: &Address,
    params: &ExactInputSingleParams,
) -> Result<i128, SwapError> {
    match SwapRouterClient::new(env, router).try_exact_input_single(params) {
        Ok(Ok(amount_out)) => Ok(amount_out),
        _ => {
            log!(
                env,
                "router swap failed",
                params.token_in.clone(),
                params.fee,
                params.amount_in,
                params.amount_out_minimum
            );
            Err(SwapError::SwapFailed)
        }
    }
}
