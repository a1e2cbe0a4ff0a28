#![no_std]

#[cfg(test)]
extern crate std;

mod access;
mod errors;
mod events;
mod permit;
mod router;
mod split;
mod storage;
mod token;
mod treasury;
mod types;


use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env};

pub use crate::errors::SwapError;
pub use crate::router::ExactInputSingleParams;
pub use crate::storage::Config;
pub use crate::types::{PermitSignature, SwapReceipt, SwapRequest};

use crate::access::{is_zero_address, require_maintainer, require_owner};
use crate::split::split_proceeds;

#[contract]
pub struct PermitSwap;

#[contractimpl]
impl PermitSwap {
    /// Fixes the owner, the swap router and the base asset the engine
    /// sells into. None of them may be the zero account.
    pub fn __constructor(env: Env, owner: Address, router: Address, base_asset: Address) {
        if is_zero_address(&env, &owner)
            || is_zero_address(&env, &router)
            || is_zero_address(&env, &base_asset)
        {
            panic_with_error!(&env, SwapError::InvalidArgument);
        }
        if router == base_asset {
            panic_with_error!(&env, SwapError::InvalidArgument);
        }

        storage::set_owner(&env, &owner);
        storage::set_config(&env, &Config { router, base_asset });
        storage::set_treasury(&env, 0);
        storage::extend_instance_ttl(&env);
    }

    pub fn set_maintainer(
        env: Env,
        caller: Address,
        maintainer: Address,
        enabled: bool,
    ) -> Result<(), SwapError> {
        require_owner(&env, &caller)?;
        storage::extend_instance_ttl(&env);

        storage::set_maintainer(&env, &maintainer, enabled);
        events::maintainer_set(&env, &maintainer, enabled);
        Ok(())
    }

    pub fn is_maintainer(env: Env, maintainer: Address) -> bool {
        storage::get_maintainer(&env, &maintainer)
    }

    /// Redeems the user's permit, swaps the authorized amount for the base
    /// asset and splits the proceeds between the user, the calling
    /// maintainer and the treasury.
    ///
    /// Every check that needs no external call runs first: maintainer
    /// role, non-zero user, deadline, then amounts. Any failure after that
    /// aborts the whole invocation.
    pub fn execute_swap(
        env: Env,
        maintainer: Address,
        request: SwapRequest,
    ) -> Result<SwapReceipt, SwapError> {
        require_maintainer(&env, &maintainer)?;
        if is_zero_address(&env, &request.user) {
            log!(&env, "Zero user");
            return Err(SwapError::InvalidArgument);
        }
        if request.deadline < env.ledger().timestamp() {
            log!(&env, "Expired", request.deadline);
            return Err(SwapError::Expired);
        }
        if request.amount_in <= 0 || request.min_amount_out < 0 {
            return Err(SwapError::InvalidArgument);
        }

        let config = storage::get_config(&env);
        if request.token == config.base_asset {
            return Err(SwapError::InvalidArgument);
        }
        storage::extend_instance_ttl(&env);

        let this = env.current_contract_address();
        permit::redeem(
            &env,
            &request.token,
            &request.user,
            &this,
            request.amount_in,
            request.deadline,
            &request.signature,
        )?;
        token::pull(&env, &request.token, &request.user, request.amount_in)?;
        token::approve(&env, &request.token, &config.router, request.amount_in)?;

        let balance_before = token::balance(&env, &config.base_asset);
        let params = ExactInputSingleParams {
            amount_in: request.amount_in,
            amount_out_minimum: request.min_amount_out,
            deadline: request.deadline,
            fee: request.fee_tier,
            recipient: this.clone(),
            sender: this.clone(),
            sqrt_price_limit_x96: request.sqrt_price_limit_x96,
            token_in: request.token.clone(),
            token_out: config.base_asset.clone(),
        };
        let reported = router::swap_exact_input(&env, &config.router, &params)?;

        // Pay out what actually arrived, not what the router claims.
        let proceeds = token::balance(&env, &config.base_asset)
            .checked_sub(balance_before)
            .ok_or(SwapError::ArithmeticOverflow)?;
        if proceeds < request.min_amount_out {
            log!(&env, "proceeds below minimum", proceeds, reported);
            return Err(SwapError::SwapFailed);
        }

        let shares = split_proceeds(proceeds)?;
        token::pay(&env, &config.base_asset, &request.user, shares.user)?;
        token::pay(&env, &config.base_asset, &maintainer, shares.maintainer)?;
        treasury::credit(&env, shares.treasury)?;

        let receipt = SwapReceipt {
            user: request.user,
            maintainer,
            token: request.token,
            amount_in: request.amount_in,
            proceeds,
            user_share: shares.user,
            maintainer_share: shares.maintainer,
            treasury_share: shares.treasury,
            referrer: request.referrer,
        };
        events::swap_executed(&env, &receipt);
        Ok(receipt)
    }

    /// Sends `amount` of retained base asset to `destination`.
    pub fn withdraw_treasury(
        env: Env,
        caller: Address,
        destination: Address,
        amount: i128,
    ) -> Result<(), SwapError> {
        require_owner(&env, &caller)?;
        if is_zero_address(&env, &destination) {
            return Err(SwapError::InvalidArgument);
        }
        storage::extend_instance_ttl(&env);

        treasury::debit(&env, amount)?;
        let config = storage::get_config(&env);
        token::pay(&env, &config.base_asset, &destination, amount)?;

        events::treasury_withdrawn(&env, &destination, amount);
        Ok(())
    }

    pub fn get_treasury_balance(env: Env) -> i128 {
        storage::get_treasury(&env)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), SwapError> {
        require_owner(&env, &caller)?;
        if is_zero_address(&env, &new_owner) {
            return Err(SwapError::InvalidArgument);
        }
        storage::extend_instance_ttl(&env);

        storage::set_owner(&env, &new_owner);
        events::ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn router(env: Env) -> Address {
        storage::get_config(&env).router
    }

    pub fn base_asset(env: Env) -> Address {
        storage::get_config(&env).base_asset
    }
}
