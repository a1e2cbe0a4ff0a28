//! Basis-point partition of swap proceeds.
//!
//! The user and maintainer shares are floored; the treasury takes
//! whatever is left, so the three shares always add back up to the
//! proceeds exactly.

use crate::errors::SwapError;

pub const BPS_DENOMINATOR: i128 = 10_000;
pub const USER_SHARE_BPS: i128 = 9_700;
pub const MAINTAINER_SHARE_BPS: i128 = 150;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Split {
    pub user: i128,
    pub maintainer: i128,
    pub treasury: i128,
}

fn share_of(amount: i128, bps: i128) -> Result<i128, SwapError> {
    amount
        .checked_mul(bps)
        .and_then(|scaled| scaled.checked_div(BPS_DENOMINATOR))
        .ok_or(SwapError::ArithmeticOverflow)
}

pub fn split_proceeds(proceeds: i128) -> Result<Split, SwapError> {
    if proceeds < 0 {
        return Err(SwapError::InvalidArgument);
    }

    let user = share_of(proceeds, USER_SHARE_BPS)?;
    let maintainer = share_of(proceeds, MAINTAINER_SHARE_BPS)?;
    let treasury = proceeds
        .checked_sub(user)
        .and_then(|rest| rest.checked_sub(maintainer))
        .ok_or(SwapError::ArithmeticOverflow)?;

    Ok(Split {
        user,
        maintainer,
        treasury,
    })
}
