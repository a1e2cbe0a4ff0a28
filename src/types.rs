use soroban_sdk::{contracttype, Address, BytesN};

/// ECDSA-style signature components forwarded untouched to the token's
/// `permit` entry point.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermitSignature {
    pub v: u32,
    pub r: BytesN<32>,
    pub s: BytesN<32>,
}

/// A single maintainer-submitted swap. Not persisted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapRequest {
    /// Token the user signed the permit for; swapped into the base asset.
    pub token: Address,
    pub fee_tier: u32,
    /// Must equal the `value` the permit was signed over.
    pub amount_in: i128,
    pub min_amount_out: i128,
    /// Zero means no price limit.
    pub sqrt_price_limit_x96: u128,
    pub user: Address,
    /// Recorded in the `SwapExecuted` event only; never paid.
    pub referrer: Address,
    /// Unix seconds; shared by the permit and the router call.
    pub deadline: u64,
    pub signature: PermitSignature,
}

/// Outcome of a completed swap, returned to the caller and published as
/// the `SwapExecuted` event payload.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapReceipt {
    pub user: Address,
    pub maintainer: Address,
    pub token: Address,
    pub amount_in: i128,
    pub proceeds: i128,
    pub user_share: i128,
    pub maintainer_share: i128,
    pub treasury_share: i128,
    pub referrer: Address,
}
