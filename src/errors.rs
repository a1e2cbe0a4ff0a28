use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapError {
    /// Caller does not hold the role the entry point requires.
    Unauthorized = 1,
    /// Zero address, negative amount, or otherwise malformed input.
    InvalidArgument = 2,
    Expired = 3,
    /// The token refused to redeem the permit signature.
    PermitRejected = 4,
    /// The router rejected the trade or delivered less than the minimum.
    SwapFailed = 5,
    InsufficientTreasury = 6,
    /// A token transfer, pull, or approval was rejected.
    TransferFailed = 7,
    ArithmeticOverflow = 8,
}
