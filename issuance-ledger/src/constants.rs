//! Constants for the vDPP issuance ledger.
//!
//! All supply figures are expressed in **base units**. One display token is
//! `10^DECIMALS` base units.

/// Number of decimal places of the display unit.
pub const DECIMALS: u8 = 18;

/// Base units in one whole token (`10^18`).
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Global issuance ceiling used when no explicit cap is configured.
///
/// 100 M tokens.
pub const DEFAULT_CAP: u128 = 100_000_000 * ONE_TOKEN;

/// Ceiling on cumulative treasury-channel issuance (initial allocation
/// included).
///
/// 20 M tokens.
pub const MAX_TREASURY_SUPPLY: u128 = 20_000_000 * ONE_TOKEN;

/// Treasury allocation minted to the deployer at construction.
///
/// 2 M tokens.
pub const INITIAL_TREASURY_ALLOCATION: u128 = 2_000_000 * ONE_TOKEN;

/// An allowance of this size is never decremented by `transfer_from`.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

/// Upper bound on the size of a single encoded instruction.
pub const MAX_INSTRUCTION_DATA_LEN: u64 = 1_232;

/// Largest supported `decimals`; `10^38` is the last power of ten below
/// `u128::MAX`.
pub const MAX_DECIMALS: u8 = 38;

/// Default token name.
pub const DEFAULT_NAME: &str = "Virtual Desired Price Pool";

/// Default token symbol.
pub const DEFAULT_SYMBOL: &str = "vDPP";

/// Scale a whole-token amount to base units, `None` on overflow.
pub const fn tokens(whole: u128) -> Option<u128> {
    whole.checked_mul(ONE_TOKEN)
}
