//! Error types for the vDPP issuance ledger.

use {
    crate::access::Role,
    num_derive::{FromPrimitive, ToPrimitive},
    thiserror::Error,
};

/// Every way a ledger operation can fail.
///
/// A failed operation never leaves partial state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // ── Authority / access ───────────────────────────────────────────────
    /// The caller does not hold the role the operation requires.
    #[error("{}", .role.denial())]
    Unauthorized { role: Role },

    /// Ownership cannot be handed to the all-zero identity.
    #[error("New owner is the zero address")]
    InvalidOwner,

    // ── Issuance policy ──────────────────────────────────────────────────
    /// Minting `requested` would push total supply above the global cap.
    #[error("Cap exceeded: minting {requested} on top of {total_supply} exceeds cap {cap}")]
    CapExceeded {
        requested: u128,
        total_supply: u128,
        cap: u128,
    },

    /// Minting `requested` through the treasury channel would push
    /// cumulative treasury issuance above its sub-cap.
    #[error(
        "Exceeds treasury allocation: minting {requested} on top of {treasury_minted} \
         exceeds {max_treasury_supply}"
    )]
    TreasuryCapExceeded {
        requested: u128,
        treasury_minted: u128,
        max_treasury_supply: u128,
    },

    // ── Transfers ────────────────────────────────────────────────────────
    #[error("Insufficient balance: {available} available, {requested} requested")]
    InsufficientBalance { available: u128, requested: u128 },

    #[error("Insufficient allowance: {available} approved, {requested} requested")]
    InsufficientAllowance { available: u128, requested: u128 },

    /// A balance would exceed `u128::MAX`. Unreachable while the supply
    /// invariants hold, since every balance is at most `cap`.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    // ── Configuration / encoding ─────────────────────────────────────────
    #[error("Invalid ledger configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Ledger state data is invalid or corrupted")]
    InvalidAccountData,

    #[error("Instruction data is invalid")]
    InvalidInstructionData,
}

/// Stable numeric codes for [`LedgerError`], exposed by the instruction
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum LedgerErrorCode {
    Unauthorized = 0,
    InvalidOwner = 1,
    CapExceeded = 2,
    TreasuryCapExceeded = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    ArithmeticOverflow = 6,
    InvalidConfig = 7,
    InvalidAccountData = 8,
    InvalidInstructionData = 9,
}

impl LedgerError {
    pub fn code(&self) -> LedgerErrorCode {
        match self {
            Self::Unauthorized { .. } => LedgerErrorCode::Unauthorized,
            Self::InvalidOwner => LedgerErrorCode::InvalidOwner,
            Self::CapExceeded { .. } => LedgerErrorCode::CapExceeded,
            Self::TreasuryCapExceeded { .. } => LedgerErrorCode::TreasuryCapExceeded,
            Self::InsufficientBalance { .. } => LedgerErrorCode::InsufficientBalance,
            Self::InsufficientAllowance { .. } => LedgerErrorCode::InsufficientAllowance,
            Self::ArithmeticOverflow => LedgerErrorCode::ArithmeticOverflow,
            Self::InvalidConfig { .. } => LedgerErrorCode::InvalidConfig,
            Self::InvalidAccountData => LedgerErrorCode::InvalidAccountData,
            Self::InvalidInstructionData => LedgerErrorCode::InvalidInstructionData,
        }
    }
}
