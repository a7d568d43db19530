use {
    crate::{
        constants::{
            DECIMALS, DEFAULT_CAP, DEFAULT_NAME, DEFAULT_SYMBOL, INITIAL_TREASURY_ALLOCATION,
            MAX_DECIMALS, MAX_TREASURY_SUPPLY,
        },
        error::LedgerError,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Construction parameters for an [`IssuanceLedger`](crate::IssuanceLedger).
///
/// Every field is fixed for the lifetime of the ledger:
/// - `cap` bounds total supply across all mint channels.
/// - `max_treasury_supply` bounds cumulative treasury issuance, the genesis
///   allocation included.
/// - `initial_treasury_allocation` is minted to the deployer at construction
///   and counted as treasury issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct LedgerConfig {
    /// Human-readable token name.
    pub name: String,

    /// Ticker symbol.
    pub symbol: String,

    /// Display decimals. The ledger itself only works in base units.
    pub decimals: u8,

    /// Global issuance ceiling in base units.
    pub cap: u128,

    /// Ceiling on cumulative treasury issuance in base units.
    pub max_treasury_supply: u128,

    /// Treasury tokens minted to the deployer at construction.
    pub initial_treasury_allocation: u128,
}

impl LedgerConfig {
    /// Base units in one display token, `None` if `decimals` is out of range.
    #[inline]
    pub fn one_token(&self) -> Option<u128> {
        10u128.checked_pow(u32::from(self.decimals))
    }

    /// Config with the default metadata and treasury sub-cap but an explicit
    /// global cap and genesis allocation.
    pub fn with_supply(initial_treasury_allocation: u128, cap: u128) -> Self {
        Self {
            cap,
            initial_treasury_allocation,
            ..Self::default()
        }
    }
}

impl Default for LedgerConfig {
    /// vDPP genesis parameters.
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            decimals: DECIMALS,
            cap: DEFAULT_CAP,                                 // 100 M tokens
            max_treasury_supply: MAX_TREASURY_SUPPLY,         // 20 M tokens
            initial_treasury_allocation: INITIAL_TREASURY_ALLOCATION, // 2 M tokens
        }
    }
}

/// Validate that a `LedgerConfig` is internally consistent.
pub fn validate_config(config: &LedgerConfig) -> Result<(), LedgerError> {
    if config.cap == 0 {
        return Err(LedgerError::InvalidConfig {
            reason: "cap must be > 0".to_string(),
        });
    }
    if config.initial_treasury_allocation > config.max_treasury_supply {
        return Err(LedgerError::InvalidConfig {
            reason: format!(
                "initial_treasury_allocation ({}) > max_treasury_supply ({})",
                config.initial_treasury_allocation, config.max_treasury_supply
            ),
        });
    }
    if config.initial_treasury_allocation > config.cap {
        return Err(LedgerError::InvalidConfig {
            reason: format!(
                "initial_treasury_allocation ({}) > cap ({})",
                config.initial_treasury_allocation, config.cap
            ),
        });
    }
    if config.decimals > MAX_DECIMALS {
        return Err(LedgerError::InvalidConfig {
            reason: format!("decimals ({}) must be 0–{MAX_DECIMALS}", config.decimals),
        });
    }
    if config.symbol.is_empty() {
        return Err(LedgerError::InvalidConfig {
            reason: "symbol must not be empty".to_string(),
        });
    }
    Ok(())
}
