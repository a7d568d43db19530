//! # vDPP Issuance Ledger
//!
//! A single-asset token ledger with a hard global issuance ceiling and three
//! independently gated mint channels:
//!
//! | Channel         | Authority | Bounded by                          |
//! |-----------------|-----------|-------------------------------------|
//! | `mint_admin`    | owner     | global cap                          |
//! | `mint_treasury` | owner     | treasury sub-cap, then global cap   |
//! | `mint_lp_rewards` | hook    | global cap                          |
//!
//! The deployer becomes the owner and receives the genesis treasury
//! allocation. The owner may later designate a hook (the Desired Price Pool
//! hook) that is the only identity allowed to mint LP rewards.
//!
//! Every operation is all-or-nothing: a rejected call leaves balances,
//! counters and roles exactly as they were.
//!
//! ## Quick start
//!
//! ```rust
//! use {
//!     solana_pubkey::Pubkey,
//!     vdpp_issuance_ledger::{constants::ONE_TOKEN, IssuanceLedger, LedgerConfig, LedgerError},
//! };
//!
//! let deployer = Pubkey::new_unique();
//! let hook = Pubkey::new_unique();
//! let lp = Pubkey::new_unique();
//!
//! let mut ledger = IssuanceLedger::new(LedgerConfig::default(), deployer).unwrap();
//! assert_eq!(ledger.treasury_minted(), 2_000_000 * ONE_TOKEN);
//!
//! ledger.set_hook(&deployer, hook).unwrap();
//! ledger.mint_lp_rewards(&hook, &lp, 1_000 * ONE_TOKEN).unwrap();
//! assert_eq!(ledger.lp_minted(), 1_000 * ONE_TOKEN);
//!
//! // Only the hook may mint rewards.
//! assert!(matches!(
//!     ledger.mint_lp_rewards(&deployer, &lp, 1),
//!     Err(LedgerError::Unauthorized { .. })
//! ));
//! ```
//!
//! See [`issuance`] for the mint policy and [`processor`] for the
//! instruction surface.

#![cfg_attr(test, allow(clippy::arithmetic_side_effects))]

pub mod access;
pub mod config;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod issuance;
pub mod ledger;
pub mod processor;
pub mod shared;
pub mod state;
pub mod store;
pub mod transfer;


// Re-exports for convenience.
pub use access::Role;
pub use config::LedgerConfig;
pub use error::{LedgerError, LedgerErrorCode};
pub use instruction::LedgerInstruction;
pub use issuance::MintChannel;
pub use ledger::IssuanceLedger;
pub use shared::SharedLedger;
pub use state::LedgerState;
