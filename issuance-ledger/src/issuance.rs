//! Issuance policy: the three mint channels.
//!
//! | Channel    | Authority | Bounds                                  | Counter           |
//! |------------|-----------|-----------------------------------------|-------------------|
//! | Admin      | owner     | global cap                              | none              |
//! | Treasury   | owner     | `max_treasury_supply`, then global cap  | `treasury_minted` |
//! | LP rewards | hook      | global cap                              | `lp_minted`       |
//!
//! A mint is first turned into a [`MintPlan`] against the current state.
//! Planning reads only; committing a plan writes only. A rejected mint
//! therefore never touches a balance or a counter.

use {
    crate::{
        access::{AccessControl, Role},
        error::LedgerError,
        store::LedgerStore,
    },
    solana_pubkey::Pubkey,
    std::fmt,
};

/// Which mint entry point an issuance goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintChannel {
    Admin,
    Treasury,
    LpRewards,
}

impl MintChannel {
    /// Role a caller must hold to use this channel.
    pub fn required_role(&self) -> Role {
        match self {
            MintChannel::Admin | MintChannel::Treasury => Role::Owner,
            MintChannel::LpRewards => Role::Hook,
        }
    }
}

impl fmt::Display for MintChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MintChannel::Admin => write!(f, "admin"),
            MintChannel::Treasury => write!(f, "treasury"),
            MintChannel::LpRewards => write!(f, "lp-rewards"),
        }
    }
}

/// Cumulative per-channel issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IssuanceCounters {
    /// Treasury issuance including the genesis allocation. Never exceeds
    /// `max_treasury_supply`.
    pub treasury_minted: u128,
    /// LP-reward issuance. Informational; only the global cap bounds it.
    pub lp_minted: u128,
    /// Sub-cap on `treasury_minted`, fixed at construction.
    pub max_treasury_supply: u128,
}

impl IssuanceCounters {
    pub fn new(max_treasury_supply: u128) -> Self {
        Self {
            treasury_minted: 0,
            lp_minted: 0,
            max_treasury_supply,
        }
    }

    pub fn treasury_remaining(&self) -> u128 {
        self.max_treasury_supply.saturating_sub(self.treasury_minted)
    }
}

/// A fully validated mint, ready to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintPlan {
    pub channel: MintChannel,
    pub to: Pubkey,
    pub amount: u128,
    pub new_total_supply: u128,
    pub new_balance: u128,
    /// Value of the channel's counter after the mint; `None` for the admin
    /// channel, which keeps no counter.
    pub new_channel_minted: Option<u128>,
}

/// Validate a mint of `amount` to `to` through `channel` by `caller`.
///
/// Checks run in a fixed order: authority, treasury sub-cap (treasury channel
/// only), global cap, recipient balance overflow.
pub fn plan_mint(
    access: &AccessControl,
    store: &LedgerStore,
    counters: &IssuanceCounters,
    caller: &Pubkey,
    channel: MintChannel,
    to: &Pubkey,
    amount: u128,
) -> Result<MintPlan, LedgerError> {
    access.check(caller, channel.required_role())?;

    let new_channel_minted = match channel {
        MintChannel::Admin => None,
        MintChannel::Treasury => Some(
            counters
                .treasury_minted
                .checked_add(amount)
                .filter(|minted| *minted <= counters.max_treasury_supply)
                .ok_or(LedgerError::TreasuryCapExceeded {
                    requested: amount,
                    treasury_minted: counters.treasury_minted,
                    max_treasury_supply: counters.max_treasury_supply,
                })?,
        ),
        // lp_minted <= total_supply, so this only fails if the global check would.
        MintChannel::LpRewards => Some(counters.lp_minted.checked_add(amount).ok_or(
            LedgerError::CapExceeded {
                requested: amount,
                total_supply: store.total_supply(),
                cap: store.cap(),
            },
        )?),
    };

    let new_total_supply = store.check_mint(amount)?;
    let new_balance = store.check_credit(to, amount)?;

    Ok(MintPlan {
        channel,
        to: *to,
        amount,
        new_total_supply,
        new_balance,
        new_channel_minted,
    })
}

/// Apply a plan produced by [`plan_mint`] against the same state.
pub(crate) fn commit_mint(
    store: &mut LedgerStore,
    counters: &mut IssuanceCounters,
    plan: &MintPlan,
) -> Result<(), LedgerError> {
    store.credit(&plan.to, plan.amount)?;
    match (plan.channel, plan.new_channel_minted) {
        (MintChannel::Treasury, Some(minted)) => counters.treasury_minted = minted,
        (MintChannel::LpRewards, Some(minted)) => counters.lp_minted = minted,
        _ => {}
    }
    debug_assert_eq!(store.total_supply(), plan.new_total_supply);
    Ok(())
}
