//! Transfer engine: direct transfers and allowance-based `transfer_from`.
//!
//! Transfers never consult the issuance policy; they move existing value and
//! leave total supply unchanged.

use {
    crate::{constants::UNLIMITED_ALLOWANCE, error::LedgerError, store::LedgerStore},
    solana_pubkey::Pubkey,
    std::collections::BTreeMap,
};

/// Spending approvals keyed by `(holder, spender)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allowances {
    approvals: BTreeMap<(Pubkey, Pubkey), u128>,
}

impl Allowances {
    pub(crate) fn from_map(approvals: BTreeMap<(Pubkey, Pubkey), u128>) -> Self {
        Self { approvals }
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<(Pubkey, Pubkey), u128> {
        &self.approvals
    }

    /// Amount `spender` may still move out of `holder`'s balance.
    pub fn allowance(&self, holder: &Pubkey, spender: &Pubkey) -> u128 {
        self.approvals
            .get(&(*holder, *spender))
            .copied()
            .unwrap_or(0)
    }

    /// Overwrite the approval. Zero removes the entry.
    pub fn approve(&mut self, holder: &Pubkey, spender: &Pubkey, amount: u128) {
        if amount == 0 {
            self.approvals.remove(&(*holder, *spender));
        } else {
            self.approvals.insert((*holder, *spender), amount);
        }
    }

    /// Approval left after `spender` moves `amount`, or
    /// `InsufficientAllowance`. Unlimited approvals stay unlimited.
    fn check_spend(&self, holder: &Pubkey, spender: &Pubkey, amount: u128) -> Result<u128, LedgerError> {
        let available = self.allowance(holder, spender);
        if available == UNLIMITED_ALLOWANCE {
            return Ok(available);
        }
        available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientAllowance {
                available,
                requested: amount,
            })
    }
}

/// Move `amount` from `from` to `to`.
pub fn transfer(
    store: &mut LedgerStore,
    from: &Pubkey,
    to: &Pubkey,
    amount: u128,
) -> Result<(), LedgerError> {
    store.move_balance(from, to, amount)
}

/// Move `amount` from `from` to `to` on behalf of `spender`, consuming
/// `spender`'s allowance. Allowance and balance are both checked before either
/// is written.
pub fn transfer_from(
    store: &mut LedgerStore,
    allowances: &mut Allowances,
    spender: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
    amount: u128,
) -> Result<(), LedgerError> {
    let remaining = allowances.check_spend(from, spender, amount)?;
    store.move_balance(from, to, amount)?;
    allowances.approve(from, spender, remaining);
    Ok(())
}
