//! Balance book and total supply.
//!
//! `credit` and `debit` are crate-private: issuance and transfers validate
//! first and then call them, so the store itself never decides policy. The
//! one rule it does enforce is that a debit cannot exceed the balance.

use {crate::error::LedgerError, solana_pubkey::Pubkey, std::collections::BTreeMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerStore {
    balances: BTreeMap<Pubkey, u128>,
    total_supply: u128,
    cap: u128,
}

impl LedgerStore {
    pub fn new(cap: u128) -> Self {
        Self {
            balances: BTreeMap::new(),
            total_supply: 0,
            cap,
        }
    }

    pub(crate) fn from_parts(balances: BTreeMap<Pubkey, u128>, total_supply: u128, cap: u128) -> Self {
        Self {
            balances,
            total_supply,
            cap,
        }
    }

    /// Balance of `account`; 0 for accounts never credited.
    pub fn balance_of(&self, account: &Pubkey) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn cap(&self) -> u128 {
        self.cap
    }

    /// Non-zero balances, ordered by account.
    pub fn balances(&self) -> impl Iterator<Item = (&Pubkey, &u128)> {
        self.balances.iter()
    }

    /// Number of accounts holding a non-zero balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Headroom left under the global cap.
    pub fn supply_remaining(&self) -> u128 {
        self.cap.saturating_sub(self.total_supply)
    }

    /// Total supply after minting `amount`, or `CapExceeded` if that would
    /// pass the cap (or overflow).
    pub(crate) fn check_mint(&self, amount: u128) -> Result<u128, LedgerError> {
        self.total_supply
            .checked_add(amount)
            .filter(|new_total| *new_total <= self.cap)
            .ok_or(LedgerError::CapExceeded {
                requested: amount,
                total_supply: self.total_supply,
                cap: self.cap,
            })
    }

    /// Balance of `account` after receiving `amount`.
    ///
    /// Every balance is bounded by `total_supply <= cap`, so once
    /// [`check_mint`](Self::check_mint) has passed (or for a transfer of
    /// existing value) this cannot fail on a consistent store. The sum is
    /// still checked rather than wrapped.
    pub(crate) fn check_credit(&self, account: &Pubkey, amount: u128) -> Result<u128, LedgerError> {
        self.balance_of(account)
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)
    }

    /// Balance of `account` after sending `amount`.
    pub(crate) fn check_debit(&self, account: &Pubkey, amount: u128) -> Result<u128, LedgerError> {
        let available = self.balance_of(account);
        available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                available,
                requested: amount,
            })
    }

    /// Raise `account` and total supply by `amount`. The caller has already
    /// checked the cap; both sums are checked again here so nothing is written
    /// unless both fit.
    pub(crate) fn credit(&mut self, account: &Pubkey, amount: u128) -> Result<(), LedgerError> {
        let new_total = self.check_mint(amount)?;
        let new_balance = self.check_credit(account, amount)?;
        self.total_supply = new_total;
        self.set_balance(account, new_balance);
        Ok(())
    }

    /// Lower `account` by `amount`. Total supply is untouched; the matching
    /// credit is the caller's job.
    pub(crate) fn debit(&mut self, account: &Pubkey, amount: u128) -> Result<(), LedgerError> {
        let new_balance = self.check_debit(account, amount)?;
        self.set_balance(account, new_balance);
        Ok(())
    }

    /// Move `amount` from `from` to `to` with no change in total supply.
    pub(crate) fn move_balance(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.check_debit(from, amount)?;
        if from == to {
            return Ok(());
        }
        let to_after = self.check_credit(to, amount)?;
        self.debit(from, amount)?;
        self.set_balance(to, to_after);
        Ok(())
    }

    fn set_balance(&mut self, account: &Pubkey, balance: u128) {
        if balance == 0 {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, balance);
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    const ALICE: Pubkey = Pubkey::new_from_array([1; 32]);
    const BOB: Pubkey = Pubkey::new_from_array([2; 32]);

    #[test]
    fn test_unknown_account_has_zero_balance() {
        let store = LedgerStore::new(1_000);
        assert_eq!(store.balance_of(&ALICE), 0);
        assert_eq!(store.total_supply(), 0);
        assert_eq!(store.cap(), 1_000);
    }

    #[test]
    fn test_credit_raises_balance_and_supply() {
        let mut store = LedgerStore::new(1_000);
        store.credit(&ALICE, 400).unwrap();
        store.credit(&ALICE, 100).unwrap();
        assert_eq!(store.balance_of(&ALICE), 500);
        assert_eq!(store.total_supply(), 500);
        assert_eq!(store.supply_remaining(), 500);
    }

    #[test]
    fn test_credit_refuses_to_pass_cap() {
        let mut store = LedgerStore::new(1_000);
        store.credit(&ALICE, 1_000).unwrap();
        assert_matches!(
            store.credit(&BOB, 1),
            Err(LedgerError::CapExceeded {
                requested: 1,
                total_supply: 1_000,
                cap: 1_000
            })
        );
        assert_eq!(store.balance_of(&BOB), 0);
    }

    #[test]
    fn test_check_mint_overflow_is_cap_exceeded() {
        let mut store = LedgerStore::new(u128::MAX);
        store.credit(&ALICE, u128::MAX - 1).unwrap();
        assert_matches!(store.check_mint(2), Err(LedgerError::CapExceeded { .. }));
    }

    #[test]
    fn test_check_credit_overflow_is_reported() {
        let store = LedgerStore::from_parts(BTreeMap::from([(ALICE, u128::MAX)]), u128::MAX, u128::MAX);
        assert_eq!(store.check_credit(&ALICE, 1), Err(LedgerError::ArithmeticOverflow));
        assert_eq!(store.check_credit(&BOB, 1), Ok(1));
    }

    #[test]
    fn test_debit_never_changes_supply() {
        let mut store = LedgerStore::new(1_000);
        store.credit(&ALICE, 300).unwrap();
        store.debit(&ALICE, 100).unwrap();
        assert_eq!(store.balance_of(&ALICE), 200);
        assert_eq!(store.total_supply(), 300);
    }

    #[test]
    fn test_debit_insufficient_balance() {
        let mut store = LedgerStore::new(1_000);
        store.credit(&ALICE, 10).unwrap();
        assert_matches!(
            store.debit(&ALICE, 11),
            Err(LedgerError::InsufficientBalance {
                available: 10,
                requested: 11
            })
        );
        assert_eq!(store.balance_of(&ALICE), 10);
    }

    #[test]
    fn test_zero_balances_are_pruned() {
        let mut store = LedgerStore::new(1_000);
        store.credit(&ALICE, 10).unwrap();
        store.move_balance(&ALICE, &BOB, 10).unwrap();
        assert_eq!(store.holder_count(), 1);
        assert_eq!(store.balance_of(&ALICE), 0);
        assert_eq!(store.balance_of(&BOB), 10);
    }

    #[test]
    fn test_self_move_is_a_no_op() {
        let mut store = LedgerStore::new(1_000);
        store.credit(&ALICE, 10).unwrap();
        store.move_balance(&ALICE, &ALICE, 10).unwrap();
        assert_eq!(store.balance_of(&ALICE), 10);
        assert_matches!(
            store.move_balance(&ALICE, &ALICE, 11),
            Err(LedgerError::InsufficientBalance { .. })
        );
    }
}
