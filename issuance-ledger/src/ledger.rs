//! The issuance ledger aggregate.
//!
//! [`IssuanceLedger`] owns the balance book, the access-control slots, the
//! issuance counters and the allowances as one unit of state. Every public
//! mutation takes `&mut self`, finishes all of its checks before its first
//! write, and either commits entirely or returns an error with the ledger
//! untouched.

use {
    crate::{
        access::{AccessControl, Role},
        config::{validate_config, LedgerConfig},
        error::LedgerError,
        issuance::{commit_mint, plan_mint, IssuanceCounters, MintChannel},
        state::LedgerState,
        store::LedgerStore,
        transfer::{self, Allowances},
    },
    log::*,
    solana_pubkey::Pubkey,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceLedger {
    name: String,
    symbol: String,
    decimals: u8,
    access: AccessControl,
    store: LedgerStore,
    counters: IssuanceCounters,
    allowances: Allowances,
}

impl IssuanceLedger {
    /// Deploy a ledger. `deployer` becomes the owner and receives the
    /// configured initial treasury allocation, which counts towards
    /// `treasury_minted`.
    pub fn new(config: LedgerConfig, deployer: Pubkey) -> Result<Self, LedgerError> {
        validate_config(&config)?;

        let mut ledger = Self {
            name: config.name,
            symbol: config.symbol,
            decimals: config.decimals,
            access: AccessControl::new(deployer),
            store: LedgerStore::new(config.cap),
            counters: IssuanceCounters::new(config.max_treasury_supply),
            allowances: Allowances::default(),
        };
        ledger.mint(
            &deployer,
            MintChannel::Treasury,
            &deployer,
            config.initial_treasury_allocation,
        )?;

        info!(
            "{} ledger deployed: owner={deployer}, cap={}, max_treasury_supply={}, initial_treasury={}",
            ledger.symbol,
            ledger.cap(),
            ledger.counters.max_treasury_supply,
            ledger.counters.treasury_minted,
        );
        Ok(ledger)
    }

    // ── Read-only accessors ──────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn owner(&self) -> Pubkey {
        self.access.owner()
    }

    pub fn hook(&self) -> Option<Pubkey> {
        self.access.hook()
    }

    pub fn cap(&self) -> u128 {
        self.store.cap()
    }

    pub fn total_supply(&self) -> u128 {
        self.store.total_supply()
    }

    pub fn balance_of(&self, account: &Pubkey) -> u128 {
        self.store.balance_of(account)
    }

    pub fn treasury_minted(&self) -> u128 {
        self.counters.treasury_minted
    }

    pub fn lp_minted(&self) -> u128 {
        self.counters.lp_minted
    }

    pub fn max_treasury_supply(&self) -> u128 {
        self.counters.max_treasury_supply
    }

    /// Treasury issuance still available under the sub-cap. The global cap
    /// may be the tighter bound.
    pub fn treasury_remaining(&self) -> u128 {
        self.counters.treasury_remaining()
    }

    pub fn supply_remaining(&self) -> u128 {
        self.store.supply_remaining()
    }

    pub fn allowance(&self, holder: &Pubkey, spender: &Pubkey) -> u128 {
        self.allowances.allowance(holder, spender)
    }

    /// Non-zero balances, ordered by account.
    pub fn balances(&self) -> impl Iterator<Item = (&Pubkey, &u128)> {
        self.store.balances()
    }

    // ── Access control ───────────────────────────────────────────────────

    pub fn set_hook(&mut self, caller: &Pubkey, new_hook: Pubkey) -> Result<(), LedgerError> {
        self.access.set_hook(caller, new_hook)
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
    ) -> Result<(), LedgerError> {
        self.access.transfer_ownership(caller, new_owner)
    }

    // ── Issuance ─────────────────────────────────────────────────────────

    /// Owner mint bounded only by the global cap.
    pub fn mint_admin(&mut self, caller: &Pubkey, to: &Pubkey, amount: u128) -> Result<(), LedgerError> {
        self.mint(caller, MintChannel::Admin, to, amount)
    }

    /// Owner mint bounded by the treasury sub-cap and the global cap.
    pub fn mint_treasury(
        &mut self,
        caller: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.mint(caller, MintChannel::Treasury, to, amount)
    }

    /// Hook mint bounded by the global cap.
    pub fn mint_lp_rewards(
        &mut self,
        caller: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.mint(caller, MintChannel::LpRewards, to, amount)
    }

    fn mint(
        &mut self,
        caller: &Pubkey,
        channel: MintChannel,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), LedgerError> {
        let plan = plan_mint(
            &self.access,
            &self.store,
            &self.counters,
            caller,
            channel,
            to,
            amount,
        )
        .inspect_err(|err| debug!("{channel} mint of {amount} to {to} rejected: {err}"))?;
        commit_mint(&mut self.store, &mut self.counters, &plan)?;
        debug!(
            "{channel} mint: {amount} to {to}, total_supply={}",
            plan.new_total_supply
        );
        Ok(())
    }

    // ── Transfers ────────────────────────────────────────────────────────

    /// Move `amount` from `caller` to `to`.
    pub fn transfer(&mut self, caller: &Pubkey, to: &Pubkey, amount: u128) -> Result<(), LedgerError> {
        transfer::transfer(&mut self.store, caller, to, amount)?;
        debug!("transfer: {amount} from {caller} to {to}");
        Ok(())
    }

    /// Let `spender` move up to `amount` of `caller`'s balance.
    pub fn approve(&mut self, caller: &Pubkey, spender: &Pubkey, amount: u128) -> Result<(), LedgerError> {
        self.allowances.approve(caller, spender, amount);
        debug!("approve: {caller} allows {spender} to spend {amount}");
        Ok(())
    }

    /// Move `amount` from `from` to `to` using `caller`'s allowance.
    pub fn transfer_from(
        &mut self,
        caller: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), LedgerError> {
        transfer::transfer_from(&mut self.store, &mut self.allowances, caller, from, to, amount)?;
        debug!("transfer_from: {amount} from {from} to {to} by {caller}");
        Ok(())
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Capture the persisted form of the ledger.
    pub fn snapshot(&self) -> LedgerState {
        LedgerState {
            version: LedgerState::CURRENT_VERSION,
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
            owner: self.access.owner(),
            hook: self.access.hook(),
            cap: self.store.cap(),
            total_supply: self.store.total_supply(),
            max_treasury_supply: self.counters.max_treasury_supply,
            treasury_minted: self.counters.treasury_minted,
            lp_minted: self.counters.lp_minted,
            balances: self
                .store
                .balances()
                .map(|(account, balance)| (*account, *balance))
                .collect(),
            allowances: self.allowances.as_map().clone(),
        }
    }

    /// Rebuild a ledger from persisted state, rejecting any state that the
    /// ledger's own operations could not have produced.
    pub fn restore(state: LedgerState) -> Result<Self, LedgerError> {
        if state.version != LedgerState::CURRENT_VERSION {
            return Err(LedgerError::InvalidAccountData);
        }
        // Metadata and caps must pass the same rules as a fresh deployment.
        let config = LedgerConfig {
            name: state.name.clone(),
            symbol: state.symbol.clone(),
            decimals: state.decimals,
            cap: state.cap,
            max_treasury_supply: state.max_treasury_supply,
            initial_treasury_allocation: 0,
        };
        validate_config(&config).map_err(|err| {
            warn!("refusing to restore ledger state: {err}");
            LedgerError::InvalidAccountData
        })?;
        let zero = Pubkey::default();
        if state.owner == zero || state.hook == Some(zero) {
            warn!("refusing to restore ledger state with a zero owner or hook");
            return Err(LedgerError::InvalidAccountData);
        }
        let balance_sum = state
            .balances
            .values()
            .try_fold(0u128, |sum, balance| sum.checked_add(*balance))
            .ok_or(LedgerError::InvalidAccountData)?;
        let lp_and_treasury = state
            .treasury_minted
            .checked_add(state.lp_minted)
            .ok_or(LedgerError::InvalidAccountData)?;
        if balance_sum != state.total_supply
            || state.total_supply > state.cap
            || state.treasury_minted > state.max_treasury_supply
            || lp_and_treasury > state.total_supply
            || state.balances.values().any(|balance| *balance == 0)
            || state.allowances.values().any(|amount| *amount == 0)
        {
            warn!("refusing to restore inconsistent ledger state");
            return Err(LedgerError::InvalidAccountData);
        }

        Ok(Self {
            name: state.name,
            symbol: state.symbol,
            decimals: state.decimals,
            access: AccessControl::from_parts(state.owner, state.hook),
            store: LedgerStore::from_parts(state.balances, state.total_supply, state.cap),
            counters: IssuanceCounters {
                treasury_minted: state.treasury_minted,
                lp_minted: state.lp_minted,
                max_treasury_supply: state.max_treasury_supply,
            },
            allowances: Allowances::from_map(state.allowances),
        })
    }

    /// Whether `caller` currently holds `role`.
    pub fn has_role(&self, caller: &Pubkey, role: Role) -> bool {
        self.access.has_role(caller, role)
    }
}
