//! Thread-safe handle around a single [`IssuanceLedger`].
//!
//! Each method takes the lock exactly once, so every operation (or batch)
//! reads, validates and writes as one indivisible step with respect to every
//! other holder of the handle.

use {
    crate::{
        error::LedgerError, instruction::LedgerInstruction, ledger::IssuanceLedger, processor,
        state::LedgerState,
    },
    solana_pubkey::Pubkey,
    std::sync::{Arc, Mutex, MutexGuard},
};

#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<IssuanceLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: IssuanceLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, IssuanceLedger> {
        // Operations never panic between writes; a poisoned guard is consistent.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run a read-only closure against the ledger under the lock.
    pub fn read<T>(&self, f: impl FnOnce(&IssuanceLedger) -> T) -> T {
        f(&*self.lock())
    }

    pub fn balance_of(&self, account: &Pubkey) -> u128 {
        self.lock().balance_of(account)
    }

    pub fn total_supply(&self) -> u128 {
        self.lock().total_supply()
    }

    pub fn snapshot(&self) -> LedgerState {
        self.lock().snapshot()
    }

    /// Execute one decoded instruction as `signer`.
    pub fn execute(&self, signer: &Pubkey, instruction: LedgerInstruction) -> Result<(), LedgerError> {
        processor::execute(&mut self.lock(), signer, instruction)
    }

    /// Decode and execute one instruction as `signer`.
    pub fn process_instruction(&self, signer: &Pubkey, data: &[u8]) -> Result<(), LedgerError> {
        processor::process_instruction(&mut self.lock(), signer, data)
    }

    /// Execute a batch all-or-nothing as `signer`.
    pub fn process_transaction<I, D>(
        &self,
        signer: &Pubkey,
        instructions: I,
    ) -> Result<(), (usize, LedgerError)>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[u8]>,
    {
        processor::process_transaction(&mut self.lock(), signer, instructions)
    }
}
