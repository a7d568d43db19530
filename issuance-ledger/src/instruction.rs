//! Instruction definitions for the issuance ledger.
//!
//! Instructions are serialised / deserialised with `bincode`. The signer of
//! an instruction is supplied by the caller of the processor, not encoded in
//! the instruction itself.

use {
    crate::error::LedgerError,
    serde::{Deserialize, Serialize},
    solana_pubkey::Pubkey,
};

/// Operations accepted by [`process_instruction`](crate::processor::process_instruction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerInstruction {
    /// Replace the LP-reward hook. The zero key clears it.
    ///
    /// Signer: owner.
    SetHook { hook: Pubkey },

    /// Mint bounded only by the global cap.
    ///
    /// Signer: owner.
    MintAdmin { to: Pubkey, amount: u128 },

    /// Mint bounded by the treasury sub-cap and the global cap.
    ///
    /// Signer: owner.
    MintTreasury { to: Pubkey, amount: u128 },

    /// Mint LP rewards, bounded by the global cap.
    ///
    /// Signer: hook.
    MintLpRewards { to: Pubkey, amount: u128 },

    /// Move the signer's tokens to `to`.
    ///
    /// Signer: holder.
    Transfer { to: Pubkey, amount: u128 },

    /// Set `spender`'s allowance over the signer's balance.
    ///
    /// Signer: holder.
    Approve { spender: Pubkey, amount: u128 },

    /// Move `from`'s tokens to `to`, consuming the signer's allowance.
    ///
    /// Signer: approved spender.
    TransferFrom {
        from: Pubkey,
        to: Pubkey,
        amount: u128,
    },

    /// Hand ownership to `new_owner`.
    ///
    /// Signer: owner.
    TransferOwnership { new_owner: Pubkey },
}

impl LedgerInstruction {
    /// Encode for [`process_instruction`](crate::processor::process_instruction).
    pub fn to_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        bincode::serialize(self).map_err(|_| LedgerError::InvalidInstructionData)
    }
}
