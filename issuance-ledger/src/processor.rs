//! Instruction processing for the issuance ledger.

use {
    crate::{
        constants::MAX_INSTRUCTION_DATA_LEN, error::LedgerError, instruction::LedgerInstruction,
        ledger::IssuanceLedger,
    },
    bincode::Options,
    log::*,
    solana_pubkey::Pubkey,
};

/// Decode an instruction, refusing anything larger than
/// [`MAX_INSTRUCTION_DATA_LEN`].
pub fn decode_instruction(data: &[u8]) -> Result<LedgerInstruction, LedgerError> {
    bincode::options()
        .with_limit(MAX_INSTRUCTION_DATA_LEN)
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .deserialize(data)
        .map_err(|err| {
            debug!("instruction decode failed: {err}");
            LedgerError::InvalidInstructionData
        })
}

/// Decode `data` and run it against `ledger` with `signer` as the caller.
pub fn process_instruction(
    ledger: &mut IssuanceLedger,
    signer: &Pubkey,
    data: &[u8],
) -> Result<(), LedgerError> {
    let instruction = decode_instruction(data)?;
    trace!("issuance ledger process_instruction: {instruction:?}");
    execute(ledger, signer, instruction)
}

/// Run an already decoded instruction.
pub fn execute(
    ledger: &mut IssuanceLedger,
    signer: &Pubkey,
    instruction: LedgerInstruction,
) -> Result<(), LedgerError> {
    match instruction {
        LedgerInstruction::SetHook { hook } => ledger.set_hook(signer, hook),
        LedgerInstruction::MintAdmin { to, amount } => ledger.mint_admin(signer, &to, amount),
        LedgerInstruction::MintTreasury { to, amount } => ledger.mint_treasury(signer, &to, amount),
        LedgerInstruction::MintLpRewards { to, amount } => {
            ledger.mint_lp_rewards(signer, &to, amount)
        }
        LedgerInstruction::Transfer { to, amount } => ledger.transfer(signer, &to, amount),
        LedgerInstruction::Approve { spender, amount } => ledger.approve(signer, &spender, amount),
        LedgerInstruction::TransferFrom { from, to, amount } => {
            ledger.transfer_from(signer, &from, &to, amount)
        }
        LedgerInstruction::TransferOwnership { new_owner } => {
            ledger.transfer_ownership(signer, new_owner)
        }
    }
}

/// Run a batch of encoded instructions all-or-nothing.
///
/// The batch executes against a working copy of the ledger; the copy replaces
/// `ledger` only if every instruction succeeds. On failure the index of the
/// failing instruction is returned alongside its error and `ledger` is
/// unchanged.
pub fn process_transaction<I, D>(
    ledger: &mut IssuanceLedger,
    signer: &Pubkey,
    instructions: I,
) -> Result<(), (usize, LedgerError)>
where
    I: IntoIterator<Item = D>,
    D: AsRef<[u8]>,
{
    let mut working = ledger.clone();
    for (index, data) in instructions.into_iter().enumerate() {
        if let Err(err) = process_instruction(&mut working, signer, data.as_ref()) {
            debug!("transaction rolled back at instruction {index}: {err}");
            return Err((index, err));
        }
    }
    *ledger = working;
    Ok(())
}
