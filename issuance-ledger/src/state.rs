//! Persisted layout of the issuance ledger.

use {
    borsh::{BorshDeserialize, BorshSerialize},
    solana_pubkey::Pubkey,
    std::collections::BTreeMap,
};

/// Discriminator byte written at the start of serialised ledger state to
/// distinguish it from uninitialised or foreign data.
pub const LEDGER_STATE_DISCRIMINATOR: u8 = 1;

/// Everything the ledger persists.
///
/// Serialised with Borsh; the first byte of the encoding is
/// [`LEDGER_STATE_DISCRIMINATOR`]. Maps only hold non-zero entries.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct LedgerState {
    /// Layout version, for future migrations.
    pub version: u8,

    pub name: String,
    pub symbol: String,
    pub decimals: u8,

    /// Administrator: admin and treasury minting, hook management.
    pub owner: Pubkey,

    /// LP-reward minting delegate. `None` disables the reward channel.
    pub hook: Option<Pubkey>,

    /// Global issuance ceiling.
    pub cap: u128,

    /// Sum of all balances.
    pub total_supply: u128,

    /// Ceiling on `treasury_minted`.
    pub max_treasury_supply: u128,

    /// Cumulative treasury issuance, genesis allocation included.
    pub treasury_minted: u128,

    /// Cumulative LP-reward issuance.
    pub lp_minted: u128,

    pub balances: BTreeMap<Pubkey, u128>,

    /// `(holder, spender) → approved amount`.
    pub allowances: BTreeMap<(Pubkey, Pubkey), u128>,
}

impl LedgerState {
    pub const CURRENT_VERSION: u8 = 1;

    /// Serialise into a fresh buffer (prepends the discriminator byte).
    pub fn to_bytes(&self) -> Result<Vec<u8>, std::io::Error> {
        let mut data = vec![LEDGER_STATE_DISCRIMINATOR];
        BorshSerialize::serialize(self, &mut data)?;
        Ok(data)
    }

    /// Serialise into `data`, which must be at least as long as the encoding.
    pub fn serialize_into(&self, data: &mut [u8]) -> Result<(), std::io::Error> {
        let bytes = self.to_bytes()?;
        let dest = data.get_mut(..bytes.len()).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "ledger state buffer too small",
            )
        })?;
        dest.copy_from_slice(&bytes);
        Ok(())
    }

    /// Deserialise from raw data (expects the leading discriminator byte).
    /// Trailing bytes after the encoding are ignored.
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        match data.split_first() {
            Some((&LEDGER_STATE_DISCRIMINATOR, mut cursor)) => {
                BorshDeserialize::deserialize_reader(&mut cursor)
            }
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "missing or invalid ledger state discriminator",
            )),
        }
    }
}
