//! Owner / hook access control.
//!
//! The ledger has exactly one **owner** (administrative and treasury minting,
//! hook management, ownership handoff) and at most one **hook** (LP-reward
//! minting). Every privileged operation calls [`AccessControl::check`] before
//! it reads anything else.

use {
    crate::error::LedgerError,
    log::*,
    solana_pubkey::Pubkey,
    std::fmt,
};

/// A privileged role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Hook,
}

impl Role {
    /// Message returned to a caller who lacks this role.
    pub fn denial(&self) -> &'static str {
        match self {
            Role::Owner => "Ownable: caller is not the owner",
            Role::Hook => "Only DPP Hook can mint LP rewards",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::Hook => write!(f, "hook"),
        }
    }
}

/// Identity slots guarding the ledger's privileged operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessControl {
    owner: Pubkey,
    hook: Option<Pubkey>,
}

impl AccessControl {
    pub fn new(owner: Pubkey) -> Self {
        Self { owner, hook: None }
    }

    pub(crate) fn from_parts(owner: Pubkey, hook: Option<Pubkey>) -> Self {
        Self { owner, hook }
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    pub fn hook(&self) -> Option<Pubkey> {
        self.hook
    }

    /// Whether `caller` currently holds `role`. An unset hook matches nobody.
    pub fn has_role(&self, caller: &Pubkey, role: Role) -> bool {
        match role {
            Role::Owner => *caller == self.owner,
            Role::Hook => self.hook.as_ref() == Some(caller),
        }
    }

    /// Fail with [`LedgerError::Unauthorized`] unless `caller` holds `role`.
    pub fn check(&self, caller: &Pubkey, role: Role) -> Result<(), LedgerError> {
        if self.has_role(caller, role) {
            Ok(())
        } else {
            warn!("rejected {caller}: {role} role required");
            Err(LedgerError::Unauthorized { role })
        }
    }

    /// Replace the hook. The zero identity clears it, which disables the
    /// LP-reward channel until a new hook is set.
    pub fn set_hook(&mut self, caller: &Pubkey, new_hook: Pubkey) -> Result<(), LedgerError> {
        self.check(caller, Role::Owner)?;
        let previous = self.hook;
        self.hook = (new_hook != Pubkey::default()).then_some(new_hook);
        info!("hook changed: {previous:?} → {:?}", self.hook);
        Ok(())
    }

    /// Hand every owner right to `new_owner`.
    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
    ) -> Result<(), LedgerError> {
        self.check(caller, Role::Owner)?;
        if new_owner == Pubkey::default() {
            return Err(LedgerError::InvalidOwner);
        }
        let previous = self.owner;
        self.owner = new_owner;
        info!("ownership transferred: {previous} → {new_owner}");
        Ok(())
    }
}
