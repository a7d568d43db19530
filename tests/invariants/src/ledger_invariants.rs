//! Property-based tests for vDPP issuance ledger invariants.
//!
//! Properties tested:
//! 1. Supply conservation: sum of balances == total supply
//! 2. Total supply never exceeds the global cap
//! 3. Treasury counter never exceeds the treasury sub-cap
//! 4. Channel counters only grow, and only through their own channel
//! 5. A rejected operation leaves the ledger untouched
//! 6. Persisted state restores to an identical ledger

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        solana_pubkey::Pubkey,
        vdpp_issuance_ledger::{
            IssuanceLedger, LedgerConfig, LedgerError, LedgerInstruction, LedgerState,
        },
    };

    const CAP: u128 = 10_000;
    const MAX_TREASURY: u128 = 3_000;
    const INITIAL: u128 = 500;

    fn actor(index: u8) -> Pubkey {
        Pubkey::new_from_array([index.wrapping_add(1); 32])
    }

    fn small_config() -> LedgerConfig {
        LedgerConfig {
            cap: CAP,
            max_treasury_supply: MAX_TREASURY,
            initial_treasury_allocation: INITIAL,
            ..LedgerConfig::default()
        }
    }

    /// Ledger owned by actor 0 with actor 1 as the hook.
    fn fresh_ledger() -> IssuanceLedger {
        let mut ledger = IssuanceLedger::new(small_config(), actor(0)).unwrap();
        ledger.set_hook(&actor(0), actor(1)).unwrap();
        ledger
    }

    fn supply_sum(ledger: &IssuanceLedger) -> u128 {
        ledger.balances().map(|(_, balance)| *balance).sum()
    }

    // ── Strategies ──

    fn amount() -> impl Strategy<Value = u128> {
        prop_oneof![
            4 => 0..=2_000u128,
            1 => Just(u128::MAX),
            1 => (CAP - 10)..=(CAP + 10),
        ]
    }

    fn account() -> impl Strategy<Value = Pubkey> {
        (0..5u8).prop_map(actor)
    }

    fn instruction() -> impl Strategy<Value = LedgerInstruction> {
        prop_oneof![
            (account(), amount()).prop_map(|(to, amount)| LedgerInstruction::MintAdmin { to, amount }),
            (account(), amount())
                .prop_map(|(to, amount)| LedgerInstruction::MintTreasury { to, amount }),
            (account(), amount())
                .prop_map(|(to, amount)| LedgerInstruction::MintLpRewards { to, amount }),
            (account(), amount()).prop_map(|(to, amount)| LedgerInstruction::Transfer { to, amount }),
            (account(), amount())
                .prop_map(|(spender, amount)| LedgerInstruction::Approve { spender, amount }),
            (account(), account(), amount()).prop_map(|(from, to, amount)| {
                LedgerInstruction::TransferFrom { from, to, amount }
            }),
            account().prop_map(|hook| LedgerInstruction::SetHook { hook }),
        ]
    }

    fn step() -> impl Strategy<Value = (Pubkey, LedgerInstruction)> {
        (account(), instruction())
    }

    fn execute(
        ledger: &mut IssuanceLedger,
        signer: &Pubkey,
        instruction: &LedgerInstruction,
    ) -> Result<(), LedgerError> {
        let data = instruction.to_bytes()?;
        vdpp_issuance_ledger::processor::process_instruction(ledger, signer, &data)
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1-5. Random operation sequences
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn ledger_invariants_hold_under_random_operations(
            steps in prop::collection::vec(step(), 1..=60),
        ) {
            let mut ledger = fresh_ledger();

            for (i, (signer, ix)) in steps.iter().enumerate() {
                let before = ledger.clone();
                let result = execute(&mut ledger, signer, ix);

                // ── INVARIANT: rejected operations change nothing ──
                if let Err(err) = &result {
                    prop_assert_eq!(&ledger, &before, "step {} ({:?}) failed with {} but mutated state", i, ix, err);
                }

                // ── INVARIANT: balances account for the whole supply ──
                prop_assert_eq!(supply_sum(&ledger), ledger.total_supply(), "step {}", i);

                // ── INVARIANT: caps ──
                prop_assert!(ledger.total_supply() <= CAP, "step {i}: supply above cap");
                prop_assert!(ledger.treasury_minted() <= MAX_TREASURY, "step {i}: treasury above sub-cap");

                // ── INVARIANT: counters are monotonic and channel-local ──
                prop_assert!(ledger.treasury_minted() >= before.treasury_minted());
                prop_assert!(ledger.lp_minted() >= before.lp_minted());
                prop_assert!(ledger.total_supply() >= before.total_supply());
                let minted = ledger.total_supply() - before.total_supply();
                match ix {
                    LedgerInstruction::MintTreasury { amount, .. } if result.is_ok() => {
                        prop_assert_eq!(ledger.treasury_minted() - before.treasury_minted(), *amount);
                        prop_assert_eq!(minted, *amount);
                    }
                    LedgerInstruction::MintLpRewards { amount, .. } if result.is_ok() => {
                        prop_assert_eq!(ledger.lp_minted() - before.lp_minted(), *amount);
                        prop_assert_eq!(minted, *amount);
                    }
                    LedgerInstruction::MintAdmin { amount, .. } if result.is_ok() => {
                        prop_assert_eq!(minted, *amount);
                        prop_assert_eq!(ledger.treasury_minted(), before.treasury_minted());
                        prop_assert_eq!(ledger.lp_minted(), before.lp_minted());
                    }
                    _ => {
                        prop_assert_eq!(minted, 0);
                        prop_assert_eq!(ledger.treasury_minted(), before.treasury_minted());
                        prop_assert_eq!(ledger.lp_minted(), before.lp_minted());
                    }
                }
            }
        }

        /// Any signer other than the owner is refused every owner action.
        #[test]
        fn non_owner_never_mints_admin_or_treasury(
            signer in (1..5u8).prop_map(actor),
            to in account(),
            amount in 0..=CAP,
        ) {
            let mut ledger = fresh_ledger();
            let before = ledger.clone();
            prop_assert!(ledger.mint_admin(&signer, &to, amount).is_err());
            prop_assert!(ledger.mint_treasury(&signer, &to, amount).is_err());
            prop_assert_eq!(ledger, before);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 5. Batches are all-or-nothing
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn transaction_commits_everything_or_nothing(
            batch in prop::collection::vec(instruction(), 1..=10),
        ) {
            let mut ledger = fresh_ledger();
            let before = ledger.clone();
            let signer = actor(0);
            let encoded: Vec<Vec<u8>> = batch.iter().map(|ix| ix.to_bytes().unwrap()).collect();

            // Replay one by one on a scratch copy to learn the expected outcome.
            let mut expected = before.clone();
            let first_failure = batch
                .iter()
                .position(|ix| execute(&mut expected, &signer, ix).is_err());

            let result = vdpp_issuance_ledger::processor::process_transaction(
                &mut ledger,
                &signer,
                &encoded,
            );
            match first_failure {
                Some(index) => {
                    prop_assert_eq!(result.map_err(|(i, _)| i), Err(index));
                    prop_assert_eq!(ledger, before);
                }
                None => {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(ledger, expected);
                }
            }
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 6. Persistence
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn restored_ledger_matches_snapshot(
            steps in prop::collection::vec(step(), 0..=30),
        ) {
            let mut ledger = fresh_ledger();
            for (signer, ix) in &steps {
                let _ = execute(&mut ledger, signer, ix);
            }

            let bytes = ledger.snapshot().to_bytes().unwrap();
            let state = LedgerState::deserialize(&bytes).unwrap();
            let restored = IssuanceLedger::restore(state).unwrap();
            prop_assert_eq!(restored, ledger);
        }
    }

    #[test]
    fn genesis_allocation_is_treasury_minted() {
        let ledger = fresh_ledger();
        assert_eq!(ledger.total_supply(), INITIAL);
        assert_eq!(ledger.treasury_minted(), INITIAL);
        assert_eq!(ledger.balance_of(&actor(0)), INITIAL);
    }
}
