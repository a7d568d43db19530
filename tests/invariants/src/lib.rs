//! vDPP Property-Based Invariant Tests
//!
//! Uses proptest to drive the issuance ledger through random operation
//! sequences and verify supply conservation, cap bounds and atomicity.

pub mod ledger_invariants;
