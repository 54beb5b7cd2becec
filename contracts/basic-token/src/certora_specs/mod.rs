// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the basic token ledger.
//
// STRUCTURE:
//
// - model.rs          : State snapshots for before/after comparisons
// - supply_specs.rs   : Seeding and conservation of balances
// - allowance_specs.rs: Approve accumulation and allowance consumption
// - failure_specs.rs  : Rejected operations leave no trace
//
// PATTERNS USED:
//
// 1. Skolem variables - Arbitrary accounts and amounts as rule parameters
// 2. State snapshots - Before/after comparisons
// 3. Sanity rules - Ensure rules aren't vacuously true
//
// USAGE:
// - Unit tests: cargo test -p basic-token
// - Certora build: cargo build --features certora -p basic-token
//
// ============================================================================

pub mod model;

pub mod allowance_specs;
pub mod failure_specs;
pub mod supply_specs;
