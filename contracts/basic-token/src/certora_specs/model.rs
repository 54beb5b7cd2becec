// ============================================================================
// STATE SNAPSHOTS
// ============================================================================
//
// A rule or test names the accounts it touches; the snapshot records every
// entry an operation on those accounts can read or write.
//
// ============================================================================

use crate::BasicToken;
use soroban_sdk::{Address, Env};

/// Captures the ledger entries around one operation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerSnapshot {
    pub owner_balance: i128,
    pub spender_balance: i128,
    pub to_balance: i128,
    /// allowance(owner, spender)
    pub allowance: i128,
    pub total_supply: i128,
}

impl LedgerSnapshot {
    /// Read the snapshot from inside the contract's context
    pub fn read(env: &Env, owner: &Address, spender: &Address, to: &Address) -> Self {
        Self {
            owner_balance: BasicToken::balance_of(env.clone(), owner.clone()),
            spender_balance: BasicToken::balance_of(env.clone(), spender.clone()),
            to_balance: BasicToken::balance_of(env.clone(), to.clone()),
            allowance: BasicToken::allowance_of(env.clone(), owner.clone(), spender.clone()),
            total_supply: BasicToken::total_supply(env.clone()),
        }
    }

    /// Read the snapshot of a registered contract from a test
    #[cfg(test)]
    pub fn capture(
        env: &Env,
        contract: &Address,
        owner: &Address,
        spender: &Address,
        to: &Address,
    ) -> Self {
        env.as_contract(contract, || Self::read(env, owner, spender, to))
    }
}
