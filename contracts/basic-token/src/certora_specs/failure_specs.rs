// ============================================================================
// FAILURE SPECIFICATIONS
// ============================================================================
//
// A rejected operation must leave every balance and allowance exactly as it
// found them, and every rejection must carry the right error.
//
// KEY INVARIANTS:
// 1. Non-positive amounts are always rejected with InvalidAmount
// 2. A rejected transfer changes nothing
// 3. A rejected transfer_from changes nothing
// 4. Overdrawing an allowance is reported as InsufficientAllowance
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use crate::{certora_specs::model::LedgerSnapshot, invariants, BasicToken};

#[cfg(feature = "certora")]
use token_types::LedgerError;

/// RULE: Every operation rejects a non-positive amount
#[cfg(feature = "certora")]
#[rule]
pub fn non_positive_amount_rejected(
    env: Env,
    holder: Address,
    caller: Address,
    to: Address,
    owner: Address,
    amount: i128,
) {
    cvlr_assume!(amount <= 0);
    BasicToken::__constructor(env.clone(), holder);

    let transfer = BasicToken::transfer(env.clone(), caller.clone(), amount, to.clone());
    let approve = BasicToken::approve(env.clone(), caller.clone(), amount, to.clone());
    let transfer_from = BasicToken::transfer_from(env, caller, amount, to, owner);

    cvlr_assert!(transfer == Err(LedgerError::InvalidAmount));
    cvlr_assert!(approve == Err(LedgerError::InvalidAmount));
    cvlr_assert!(transfer_from == Err(LedgerError::InvalidAmount));
}

/// RULE: A rejected transfer leaves the touched entries unchanged
#[cfg(feature = "certora")]
#[rule]
pub fn rejected_transfer_changes_nothing(
    env: Env,
    holder: Address,
    caller: Address,
    to: Address,
    amount: i128,
) {
    BasicToken::__constructor(env.clone(), holder);

    let before = LedgerSnapshot::read(&env, &caller, &caller, &to);
    let result = BasicToken::transfer(env.clone(), caller.clone(), amount, to.clone());
    let after = LedgerSnapshot::read(&env, &caller, &caller, &to);

    cvlr_assume!(result.is_err());
    cvlr_assert!(before == after);
}

/// RULE: A rejected transfer_from leaves the touched entries unchanged
#[cfg(feature = "certora")]
#[rule]
pub fn rejected_transfer_from_changes_nothing(
    env: Env,
    holder: Address,
    spender: Address,
    owner: Address,
    to: Address,
    amount: i128,
) {
    BasicToken::__constructor(env.clone(), holder);

    let before = LedgerSnapshot::read(&env, &owner, &spender, &to);
    let result = BasicToken::transfer_from(
        env.clone(),
        spender.clone(),
        amount,
        to.clone(),
        owner.clone(),
    );
    let after = LedgerSnapshot::read(&env, &owner, &spender, &to);

    cvlr_assume!(result.is_err());
    cvlr_assert!(before == after);
}

/// RULE: Spending more than the allowance is reported as InsufficientAllowance
#[cfg(feature = "certora")]
#[rule]
pub fn overdrawn_allowance_reported(
    env: Env,
    holder: Address,
    spender: Address,
    owner: Address,
    to: Address,
    amount: i128,
) {
    cvlr_assume!(amount > 0);
    BasicToken::__constructor(env.clone(), holder);

    let allowance = BasicToken::allowance_of(env.clone(), owner.clone(), spender.clone());
    cvlr_assume!(allowance < amount);

    let result = BasicToken::transfer_from(env, spender, amount, to, owner);
    cvlr_assert!(result == Err(LedgerError::InsufficientAllowance));
}

/// RULE: Balances stay non-negative through any transfer_from
#[cfg(feature = "certora")]
#[rule]
pub fn balances_stay_non_negative(
    env: Env,
    holder: Address,
    spender: Address,
    owner: Address,
    to: Address,
    amount: i128,
) {
    BasicToken::__constructor(env.clone(), holder);

    let before = LedgerSnapshot::read(&env, &owner, &spender, &to);
    cvlr_assume!(invariants::balance_non_negative(before.owner_balance));
    cvlr_assume!(invariants::balance_non_negative(before.to_balance));

    let _ = BasicToken::transfer_from(
        env.clone(),
        spender.clone(),
        amount,
        to.clone(),
        owner.clone(),
    );
    let after = LedgerSnapshot::read(&env, &owner, &spender, &to);

    cvlr_assert!(invariants::balance_non_negative(after.owner_balance));
    cvlr_assert!(invariants::balance_non_negative(after.to_balance));
    cvlr_assert!(invariants::allowance_non_negative(after.allowance));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
