// ============================================================================
// ALLOWANCE SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. approve adds to the existing allowance
// 2. transfer_from consumes exactly the transferred amount
// 3. Direct transfers never change an allowance
// 4. transfer_from changes only the (owner, caller) allowance
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

/// RULE: Two approvals accumulate
#[cfg(feature = "certora")]
#[rule]
pub fn approve_is_additive(
    env: Env,
    holder: Address,
    owner: Address,
    spender: Address,
    first: i128,
    second: i128,
) {
    cvlr_assume!(first > 0 && second > 0);
    cvlr_assume!(first <= i128::MAX - second);
    BasicToken::__constructor(env.clone(), holder);

    let before = BasicToken::allowance_of(env.clone(), owner.clone(), spender.clone());
    cvlr_assume!(before == 0);

    let after_first = BasicToken::approve(env.clone(), owner.clone(), first, spender.clone());
    let after_second = BasicToken::approve(env.clone(), owner.clone(), second, spender.clone());

    cvlr_assert!(after_first == Ok(first));
    cvlr_assert!(after_second == Ok(first + second));
    cvlr_assert!(BasicToken::allowance_of(env, owner, spender) == first + second);
}

/// RULE: transfer_from decreases allowance(owner, caller) by exactly `amount`
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_from_spends_exact_allowance(
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

    cvlr_assume!(result.is_ok());
    cvlr_assert!(invariants::allowance_spent_exactly(
        before.allowance,
        after.allowance,
        amount,
    ));
    cvlr_assert!(invariants::allowance_non_negative(after.allowance));
}

/// RULE: transfer never changes any allowance
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_never_touches_allowance(
    env: Env,
    holder: Address,
    caller: Address,
    to: Address,
    owner: Address,
    spender: Address,
    amount: i128,
) {
    BasicToken::__constructor(env.clone(), holder);

    let before = BasicToken::allowance_of(env.clone(), owner.clone(), spender.clone());
    let _ = BasicToken::transfer(env.clone(), caller, amount, to);
    let after = BasicToken::allowance_of(env, owner, spender);

    cvlr_assert!(invariants::entry_unchanged(before, after));
}

/// RULE: transfer_from leaves every other allowance pair alone
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_from_leaves_other_allowances(
    env: Env,
    holder: Address,
    spender: Address,
    owner: Address,
    to: Address,
    other_owner: Address,
    other_spender: Address,
    amount: i128,
) {
    cvlr_assume!(other_owner != owner || other_spender != spender);
    BasicToken::__constructor(env.clone(), holder);

    let before =
        BasicToken::allowance_of(env.clone(), other_owner.clone(), other_spender.clone());
    let _ = BasicToken::transfer_from(env.clone(), spender, amount, to, owner);
    let after = BasicToken::allowance_of(env, other_owner, other_spender);

    cvlr_assert!(invariants::entry_unchanged(before, after));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
