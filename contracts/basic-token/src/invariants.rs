// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates expressing the ledger's invariants over before/after values.
// Used by the unit tests and by the Certora Sunbeam rules.
//
// INVARIANT CATEGORIES:
//
// 1. NON-NEGATIVITY
//    - Every balance is >= 0
//    - Every allowance is >= 0
//
// 2. CONSERVATION
//    - Only the seed creates value; transfers move it
//
// 3. ALLOWANCE ACCOUNTING
//    - Approvals accumulate
//    - A delegated transfer consumes exactly its amount
//    - Nothing else moves an allowance
//
// ============================================================================

// ============================================================================
// NON-NEGATIVITY INVARIANTS
// ============================================================================

/// Invariant: balance is non-negative
///
/// Property:
///   balance(account) >= 0
pub fn balance_non_negative(balance: i128) -> bool {
    balance >= 0
}

/// Invariant: allowance is non-negative
///
/// Property:
///   allowance(owner, spender) >= 0
pub fn allowance_non_negative(allowance: i128) -> bool {
    allowance >= 0
}

// ============================================================================
// CONSERVATION INVARIANTS
// ============================================================================

/// Invariant: the balances touched by a move keep their sum
///
/// Property:
///   from_before + to_before == from_after + to_after
///
/// For a self-transfer pass the same account's values on both sides.
pub fn supply_conserved(
    from_before: i128,
    to_before: i128,
    from_after: i128,
    to_after: i128,
) -> bool {
    match (
        from_before.checked_add(to_before),
        from_after.checked_add(to_after),
    ) {
        (Some(before), Some(after)) => before == after,
        _ => false,
    }
}

/// Invariant: a successful move debits and credits exactly `amount`
///
/// Property:
///   from_after == from_before - amount
///   to_after == to_before + amount
pub fn move_exact(
    from_before: i128,
    to_before: i128,
    from_after: i128,
    to_after: i128,
    amount: i128,
) -> bool {
    from_before.checked_sub(amount) == Some(from_after)
        && to_before.checked_add(amount) == Some(to_after)
}

// ============================================================================
// ALLOWANCE INVARIANTS
// ============================================================================

/// Invariant: approve adds to the existing allowance
///
/// Property:
///   allowance_after == allowance_before + amount
pub fn approve_accumulates(allowance_before: i128, allowance_after: i128, amount: i128) -> bool {
    allowance_before.checked_add(amount) == Some(allowance_after)
}

/// Invariant: transfer_from consumes exactly the transferred amount
///
/// Property:
///   allowance_after == allowance_before - amount
pub fn allowance_spent_exactly(
    allowance_before: i128,
    allowance_after: i128,
    amount: i128,
) -> bool {
    allowance_before.checked_sub(amount) == Some(allowance_after)
}

/// Invariant: an entry the operation must not touch is unchanged
///
/// Used for allowances under direct transfer, unrelated allowance pairs,
/// and every entry after a rejected operation.
pub fn entry_unchanged(before: i128, after: i128) -> bool {
    before == after
}

// ============================================================================
// TESTS
// ============================================================================
