use crate::storage::{get_allowance, set_allowance};
use soroban_sdk::{log, Address, Env};
use token_math::{add_amount, sub_amount};
use token_types::{AllowanceKey, LedgerError};

/// Add `amount` to what `spender` may move out of `owner`'s balance.
///
/// Approvals accumulate: a second approval adds to the first instead of
/// replacing it. Returns the resulting allowance.
pub fn increase(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<i128, LedgerError> {
    let key = AllowanceKey::new(owner, spender);
    let current = get_allowance(env, &key);
    let updated = add_amount(current, amount)?;
    set_allowance(env, &key, updated);
    Ok(updated)
}

/// A validated allowance consumption that has not been written yet
pub struct PendingSpend {
    key: AllowanceKey,
    remaining: i128,
}

/// Validate `spender` consuming `amount` of `owner`'s allowance
pub fn prepare_spend(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<PendingSpend, LedgerError> {
    let key = AllowanceKey::new(owner, spender);
    let available = get_allowance(env, &key);
    let remaining =
        sub_amount(available, amount, LedgerError::InsufficientAllowance).map_err(|err| {
            log!(env, "insufficient allowance", available, amount);
            err
        })?;

    Ok(PendingSpend { key, remaining })
}

impl PendingSpend {
    pub fn apply(self, env: &Env) {
        set_allowance(env, &self.key, self.remaining);
    }
}
