use crate::storage::{get_balance, set_balance, set_total_supply};
use soroban_sdk::{log, Address, Env};
use token_math::{add_amount, sub_amount};
use token_types::{LedgerError, INITIAL_SUPPLY};

/// Credit the initial supply to `recipient`.
///
/// The recipient's balance is overwritten, not added to. This is the only
/// place value enters the ledger.
pub fn seed(env: &Env, recipient: &Address) {
    set_balance(env, recipient, INITIAL_SUPPLY);
    set_total_supply(env, INITIAL_SUPPLY);
}

/// A validated debit/credit pair that has not been written yet
pub struct PendingMove {
    from: Address,
    to: Address,
    from_after: i128,
    to_after: i128,
}

/// Validate moving `amount` from `from` to `to` without touching storage.
///
/// When `from == to` the credit is computed on top of the debited value, so
/// applying the move writes the original balance back.
pub fn prepare_move(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<PendingMove, LedgerError> {
    let from_balance = get_balance(env, from);
    let from_after =
        sub_amount(from_balance, amount, LedgerError::InsufficientBalance).map_err(|err| {
            log!(env, "insufficient balance", from_balance, amount);
            err
        })?;

    let to_before = if from == to {
        from_after
    } else {
        get_balance(env, to)
    };
    let to_after = add_amount(to_before, amount)?;

    Ok(PendingMove {
        from: from.clone(),
        to: to.clone(),
        from_after,
        to_after,
    })
}

impl PendingMove {
    /// Write the debit, then the credit
    pub fn apply(self, env: &Env) {
        set_balance(env, &self.from, self.from_after);
        set_balance(env, &self.to, self.to_after);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::get_total_supply;
    use crate::BasicToken;
    use soroban_sdk::testutils::Address as _;

    fn setup(env: &Env) -> (Address, Address) {
        let holder = Address::generate(env);
        let contract_id = env.register(BasicToken, (holder.clone(),));
        (contract_id, holder)
    }

    #[test]
    fn test_seed_overwrites_existing_balance() {
        let env = Env::default();
        let (contract_id, holder) = setup(&env);

        env.as_contract(&contract_id, || {
            set_balance(&env, &holder, 5);
            seed(&env, &holder);
            assert_eq!(get_balance(&env, &holder), INITIAL_SUPPLY);
            assert_eq!(get_total_supply(&env), INITIAL_SUPPLY);
        });
    }

    #[test]
    fn test_prepare_move_does_not_write() {
        let env = Env::default();
        let (contract_id, holder) = setup(&env);
        let to = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let pending = prepare_move(&env, &holder, &to, 400).unwrap();
            assert_eq!(get_balance(&env, &holder), INITIAL_SUPPLY);
            assert_eq!(get_balance(&env, &to), 0);

            pending.apply(&env);
            assert_eq!(get_balance(&env, &holder), INITIAL_SUPPLY - 400);
            assert_eq!(get_balance(&env, &to), 400);
        });
    }

    #[test]
    fn test_move_to_self_is_net_zero() {
        let env = Env::default();
        let (contract_id, holder) = setup(&env);

        env.as_contract(&contract_id, || {
            prepare_move(&env, &holder, &holder, INITIAL_SUPPLY)
                .unwrap()
                .apply(&env);
            assert_eq!(get_balance(&env, &holder), INITIAL_SUPPLY);
        });
    }

    #[test]
    fn test_move_more_than_balance_rejected() {
        let env = Env::default();
        let (contract_id, holder) = setup(&env);
        let to = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let result = prepare_move(&env, &holder, &to, INITIAL_SUPPLY + 1);
            assert_eq!(result.err(), Some(LedgerError::InsufficientBalance));
        });
    }

    #[test]
    fn test_move_from_empty_account_rejected() {
        let env = Env::default();
        let (contract_id, _) = setup(&env);
        let empty = Address::generate(&env);
        let to = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let result = prepare_move(&env, &empty, &to, 1);
            assert_eq!(result.err(), Some(LedgerError::InsufficientBalance));
        });
    }

    #[test]
    fn test_credit_overflow_rejected() {
        let env = Env::default();
        let (contract_id, holder) = setup(&env);
        let whale = Address::generate(&env);

        env.as_contract(&contract_id, || {
            set_balance(&env, &whale, i128::MAX);
            let result = prepare_move(&env, &holder, &whale, 1);
            assert_eq!(result.err(), Some(LedgerError::Overflow));
            assert_eq!(get_balance(&env, &holder), INITIAL_SUPPLY);
        });
    }
}
