#![no_std]

mod allowance;
mod balance;
mod storage;

#[cfg(any(test, feature = "certora"))]
mod certora_specs;
#[cfg(any(test, feature = "certora"))]
mod invariants;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use storage::{extend_instance_ttl, get_allowance, get_balance, get_total_supply};
use token_types::{AllowanceKey, LedgerError, DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};

#[contract]
pub struct BasicToken;

#[contractimpl]
impl BasicToken {
    /// Seed the initial supply to `recipient`. Runs once, at deployment.
    pub fn __constructor(env: Env, recipient: Address) {
        balance::seed(&env, &recipient);
    }

    /// Move `amount` from the caller's balance to `to`
    pub fn transfer(
        env: Env,
        caller: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), LedgerError> {
        extend_instance_ttl(&env);
        caller.require_auth();
        check_amount(&env, amount)?;

        balance::prepare_move(&env, &caller, &to, amount)?.apply(&env);
        Ok(())
    }

    /// Allow `spender` to move `amount` more of the caller's balance
    ///
    /// # Returns
    /// The allowance after the increase
    pub fn approve(
        env: Env,
        caller: Address,
        amount: i128,
        spender: Address,
    ) -> Result<i128, LedgerError> {
        extend_instance_ttl(&env);
        caller.require_auth();
        check_amount(&env, amount)?;

        allowance::increase(&env, &caller, &spender, amount)
    }

    /// Move `amount` from `owner` to `to`, spending the caller's allowance
    ///
    /// # Arguments
    /// * `caller` - The spender; must hold an allowance from `owner`
    /// * `amount` - Base units to move
    /// * `to` - Account credited
    /// * `owner` - Account debited
    pub fn transfer_from(
        env: Env,
        caller: Address,
        amount: i128,
        to: Address,
        owner: Address,
    ) -> Result<(), LedgerError> {
        extend_instance_ttl(&env);
        caller.require_auth();
        check_amount(&env, amount)?;

        // Validate both halves before writing either
        let spend = allowance::prepare_spend(&env, &owner, &caller, amount)?;
        let transfer = balance::prepare_move(&env, &owner, &to, amount)?;

        spend.apply(&env);
        transfer.apply(&env);
        Ok(())
    }

    // === View Functions ===

    /// Get an account's balance (zero if never credited)
    pub fn balance_of(env: Env, account: Address) -> i128 {
        extend_instance_ttl(&env);
        get_balance(&env, &account)
    }

    /// Get what `spender` may still move out of `owner`'s balance
    pub fn allowance_of(env: Env, owner: Address, spender: Address) -> i128 {
        extend_instance_ttl(&env);
        get_allowance(&env, &AllowanceKey::new(&owner, &spender))
    }

    /// Get the total supply seeded at deployment
    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, TOKEN_SYMBOL)
    }
}

fn check_amount(env: &Env, amount: i128) -> Result<(), LedgerError> {
    token_math::require_positive(amount).map_err(|err| {
        log!(env, "amount must be positive", amount);
        err
    })
}
