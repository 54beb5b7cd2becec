// ============================================================================
// SUPPLY SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Seed credits exactly the initial supply to one account
// 2. transfer and transfer_from move value; the sum of balances is constant
// 3. Total supply never changes after seeding
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::{certora_specs::model::LedgerSnapshot, invariants, BasicToken};

/// RULE: Seed credits the full supply to the recipient and nobody else
#[cfg(feature = "certora")]
#[rule]
pub fn seed_credits_full_supply(env: Env, recipient: Address, other: Address) {
    use token_types::INITIAL_SUPPLY;

    cvlr_assume!(recipient != other);

    BasicToken::__constructor(env.clone(), recipient.clone());

    cvlr_assert!(BasicToken::balance_of(env.clone(), recipient) == INITIAL_SUPPLY);
    cvlr_assert!(BasicToken::balance_of(env.clone(), other) == 0);
    cvlr_assert!(BasicToken::total_supply(env) == INITIAL_SUPPLY);
}

/// RULE: A successful transfer keeps the sum of the two balances
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_conserves_balances(
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

    cvlr_assume!(result.is_ok());
    cvlr_assert!(invariants::supply_conserved(
        before.owner_balance,
        before.to_balance,
        after.owner_balance,
        after.to_balance,
    ));
    cvlr_assert!(after.total_supply == before.total_supply);
}

/// RULE: A successful transfer between distinct accounts moves exactly `amount`
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_moves_exact_amount(
    env: Env,
    holder: Address,
    caller: Address,
    to: Address,
    amount: i128,
) {
    cvlr_assume!(caller != to);
    BasicToken::__constructor(env.clone(), holder);

    let before = LedgerSnapshot::read(&env, &caller, &caller, &to);
    let result = BasicToken::transfer(env.clone(), caller.clone(), amount, to.clone());
    let after = LedgerSnapshot::read(&env, &caller, &caller, &to);

    cvlr_assume!(result.is_ok());
    cvlr_assert!(invariants::move_exact(
        before.owner_balance,
        before.to_balance,
        after.owner_balance,
        after.to_balance,
        amount,
    ));
}

/// RULE: A successful transfer_from keeps the sum of the owner and recipient balances
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_from_conserves_balances(
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
    cvlr_assert!(invariants::supply_conserved(
        before.owner_balance,
        before.to_balance,
        after.owner_balance,
        after.to_balance,
    ));
    cvlr_assert!(after.total_supply == before.total_supply);
}

/// RULE (sanity): a transfer can succeed
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_reachable(env: Env, holder: Address, to: Address, amount: i128) {
    BasicToken::__constructor(env.clone(), holder.clone());
    let result = BasicToken::transfer(env, holder, amount, to);
    cvlr_satisfy!(result.is_ok());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::certora_specs::model::LedgerSnapshot;
    use crate::{invariants, BasicToken, BasicTokenClient};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};
    use token_types::{INITIAL_SUPPLY, ONE_TOKEN};

    fn setup<'a>(env: &Env) -> (BasicTokenClient<'a>, Address) {
        env.mock_all_auths();
        let holder = Address::generate(env);
        let contract_id = env.register(BasicToken, (holder.clone(),));
        (BasicTokenClient::new(env, &contract_id), holder)
    }

    #[test]
    fn test_seed_credits_full_supply() {
        let env = Env::default();
        let (client, holder) = setup(&env);
        let other = Address::generate(&env);

        assert_eq!(client.balance_of(&holder), INITIAL_SUPPLY);
        assert_eq!(client.balance_of(&other), 0);
        assert_eq!(client.total_supply(), INITIAL_SUPPLY);
    }

    #[test]
    fn test_transfer_conserves_balances() {
        let env = Env::default();
        let (client, holder) = setup(&env);
        let to = Address::generate(&env);
        let amount = 400 * ONE_TOKEN;

        let before = LedgerSnapshot::capture(&env, &client.address, &holder, &holder, &to);
        client.transfer(&holder, &amount, &to);
        let after = LedgerSnapshot::capture(&env, &client.address, &holder, &holder, &to);

        assert!(invariants::supply_conserved(
            before.owner_balance,
            before.to_balance,
            after.owner_balance,
            after.to_balance,
        ));
        assert!(invariants::move_exact(
            before.owner_balance,
            before.to_balance,
            after.owner_balance,
            after.to_balance,
            amount,
        ));
        assert_eq!(after.total_supply, before.total_supply);
    }

    #[test]
    fn test_self_transfer_conserves_balance() {
        let env = Env::default();
        let (client, holder) = setup(&env);

        let before = LedgerSnapshot::capture(&env, &client.address, &holder, &holder, &holder);
        client.transfer(&holder, &ONE_TOKEN, &holder);
        let after = LedgerSnapshot::capture(&env, &client.address, &holder, &holder, &holder);

        assert!(invariants::supply_conserved(
            before.owner_balance,
            before.to_balance,
            after.owner_balance,
            after.to_balance,
        ));
        assert_eq!(before, after);
    }

    #[test]
    fn test_transfer_from_conserves_balances() {
        let env = Env::default();
        let (client, owner) = setup(&env);
        let spender = Address::generate(&env);
        let to = Address::generate(&env);

        client.approve(&owner, &(100 * ONE_TOKEN), &spender);

        let before = LedgerSnapshot::capture(&env, &client.address, &owner, &spender, &to);
        client.transfer_from(&spender, &(60 * ONE_TOKEN), &to, &owner);
        let after = LedgerSnapshot::capture(&env, &client.address, &owner, &spender, &to);

        assert!(invariants::supply_conserved(
            before.owner_balance,
            before.to_balance,
            after.owner_balance,
            after.to_balance,
        ));
        assert_eq!(after.spender_balance, before.spender_balance);
        assert_eq!(after.total_supply, INITIAL_SUPPLY);
    }
}
