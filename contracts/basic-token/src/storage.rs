use soroban_sdk::{contracttype, Address, Env};
use token_types::AllowanceKey;

// ============================================================================
// SOROBAN RESOURCE LIMITS - Footprint of ledger operations:
// ============================================================================
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design:
// - Total supply lives in instance storage; every entry point extends the
//   instance TTL so the contract stays live while it is in use
// - Each balance (~40 bytes) is a separate persistent entry
// - Each allowance (~80 bytes) is a separate persistent entry
// - Zero entries are removed, so an absent key and a zero value are the
//   same state
//
// Per-operation footprint:
// - transfer: 2 balance entries (1 when sending to self)
// - transfer_from: 2 balance entries + 1 allowance entry
// ============================================================================

/// Storage keys for the token contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Total seeded supply (Instance storage)
    TotalSupply,
    /// Account balance: Address -> i128 (Persistent storage)
    Balance(Address),
    /// Allowance: (owner, spender) -> i128 (Persistent storage)
    Allowance(AllowanceKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

/// Read a persistent amount, zero when absent
fn get_amount(env: &Env, key: &DataKey) -> i128 {
    match env.storage().persistent().get::<DataKey, i128>(key) {
        Some(amount) => {
            extend_persistent_ttl(env, key);
            amount
        }
        None => 0,
    }
}

/// Write a persistent amount, removing the entry when it reaches zero
fn set_amount(env: &Env, key: &DataKey, amount: i128) {
    if amount == 0 {
        env.storage().persistent().remove(key);
    } else {
        env.storage().persistent().set(key, &amount);
        extend_persistent_ttl(env, key);
    }
}

// === Total supply ===

pub fn get_total_supply(env: &Env) -> i128 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    extend_instance_ttl(env);
}

// === Balance ===

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    get_amount(env, &DataKey::Balance(account.clone()))
}

pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    set_amount(env, &DataKey::Balance(account.clone()), amount);
}

#[cfg(test)]
pub fn has_balance(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Balance(account.clone()))
}

// === Allowance ===

pub fn get_allowance(env: &Env, key: &AllowanceKey) -> i128 {
    get_amount(env, &DataKey::Allowance(key.clone()))
}

pub fn set_allowance(env: &Env, key: &AllowanceKey, amount: i128) {
    set_amount(env, &DataKey::Allowance(key.clone()), amount);
}

#[cfg(test)]
pub fn has_allowance(env: &Env, key: &AllowanceKey) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Allowance(key.clone()))
}
