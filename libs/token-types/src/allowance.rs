use soroban_sdk::{contracttype, Address};

/// Composite key for the allowance map: (owner, spender)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    /// Account whose balance may be spent
    pub owner: Address,
    /// Account allowed to spend it
    pub spender: Address,
}

impl AllowanceKey {
    pub fn new(owner: &Address, spender: &Address) -> Self {
        Self {
            owner: owner.clone(),
            spender: spender.clone(),
        }
    }
}
