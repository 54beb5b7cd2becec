use soroban_sdk::contracterror;

/// Rejection reasons for ledger operations.
///
/// Every variant is a rejection of the request: the operation that returns
/// it performs no state change.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Amount is zero or negative
    InvalidAmount = 1,
    /// Debited account holds less than the requested amount
    InsufficientBalance = 2,
    /// Spender's allowance from the owner is less than the requested amount
    InsufficientAllowance = 3,
    /// Result of the arithmetic is not representable
    Overflow = 4,
}
