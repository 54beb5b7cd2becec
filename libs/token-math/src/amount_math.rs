use token_types::LedgerError;

/// Reject zero and negative amounts
pub fn require_positive(amount: i128) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

/// Add `amount` to `current`, failing instead of wrapping
pub fn add_amount(current: i128, amount: i128) -> Result<i128, LedgerError> {
    current.checked_add(amount).ok_or(LedgerError::Overflow)
}

/// Subtract `amount` from `available`.
///
/// Returns `shortfall` when `available < amount`, so the result is never
/// below zero for non-negative inputs. The caller picks the error so the
/// same helper serves both balances and allowances.
pub fn sub_amount(
    available: i128,
    amount: i128,
    shortfall: LedgerError,
) -> Result<i128, LedgerError> {
    if available < amount {
        return Err(shortfall);
    }
    available.checked_sub(amount).ok_or(LedgerError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(1), Ok(()));
        assert_eq!(require_positive(0), Err(LedgerError::InvalidAmount));
        assert_eq!(require_positive(-5), Err(LedgerError::InvalidAmount));
        assert_eq!(require_positive(i128::MIN), Err(LedgerError::InvalidAmount));
    }

    #[test]
    fn test_add_amount() {
        assert_eq!(add_amount(100, 60), Ok(160));
        assert_eq!(add_amount(0, 0), Ok(0));
    }

    #[test]
    fn test_add_amount_overflow() {
        assert_eq!(add_amount(i128::MAX, 1), Err(LedgerError::Overflow));
        assert_eq!(add_amount(i128::MAX - 10, 10), Ok(i128::MAX));
    }

    #[test]
    fn test_sub_amount_exact() {
        assert_eq!(sub_amount(60, 60, LedgerError::InsufficientBalance), Ok(0));
        assert_eq!(sub_amount(100, 60, LedgerError::InsufficientBalance), Ok(40));
    }

    #[test]
    fn test_sub_amount_reports_chosen_shortfall() {
        assert_eq!(
            sub_amount(40, 1000, LedgerError::InsufficientAllowance),
            Err(LedgerError::InsufficientAllowance)
        );
        assert_eq!(
            sub_amount(0, 1, LedgerError::InsufficientBalance),
            Err(LedgerError::InsufficientBalance)
        );
    }
}
