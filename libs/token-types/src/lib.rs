#![no_std]

mod allowance;
mod error;

pub use allowance::*;
pub use error::*;

/// Number of decimal places in one whole token
pub const DECIMALS: u32 = 7;

/// Base units in one whole token (10^DECIMALS)
pub const ONE_TOKEN: i128 = 10_000_000;

/// Supply credited to the seed recipient at deployment, in whole tokens.
/// Change this value to alter the initial token supply.
pub const INITIAL_SUPPLY_TOKENS: i128 = 1_000_000;

/// Supply credited to the seed recipient at deployment, in base units
pub const INITIAL_SUPPLY: i128 = INITIAL_SUPPLY_TOKENS * ONE_TOKEN;

pub const TOKEN_NAME: &str = "Basic Token";

pub const TOKEN_SYMBOL: &str = "BASIC";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_token_matches_decimals() {
        assert_eq!(ONE_TOKEN, 10i128.pow(DECIMALS));
    }

    #[test]
    fn test_initial_supply_in_base_units() {
        assert_eq!(INITIAL_SUPPLY, 10_000_000_000_000);
        assert_eq!(INITIAL_SUPPLY / ONE_TOKEN, INITIAL_SUPPLY_TOKENS);
    }
}
