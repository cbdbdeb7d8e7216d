use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The accounts offered by the account selector. Presentation-only: the evaluation core
/// never looks at which account is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountId {
    Account101,
    Account205,
    Account309,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Unknown account '{0}'. Expected one of: Account_101, Account_205, Account_309.")]
    Unknown(String),
}

/// Precomputed attribution narrative shown for a selected account.
pub const RISK_FACTOR_HEADING: &str = "Key contributing factors identified by SHAP:";
pub const RISK_FACTORS: [&str; 4] = [
    "High ERC20 transaction frequency",
    "Abnormally short transaction intervals",
    "Large Ether value movements",
    "High interaction with multiple addresses",
];

impl AccountId {
    pub const ALL: [AccountId; 3] = [Self::Account101, Self::Account205, Self::Account309];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Account101 => "Account_101",
            Self::Account205 => "Account_205",
            Self::Account309 => "Account_309",
        }
    }

    /// The narrative is static and currently identical for every account.
    pub fn risk_factors(self) -> &'static [&'static str] {
        &RISK_FACTORS
    }
}

impl FromStr for AccountId {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| AccountError::Unknown(s.to_string()))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
