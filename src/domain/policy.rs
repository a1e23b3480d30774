use std::fmt;
use std::str::FromStr;

use crate::common::money::Money;

/// Whether a debit may drive an account balance below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverdraftPolicy {
    /// Reject debits that would leave a negative balance.
    #[default]
    Forbid,
    /// Apply every debit unconditionally.
    Allow,
}

impl OverdraftPolicy {
    /// Whether a debit leaving `next` as the balance may go through.
    pub fn permits(&self, next: &Money) -> bool {
        match self {
            OverdraftPolicy::Forbid => !next.is_negative(),
            OverdraftPolicy::Allow => true,
        }
    }
}

impl FromStr for OverdraftPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forbid" => Ok(OverdraftPolicy::Forbid),
            "allow" => Ok(OverdraftPolicy::Allow),
            other => Err(format!("unknown overdraft policy '{other}' (expected allow|forbid)")),
        }
    }
}

impl fmt::Display for OverdraftPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverdraftPolicy::Forbid => f.write_str("forbid"),
            OverdraftPolicy::Allow => f.write_str("allow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_forbid() {
        assert_eq!(OverdraftPolicy::default(), OverdraftPolicy::Forbid);
    }

    #[test]
    fn forbid_rejects_only_negative_results() {
        assert!(OverdraftPolicy::Forbid.permits(&Money::zero()));
        assert!(OverdraftPolicy::Forbid.permits(&Money::from(1)));
        assert!(!OverdraftPolicy::Forbid.permits(&Money::from(-1)));
        assert!(OverdraftPolicy::Allow.permits(&Money::from(-1)));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Allow ".parse::<OverdraftPolicy>(), Ok(OverdraftPolicy::Allow));
        assert_eq!("FORBID".parse::<OverdraftPolicy>(), Ok(OverdraftPolicy::Forbid));
        assert!("sometimes".parse::<OverdraftPolicy>().is_err());
    }
}
