use crate::{common::error::AppError, domain::policy::OverdraftPolicy};

/// Environment variable that selects the overdraft policy for new accounts.
pub const OVERDRAFT_ENV: &str = "BANK_LEDGER_OVERDRAFT";

/// Runtime settings for the batch runner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Policy given to every account opened during the run.
    pub overdraft: OverdraftPolicy,
}

impl LedgerConfig {
    /// Builds the config from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; missing keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LedgerConfig::default();
        if let Some(raw) = lookup(OVERDRAFT_ENV) {
            config.overdraft = raw.parse().map_err(AppError::Config)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_keeps_strict_default() {
        let config = LedgerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.overdraft, OverdraftPolicy::Forbid);
    }

    #[test]
    fn variable_selects_policy() {
        let config = LedgerConfig::from_lookup(|key| {
            (key == OVERDRAFT_ENV).then(|| "allow".to_string())
        })
        .unwrap();
        assert_eq!(config.overdraft, OverdraftPolicy::Allow);
    }

    #[test]
    fn invalid_value_is_a_config_error() {
        let err = LedgerConfig::from_lookup(|_| Some("maybe".into())).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
