//! Tunables for fuzzy tag matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the fuzzy fallback picks among dictionary keys within tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// First key in definition order whose distance is within tolerance.
    #[default]
    First,
    /// Key with the smallest distance; ties go to the earlier definition.
    Closest,
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Closest => write!(f, "closest"),
        }
    }
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "closest" => Ok(Self::Closest),
            other => Err(format!("unknown match policy: {other}")),
        }
    }
}

/// Configuration for the tag normalizer's fuzzy fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Largest edit distance still treated as a match (default 2).
    pub tolerance: usize,
    /// Cleaned tags shorter than this skip fuzzy matching (default 4).
    pub min_fuzzy_len: usize,
    /// Tie-break between several keys within tolerance (default `First`).
    pub policy: MatchPolicy,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            tolerance: 2,
            min_fuzzy_len: 4,
            policy: MatchPolicy::First,
        }
    }
}

impl NormalizerConfig {
    /// Parses configuration from environment variables.
    ///
    /// Falls back to defaults when env vars not set or invalid.
    ///
    /// # Environment Variables
    ///
    /// - `GALTAGS_FUZZY_TOLERANCE` (usize, default 2)
    /// - `GALTAGS_FUZZY_MIN_LEN` (usize, default 4)
    /// - `GALTAGS_MATCH_POLICY` (`first` or `closest`, default `first`)
    ///
    /// # Examples
    ///
    /// ```
    /// use galtags::NormalizerConfig;
    ///
    /// let config = NormalizerConfig::from_env();
    /// assert!(config.min_fuzzy_len > 0);
    /// ```
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let tolerance = std::env::var("GALTAGS_FUZZY_TOLERANCE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.tolerance);

        let min_fuzzy_len = std::env::var("GALTAGS_FUZZY_MIN_LEN")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.min_fuzzy_len);

        let policy = std::env::var("GALTAGS_MATCH_POLICY")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.policy);

        Self {
            tolerance,
            min_fuzzy_len,
            policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 3] = [
        "GALTAGS_FUZZY_TOLERANCE",
        "GALTAGS_FUZZY_MIN_LEN",
        "GALTAGS_MATCH_POLICY",
    ];

    fn clear_vars() {
        for var in VARS {
            // SAFETY: env-mutating tests are serialized with #[serial]
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    fn default_matches_reference_thresholds() {
        let config = NormalizerConfig::default();
        assert_eq!(config.tolerance, 2);
        assert_eq!(config.min_fuzzy_len, 4);
        assert_eq!(config.policy, MatchPolicy::First);
    }

    #[test]
    #[serial]
    fn from_env_without_vars_uses_defaults() {
        clear_vars();
        assert_eq!(NormalizerConfig::from_env(), NormalizerConfig::default());
    }

    #[test]
    #[serial]
    fn from_env_reads_all_vars() {
        clear_vars();
        unsafe {
            std::env::set_var("GALTAGS_FUZZY_TOLERANCE", "1");
            std::env::set_var("GALTAGS_FUZZY_MIN_LEN", "6");
            std::env::set_var("GALTAGS_MATCH_POLICY", "Closest");
        }

        let config = NormalizerConfig::from_env();
        clear_vars();

        assert_eq!(config.tolerance, 1);
        assert_eq!(config.min_fuzzy_len, 6);
        assert_eq!(config.policy, MatchPolicy::Closest);
    }

    #[test]
    #[serial]
    fn from_env_ignores_invalid_values() {
        clear_vars();
        unsafe {
            std::env::set_var("GALTAGS_FUZZY_TOLERANCE", "lots");
            std::env::set_var("GALTAGS_MATCH_POLICY", "nearest");
        }

        let config = NormalizerConfig::from_env();
        clear_vars();

        assert_eq!(config.tolerance, 2);
        assert_eq!(config.policy, MatchPolicy::First);
    }

    #[test]
    fn match_policy_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MatchPolicy::Closest).unwrap(), r#""closest""#);
        assert_eq!(MatchPolicy::First.to_string(), "first");
    }
}
