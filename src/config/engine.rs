//! Protocol constants shared by every pool of an exchange.

use alloy_primitives::U256;

use crate::domain::{FeeTier, Liquidity, DEFAULT_FEE_DENOMINATOR, MAX_WIRE_FEE};
use crate::error::AmmError;

/// Default fee ceiling: one unit below the denominator.
const DEFAULT_MAX_FEE: u32 = DEFAULT_FEE_DENOMINATOR - 1;

/// Default number of shares locked on a pool's first deposit.
const DEFAULT_MINIMUM_LIQUIDITY: u64 = 1_000;

/// Engine-wide configuration.
///
/// # Validation
///
/// - `fee_denominator` is non-zero and fits the `uint24` wire range.
/// - `max_fee` is non-zero and strictly below `fee_denominator`.
///
/// # Examples
///
/// ```
/// use multipool_amm::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.fee_denominator(), 10_000);
/// assert!(config.validate().is_ok());
/// assert!(config.fee_tier(1_000).is_ok());
/// assert!(config.fee_tier(10_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct EngineConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_fee_denominator"))]
    fee_denominator: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_max_fee"))]
    max_fee: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_minimum_liquidity"))]
    minimum_liquidity: u64,
}

#[cfg(feature = "serde")]
const fn default_fee_denominator() -> u32 {
    DEFAULT_FEE_DENOMINATOR
}

#[cfg(feature = "serde")]
const fn default_max_fee() -> u32 {
    DEFAULT_MAX_FEE
}

#[cfg(feature = "serde")]
const fn default_minimum_liquidity() -> u64 {
    DEFAULT_MINIMUM_LIQUIDITY
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fee_denominator: DEFAULT_FEE_DENOMINATOR,
            max_fee: DEFAULT_MAX_FEE,
            minimum_liquidity: DEFAULT_MINIMUM_LIQUIDITY,
        }
    }
}

impl EngineConfig {
    /// Creates and validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any constraint fails.
    pub fn new(fee_denominator: u32, max_fee: u32, minimum_liquidity: u64) -> Result<Self, AmmError> {
        let config = Self {
            fee_denominator,
            max_fee,
            minimum_liquidity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any constraint fails.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.fee_denominator == 0 {
            return Err(AmmError::InvalidConfiguration(
                "fee denominator must be non-zero",
            ));
        }
        if self.fee_denominator > MAX_WIRE_FEE {
            return Err(AmmError::InvalidConfiguration(
                "fee denominator exceeds uint24 range",
            ));
        }
        if self.max_fee == 0 {
            return Err(AmmError::InvalidConfiguration("fee ceiling must be non-zero"));
        }
        if self.max_fee >= self.fee_denominator {
            return Err(AmmError::InvalidConfiguration(
                "fee ceiling must be below the fee denominator",
            ));
        }
        Ok(())
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn fee_denominator(&self) -> u32 {
        self.fee_denominator
    }

    /// Returns the largest accepted fee numerator.
    #[must_use]
    pub const fn max_fee(&self) -> u32 {
        self.max_fee
    }

    /// Returns the number of shares locked on a pool's first deposit.
    #[must_use]
    pub fn minimum_liquidity(&self) -> Liquidity {
        Liquidity::new(U256::from(self.minimum_liquidity))
    }

    /// Builds a [`FeeTier`] for `fee` under this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] unless `0 < fee <= max_fee`.
    pub fn fee_tier(&self, fee: u32) -> Result<FeeTier, AmmError> {
        FeeTier::new(fee, self.fee_denominator, self.max_fee)
    }
}

/// Failure to load an [`EngineConfig`] from TOML.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has unknown keys.
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The document parsed but violates a constraint.
    #[error("invalid engine config: {0}")]
    Invalid(#[from] AmmError),
}

#[cfg(feature = "serde")]
impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// ```
    /// use multipool_amm::config::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str("max-fee = 500\n").expect("valid config");
    /// assert_eq!(config.max_fee(), 500);
    /// assert_eq!(config.fee_denominator(), 10_000);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Parse`] for malformed TOML or unknown keys.
    /// - [`ConfigError::Invalid`] if the parsed values fail validation.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fee_denominator(), 10_000);
        assert_eq!(config.max_fee(), 9_999);
        assert_eq!(config.minimum_liquidity(), Liquidity::from(1_000u64));
    }

    #[test]
    fn zero_denominator_rejected() {
        assert!(matches!(
            EngineConfig::new(0, 1, 1_000),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn oversized_denominator_rejected() {
        assert!(matches!(
            EngineConfig::new(MAX_WIRE_FEE + 1, 1, 1_000),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn ceiling_at_denominator_rejected() {
        assert!(matches!(
            EngineConfig::new(10_000, 10_000, 1_000),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_ceiling_rejected() {
        assert!(matches!(
            EngineConfig::new(10_000, 0, 1_000),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn fee_tier_respects_ceiling() {
        let Ok(config) = EngineConfig::new(10_000, 3_000, 1_000) else {
            panic!("valid config");
        };
        assert!(config.fee_tier(3_000).is_ok());
        assert_eq!(
            config.fee_tier(3_001),
            Err(AmmError::InvalidFee {
                fee: 3_001,
                max: 3_000
            })
        );
        assert!(config.fee_tier(0).is_err());
    }

    #[cfg(feature = "serde")]
    mod toml_loading {
        use super::*;

        #[test]
        fn full_document() {
            let doc = "fee-denominator = 1000000\nmax-fee = 100000\nminimum-liquidity = 10\n";
            let Ok(config) = EngineConfig::from_toml_str(doc) else {
                panic!("expected Ok");
            };
            assert_eq!(config.fee_denominator(), 1_000_000);
            assert_eq!(config.max_fee(), 100_000);
            assert_eq!(config.minimum_liquidity(), Liquidity::from(10u64));
        }

        #[test]
        fn empty_document_is_default() {
            let Ok(config) = EngineConfig::from_toml_str("") else {
                panic!("expected Ok");
            };
            assert_eq!(config, EngineConfig::default());
        }

        #[test]
        fn unknown_key_rejected() {
            let result = EngineConfig::from_toml_str("fee = 30\n");
            assert!(matches!(result, Err(ConfigError::Parse(_))));
        }

        #[test]
        fn invalid_values_rejected() {
            let result = EngineConfig::from_toml_str("max-fee = 10000\n");
            assert!(matches!(
                result,
                Err(ConfigError::Invalid(AmmError::InvalidConfiguration(_)))
            ));
        }

        #[test]
        fn serializes_back() {
            let Ok(text) = toml::to_string(&EngineConfig::default()) else {
                panic!("serializable");
            };
            assert!(text.contains("fee-denominator = 10000"));
            let Ok(parsed) = EngineConfig::from_toml_str(&text) else {
                panic!("round trip");
            };
            assert_eq!(parsed, EngineConfig::default());
        }
    }
}
