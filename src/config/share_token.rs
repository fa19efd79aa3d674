//! Display metadata for pool liquidity shares.

use crate::domain::Decimals;
use crate::error::AmmError;

/// Name, symbol and decimals stamped onto each pool's share token.
///
/// Shares are accounted internally by the pool, but wallets and indexers
/// still want to render them like any other fungible asset.
///
/// # Validation
///
/// - `name` and `symbol` must be non-empty.
/// - `symbol` must not exceed [`ShareTokenConfig::MAX_SYMBOL_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShareTokenConfig {
    name: String,
    symbol: String,
    decimals: Decimals,
}

impl ShareTokenConfig {
    /// Longest accepted ticker symbol, in bytes.
    pub const MAX_SYMBOL_LEN: usize = 11;

    /// Creates validated share-token metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the name or symbol is
    /// empty or the symbol is too long.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: Decimals,
    ) -> Result<Self, AmmError> {
        let config = Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all metadata invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on an empty name, an empty
    /// symbol, or an over-long symbol.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.name.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration("share name is empty"));
        }
        if self.symbol.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration("share symbol is empty"));
        }
        if self.symbol.len() > Self::MAX_SYMBOL_LEN {
            return Err(AmmError::InvalidConfiguration("share symbol is too long"));
        }
        Ok(())
    }

    /// Share token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Share token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Share token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}

impl Default for ShareTokenConfig {
    fn default() -> Self {
        Self {
            name: String::from("Hydra LP Share"),
            symbol: String::from("HLP"),
            decimals: Decimals::LEDGER,
        }
    }
}
