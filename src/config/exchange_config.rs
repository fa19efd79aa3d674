//! Top-level exchange configuration.

use super::ShareTokenConfig;
use crate::domain::{AccountId, AssetId};
use crate::error::AmmError;

/// Account the router uses as its spender identity by default.
pub const DEFAULT_ROUTER_ACCOUNT: AccountId = AccountId::from_bytes(*b"hydra-router\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0");

/// Immutable parameters of one exchange deployment.
///
/// # Fields
///
/// - `base_asset`: the asset every pool pairs against.
///   Defaults to [`AssetId::NATIVE`].
/// - `router_account`: the spender callers approve for routed swaps.
/// - `share_token`: metadata applied to every pool's shares.
///
/// # Validation
///
/// - `base_asset` must not be [`AssetId::NULL`].
/// - `router_account` must not collide with a pool reserve account.
/// - `share_token` must itself validate.
///
/// # Examples
///
/// ```
/// use hydra_dex::config::ExchangeConfig;
/// use hydra_dex::domain::AssetId;
///
/// let config = ExchangeConfig::default();
/// assert_eq!(config.base_asset(), AssetId::NATIVE);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeConfig {
    base_asset: AssetId,
    router_account: AccountId,
    share_token: ShareTokenConfig,
}

impl ExchangeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any invariant fails.
    pub fn new(
        base_asset: AssetId,
        router_account: AccountId,
        share_token: ShareTokenConfig,
    ) -> Result<Self, AmmError> {
        let config = Self {
            base_asset,
            router_account,
            share_token,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on a null base asset, a
    /// router account shaped like a pool account, or bad share metadata.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.base_asset.is_null() {
            return Err(AmmError::InvalidConfiguration("base asset is null"));
        }
        if self.router_account.is_pool_account() {
            return Err(AmmError::InvalidConfiguration(
                "router account collides with pool accounts",
            ));
        }
        self.share_token.validate()
    }

    /// Returns a copy with a different base asset.
    #[must_use]
    pub fn with_base_asset(mut self, base_asset: AssetId) -> Self {
        self.base_asset = base_asset;
        self
    }

    /// Returns a copy with a different router account.
    #[must_use]
    pub fn with_router_account(mut self, router_account: AccountId) -> Self {
        self.router_account = router_account;
        self
    }

    /// Returns a copy with different share metadata.
    #[must_use]
    pub fn with_share_token(mut self, share_token: ShareTokenConfig) -> Self {
        self.share_token = share_token;
        self
    }

    /// The asset every pool pairs against.
    #[must_use]
    pub const fn base_asset(&self) -> AssetId {
        self.base_asset
    }

    /// The router's spender identity.
    #[must_use]
    pub const fn router_account(&self) -> AccountId {
        self.router_account
    }

    /// Share metadata applied to new pools.
    #[must_use]
    pub const fn share_token(&self) -> &ShareTokenConfig {
        &self.share_token
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            base_asset: AssetId::NATIVE,
            router_account: DEFAULT_ROUTER_ACCOUNT,
            share_token: ShareTokenConfig::default(),
        }
    }
}
