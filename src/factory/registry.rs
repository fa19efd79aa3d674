//! Pool registry: at most one pool per paired asset.

use std::collections::HashMap;

use crate::config::ShareTokenConfig;
use crate::domain::{AssetId, PoolId};
use crate::error::{AmmError, Result};
use crate::pools::Pool;

/// Creates pools and resolves assets to them.
///
/// The factory owns the pool arena; a [`PoolId`] is an index into it.
/// Entries are created once and never removed or reassigned.
///
/// # Example
///
/// ```rust
/// use hydra_dex::config::ShareTokenConfig;
/// use hydra_dex::domain::AssetId;
/// use hydra_dex::factory::Factory;
///
/// let token = AssetId::from_bytes([7; 32]);
/// let mut factory = Factory::new(AssetId::NATIVE, ShareTokenConfig::default());
///
/// let id = factory.create_pool(token).expect("fresh asset");
/// assert_eq!(factory.get_pool(token), Some(id));
/// assert!(factory.create_pool(token).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Factory {
    base_asset: AssetId,
    share_token: ShareTokenConfig,
    pools: Vec<Pool>,
    pool_of: HashMap<AssetId, PoolId>,
}

impl Factory {
    /// Creates an empty registry pairing every pool against `base_asset`.
    #[must_use]
    pub fn new(base_asset: AssetId, share_token: ShareTokenConfig) -> Self {
        Self {
            base_asset,
            share_token,
            pools: Vec::new(),
            pool_of: HashMap::new(),
        }
    }

    /// The asset every pool pairs against.
    #[must_use]
    pub const fn base_asset(&self) -> AssetId {
        self.base_asset
    }

    /// Registers an empty pool for `asset`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset` is null or the base asset.
    /// - [`AmmError::PoolAlreadyExists`] if `asset` already has a pool.
    pub fn create_pool(&mut self, asset: AssetId) -> Result<PoolId> {
        if asset.is_null() {
            return Err(AmmError::InvalidAsset {
                asset,
                reason: "null asset",
            });
        }
        if asset == self.base_asset {
            return Err(AmmError::InvalidAsset {
                asset,
                reason: "base asset cannot be paired with itself",
            });
        }
        if let Some(&pool) = self.pool_of.get(&asset) {
            return Err(AmmError::PoolAlreadyExists { asset, pool });
        }

        let index = u64::try_from(self.pools.len())
            .map_err(|_| AmmError::Overflow("pool count exceeds u64"))?;
        let id = PoolId::new(index);
        self.pools
            .push(Pool::new(id, self.base_asset, asset, self.share_token.clone()));
        self.pool_of.insert(asset, id);

        tracing::info!(pool = %id, %asset, base = %self.base_asset, "pool created");
        Ok(id)
    }

    /// Pool registered for `asset`, if any.  Never fails.
    #[must_use]
    pub fn get_pool(&self, asset: AssetId) -> Option<PoolId> {
        self.pool_of.get(&asset).copied()
    }

    /// Borrows a pool by id.
    ///
    /// # Errors
    ///
    /// [`AmmError::UnknownPool`] if `id` was not issued by this factory.
    pub fn pool(&self, id: PoolId) -> Result<&Pool> {
        usize::try_from(id.get())
            .ok()
            .and_then(|i| self.pools.get(i))
            .ok_or(AmmError::UnknownPool(id))
    }

    /// Mutably borrows a pool by id.
    ///
    /// # Errors
    ///
    /// [`AmmError::UnknownPool`] if `id` was not issued by this factory.
    pub fn pool_mut(&mut self, id: PoolId) -> Result<&mut Pool> {
        usize::try_from(id.get())
            .ok()
            .and_then(|i| self.pools.get_mut(i))
            .ok_or(AmmError::UnknownPool(id))
    }

    /// Borrows the pool registered for `asset`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] if `asset` has no pool.
    pub fn pool_for(&self, asset: AssetId) -> Result<&Pool> {
        let id = self.require(asset)?;
        self.pool(id)
    }

    /// Mutably borrows the pool registered for `asset`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] if `asset` has no pool.
    pub fn pool_for_mut(&mut self, asset: AssetId) -> Result<&mut Pool> {
        let id = self.require(asset)?;
        self.pool_mut(id)
    }

    /// Mutably borrows two distinct pools at once.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownPool`] if either id is unknown.
    /// - [`AmmError::InvalidConfiguration`] if `first == second`.
    pub fn pair_mut(&mut self, first: PoolId, second: PoolId) -> Result<(&mut Pool, &mut Pool)> {
        if first == second {
            return Err(AmmError::InvalidConfiguration(
                "a route cannot visit the same pool twice",
            ));
        }
        let a = self.index_of(first)?;
        let b = self.index_of(second)?;
        if a < b {
            let (left, right) = self.pools.split_at_mut(b);
            Ok((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.pools.split_at_mut(a);
            Ok((&mut right[0], &mut left[b]))
        }
    }

    /// Every pool, in creation order.
    pub fn all_pools(&self) -> impl ExactSizeIterator<Item = &Pool> + '_ {
        self.pools.iter()
    }

    /// Number of registered pools.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    fn require(&self, asset: AssetId) -> Result<PoolId> {
        self.get_pool(asset).ok_or(AmmError::PoolNotFound { asset })
    }

    fn index_of(&self, id: PoolId) -> Result<usize> {
        usize::try_from(id.get())
            .ok()
            .filter(|&i| i < self.pools.len())
            .ok_or(AmmError::UnknownPool(id))
    }
}
