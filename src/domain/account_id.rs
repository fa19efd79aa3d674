//! Ledger account identity.

use core::fmt;

use super::PoolId;

/// Tag written into the leading bytes of pool-derived accounts.
const POOL_ACCOUNT_TAG: [u8; 8] = *b"hydrapl\0";

/// An account on the [`AssetLedger`](crate::traits::AssetLedger): a trader,
/// a liquidity provider, a pool's reserve holder, or the router's
/// spender identity.
///
/// Caller authentication is out of scope: whoever invokes an operation
/// names the `AccountId` it acts for.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{AccountId, PoolId};
///
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// let pool = AccountId::for_pool(PoolId::new(0));
/// assert_ne!(alice, pool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Deterministic account holding the reserves of pool `id`.
    #[must_use]
    pub fn for_pool(id: PoolId) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&POOL_ACCOUNT_TAG);
        bytes[24..].copy_from_slice(&id.get().to_be_bytes());
        Self(bytes)
    }

    /// Returns `true` for accounts derived by [`for_pool`](Self::for_pool).
    ///
    /// Pool accounts only ever hold reserves; the engine refuses them as
    /// a trader, liquidity provider, share holder or payout recipient.
    #[must_use]
    pub fn is_pool_account(&self) -> bool {
        self.0[..8] == POOL_ACCOUNT_TAG
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
