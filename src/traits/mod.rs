//! Core trait abstractions.
//!
//! [`AssetLedger`] is the seam between the pricing/accounting engine and
//! the external fungible-asset ledger.  Everything else in the crate is
//! concrete.

mod asset_ledger;

pub use asset_ledger::AssetLedger;
