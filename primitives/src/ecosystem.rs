//! Ecosystem Constants
//!
//! Pallet ids, time sentinels and unit scales shared by the dividend pallet and the
//! runtime that hosts it.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Wall-clock moment in seconds since the unix epoch.
pub type Moment = u64;

/// Sentinel moment meaning "never": an unscheduled slice or a distribution never paid.
pub const EPOCH_ZERO: Moment = 0;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used by `PalletId::into_account_truncating()` to derive the account that holds
/// deposited funds and signs outbound transfers.
pub mod pallet_ids {
  /// Dividend distribution pallet ID
  pub const DIVIDEND_PALLET_ID: &[u8; 8] = b"dividend";
}

pub mod params {
  use super::Balance;

  /// One whole USDU (2 decimals).
  pub const USDU_UNIT: Balance = 100;

  /// Upper bound for transfer memos carried by deposit notifications (bytes).
  pub const MAX_MEMO_LENGTH: u32 = 256;
}
