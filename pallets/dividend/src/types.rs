use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use primitives::{Balance, EPOCH_ZERO, Moment};
use scale_info::TypeInfo;

/// Registry key of a distribution. Assigned from `NextDistributionId`, never reused.
pub type DistributionId = u64;

/// One pool of the distribution asset earmarked for phased payout.
#[derive(Clone, Copy, Debug, Decode, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen)]
pub struct Distribution {
  pub id: DistributionId,
  /// Scheduled release point; `EPOCH_ZERO` while unscheduled.
  pub slice_at: Moment,
  /// Time of the latest payout; `EPOCH_ZERO` if never paid.
  pub last_pay_time: Moment,
  /// Amount allocated at creation. Immutable.
  pub total_on_pay: Balance,
  /// Cumulative amount released so far. Never exceeds `total_on_pay`.
  pub total_payed: Balance,
}

impl Distribution {
  pub fn new(id: DistributionId, total_on_pay: Balance) -> Self {
    Self {
      id,
      slice_at: EPOCH_ZERO,
      last_pay_time: EPOCH_ZERO,
      total_on_pay,
      total_payed: 0,
    }
  }

  pub fn is_scheduled(&self) -> bool {
    self.slice_at != EPOCH_ZERO
  }

  pub fn remaining(&self) -> Balance {
    self.total_on_pay.saturating_sub(self.total_payed)
  }

  pub fn is_exhausted(&self) -> bool {
    self.total_payed >= self.total_on_pay
  }

  /// Cumulative payout after releasing `quantity`, or `None` if it would break the quota.
  pub fn payout_total(&self, quantity: Balance) -> Option<Balance> {
    self
      .total_payed
      .checked_add(quantity)
      .filter(|total| *total <= self.total_on_pay)
  }
}

/// Whether `distribute` accepts slice points that are not in the future.
#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  PartialEq,
  TypeInfo,
  MaxEncodedLen,
)]
pub enum SliceTimePolicy {
  /// Any `slice_at` is stored as given.
  #[default]
  Unchecked,
  /// `slice_at` must be strictly after the current time.
  FutureOnly,
}

/// What happens to a deposit whose asset is not the distribution asset.
#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  PartialEq,
  TypeInfo,
  MaxEncodedLen,
)]
pub enum ForeignDepositPolicy {
  /// Keep the funds on the pallet account without creating a distribution.
  #[default]
  Absorb,
  /// Send the funds back to the depositor.
  Bounce,
}
