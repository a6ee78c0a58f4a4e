//! Dividend Pallet
//!
//! Turns deposits of a single designated asset into distribution records. The funding
//! authority schedules (`distribute`) or cancels them, the payout authority releases them
//! to recipients in parts (`pay`) without ever exceeding the deposited amount.
//!
//! Deposits arrive as ledger notifications, either through the [`OnLedgerTransfer`] hook
//! called by runtime glue or through the `notify_deposit` call signed by the ledger account.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::{FungibleLedger, TransferMemo, ValueTransfer};

pub mod types;
pub use types::{Distribution, DistributionId, ForeignDepositPolicy, SliceTimePolicy};

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::dividend";

/// Notification of a completed transfer on a token ledger.
///
/// `ledger` identifies the ledger that executed the transfer; the transfer itself has
/// already been authorized and applied by that ledger.
pub trait OnLedgerTransfer<AccountId, AssetId, Balance> {
  fn on_transfer(
    ledger: &AccountId,
    from: &AccountId,
    to: &AccountId,
    asset: AssetId,
    amount: Balance,
    memo: &[u8],
  ) -> frame::deps::sp_runtime::DispatchResult;
}

impl<AccountId, AssetId, Balance> OnLedgerTransfer<AccountId, AssetId, Balance> for () {
  fn on_transfer(
    _ledger: &AccountId,
    _from: &AccountId,
    _to: &AccountId,
    _asset: AssetId,
    _amount: Balance,
    _memo: &[u8],
  ) -> frame::deps::sp_runtime::DispatchResult {
    Ok(())
  }
}

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// An asset other than `Config::DistributionAsset` that accounts can hold.
  fn foreign_asset() -> primitives::AssetKind;

  fn ensure_funded(
    who: &AccountId,
    asset: primitives::AssetKind,
    amount: primitives::Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, OnLedgerTransfer, TransferMemo, ValueTransfer, WeightInfo};
  use crate::types::{Distribution, DistributionId, ForeignDepositPolicy, SliceTimePolicy};
  use frame::prelude::*;
  use polkadot_sdk::{
    frame_support::{
      PalletId,
      storage::with_storage_layer,
      traits::{EnsureOrigin, UnixTime},
    },
    sp_runtime::traits::AccountIdConversion,
  };
  use primitives::{AssetKind, Balance, Moment};

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Ledger access used for payouts, refunds and bounced deposits
    type Transfer: ValueTransfer<Self::AccountId, AssetKind, Balance>;

    /// Wall clock for `last_pay_time` and the slice policy
    type UnixTime: UnixTime;

    /// Funding authority: schedules and cancels distributions
    type FundingOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Payout-execution authority: releases funds to recipients
    type PayoutOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Origin that can change the pallet policies (e.g. Governance or Root)
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Account refunded when a distribution is cancelled
    type FundingAccount: Get<Self::AccountId>;

    /// Ledger account trusted to report deposits of the distribution asset
    type TokenLedger: Get<Self::AccountId>;

    /// The pallet ID; its derived account holds all deposited funds
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// The single asset accepted and disbursed by this pallet
    #[pallet::constant]
    type DistributionAsset: Get<AssetKind>;

    #[pallet::constant]
    type DefaultSlicePolicy: Get<SliceTimePolicy>;

    #[pallet::constant]
    type DefaultForeignDepositPolicy: Get<ForeignDepositPolicy>;

    /// Maximum length of a deposit memo
    #[pallet::constant]
    type MaxMemoLength: Get<u32>;

    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Distribution records by id.
  #[pallet::storage]
  #[pallet::getter(fn distribution)]
  pub type Distributions<T: Config> =
    StorageMap<_, Blake2_128Concat, DistributionId, Distribution, OptionQuery>;

  /// Id handed to the next distribution. Only ever grows.
  #[pallet::storage]
  #[pallet::getter(fn next_distribution_id)]
  pub type NextDistributionId<T> = StorageValue<_, DistributionId, ValueQuery>;

  #[pallet::storage]
  #[pallet::getter(fn slice_policy)]
  pub type SlicePolicy<T: Config> =
    StorageValue<_, SliceTimePolicy, ValueQuery, T::DefaultSlicePolicy>;

  #[pallet::storage]
  #[pallet::getter(fn foreign_deposit_policy)]
  pub type ForeignPolicy<T: Config> =
    StorageValue<_, ForeignDepositPolicy, ValueQuery, T::DefaultForeignDepositPolicy>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A deposit of the distribution asset opened a new distribution.
    DistributionCreated {
      id: DistributionId,
      depositor: T::AccountId,
      amount: Balance,
    },
    /// A distribution got its slice point.
    DistributionScheduled { id: DistributionId, slice_at: Moment },
    /// Part of a distribution was released.
    DividendPaid {
      id: DistributionId,
      to: T::AccountId,
      amount: Balance,
      total_payed: Balance,
    },
    /// An unscheduled distribution was removed and refunded.
    DistributionCancelled {
      id: DistributionId,
      refunded_to: T::AccountId,
      amount: Balance,
    },
    /// A deposit of another asset was kept without opening a distribution.
    ForeignDepositAbsorbed {
      from: T::AccountId,
      asset: AssetKind,
      amount: Balance,
    },
    /// A deposit of another asset was sent back to its depositor.
    ForeignDepositBounced {
      from: T::AccountId,
      asset: AssetKind,
      amount: Balance,
    },
    SlicePolicyUpdated {
      old_policy: SliceTimePolicy,
      new_policy: SliceTimePolicy,
    },
    ForeignDepositPolicyUpdated {
      old_policy: ForeignDepositPolicy,
      new_policy: ForeignDepositPolicy,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// No distribution with the given id.
    DistributionNotFound,
    /// The confirmation quantity differs from the distribution's total.
    QuantityMismatch,
    /// The payout would exceed the distribution's total.
    DistributionOverflow,
    /// The distribution is already scheduled.
    CannotCancelStarted,
    /// The deposit notification did not come from the distribution asset's ledger.
    WrongSourceLedger,
    /// The slice point is not in the future.
    SliceNotInFuture,
    /// Distribution ids are exhausted.
    DistributionIdOverflow,
    /// Zero-value deposits and payouts are refused.
    ZeroAmount,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Schedule a distribution at `slice_at`.
    ///
    /// `quantity` must equal the distribution's `total_on_pay`. It only confirms which
    /// record the caller means; nothing but `slice_at` is written.
    ///
    /// - `origin`: Must match `FundingOrigin`.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::distribute())]
    pub fn distribute(
      origin: OriginFor<T>,
      id: DistributionId,
      slice_at: Moment,
      quantity: Balance,
    ) -> DispatchResult {
      T::FundingOrigin::ensure_origin(origin)?;
      let future_only = Self::slice_policy() == SliceTimePolicy::FutureOnly;
      let now = Self::now();
      Self::update_distribution(id, |distribution| {
        ensure!(
          quantity == distribution.total_on_pay,
          Error::<T>::QuantityMismatch
        );
        ensure!(!future_only || slice_at > now, Error::<T>::SliceNotInFuture);
        distribution.slice_at = slice_at;
        Ok(())
      })?;
      log::debug!(target: LOG_TARGET, "distribution {id} scheduled at {slice_at}");
      Self::deposit_event(Event::DistributionScheduled { id, slice_at });
      Ok(())
    }

    /// Release `quantity` of a distribution to `to`.
    ///
    /// Rejected as a whole if the cumulative payout would exceed `total_on_pay`, or if
    /// `quantity` is zero.
    ///
    /// - `origin`: Must match `PayoutOrigin`.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::pay())]
    pub fn pay(
      origin: OriginFor<T>,
      id: DistributionId,
      to: T::AccountId,
      quantity: Balance,
    ) -> DispatchResult {
      T::PayoutOrigin::ensure_origin(origin)?;
      ensure!(quantity > 0, Error::<T>::ZeroAmount);
      let now = Self::now();
      let total_payed = Self::update_distribution(id, |distribution| {
        let total_payed = distribution
          .payout_total(quantity)
          .ok_or(Error::<T>::DistributionOverflow)?;
        distribution.last_pay_time = now;
        distribution.total_payed = total_payed;
        Ok(total_payed)
      })?;
      T::Transfer::transfer(
        &Self::account_id(),
        &to,
        T::DistributionAsset::get(),
        quantity,
        TransferMemo::PayDividends,
      )?;
      Self::deposit_event(Event::DividendPaid {
        id,
        to,
        amount: quantity,
        total_payed,
      });
      Ok(())
    }

    /// Cancel an unscheduled distribution and refund it to `FundingAccount`.
    ///
    /// - `origin`: Must match `FundingOrigin`.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::cancel())]
    pub fn cancel(origin: OriginFor<T>, id: DistributionId) -> DispatchResult {
      T::FundingOrigin::ensure_origin(origin)?;
      let distribution = Self::find_distribution(id)?;
      ensure!(
        !distribution.is_scheduled(),
        Error::<T>::CannotCancelStarted
      );
      let refunded_to = T::FundingAccount::get();
      T::Transfer::transfer(
        &Self::account_id(),
        &refunded_to,
        T::DistributionAsset::get(),
        distribution.total_on_pay,
        TransferMemo::CancelDistribution,
      )?;
      Self::remove_distribution(id)?;
      log::debug!(target: LOG_TARGET, "distribution {id} cancelled");
      Self::deposit_event(Event::DistributionCancelled {
        id,
        refunded_to,
        amount: distribution.total_on_pay,
      });
      Ok(())
    }

    /// Report a completed transfer. The signer is taken as the ledger that executed it.
    ///
    /// Transfers to accounts other than the pallet account are ignored.
    /// Charged for a bounced foreign deposit, the costlier of the two paths.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::notify_deposit())]
    pub fn notify_deposit(
      origin: OriginFor<T>,
      from: T::AccountId,
      to: T::AccountId,
      asset: AssetKind,
      amount: Balance,
      memo: BoundedVec<u8, T::MaxMemoLength>,
    ) -> DispatchResult {
      let ledger = ensure_signed(origin)?;
      <Self as OnLedgerTransfer<T::AccountId, AssetKind, Balance>>::on_transfer(
        &ledger,
        &from,
        &to,
        asset,
        amount,
        memo.as_slice(),
      )
    }

    /// Update the slice policy (admin only)
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_slice_policy())]
    pub fn set_slice_policy(origin: OriginFor<T>, new_policy: SliceTimePolicy) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      let old_policy = SlicePolicy::<T>::get();
      SlicePolicy::<T>::put(new_policy);
      Self::deposit_event(Event::SlicePolicyUpdated {
        old_policy,
        new_policy,
      });
      Ok(())
    }

    /// Update the foreign deposit policy (admin only)
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::set_foreign_deposit_policy())]
    pub fn set_foreign_deposit_policy(
      origin: OriginFor<T>,
      new_policy: ForeignDepositPolicy,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      let old_policy = ForeignPolicy::<T>::get();
      ForeignPolicy::<T>::put(new_policy);
      Self::deposit_event(Event::ForeignDepositPolicyUpdated {
        old_policy,
        new_policy,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    fn now() -> Moment {
      T::UnixTime::now().as_secs()
    }

    pub(crate) fn insert_distribution(
      total_on_pay: Balance,
    ) -> Result<DistributionId, DispatchError> {
      let id = NextDistributionId::<T>::get();
      let next_id = id
        .checked_add(1)
        .ok_or(Error::<T>::DistributionIdOverflow)?;
      Distributions::<T>::insert(id, Distribution::new(id, total_on_pay));
      NextDistributionId::<T>::put(next_id);
      Ok(id)
    }

    pub(crate) fn find_distribution(id: DistributionId) -> Result<Distribution, DispatchError> {
      Distributions::<T>::get(id).ok_or_else(|| Error::<T>::DistributionNotFound.into())
    }

    /// Apply `f` to a stored distribution. Nothing is written if `f` fails.
    pub(crate) fn update_distribution<R>(
      id: DistributionId,
      f: impl FnOnce(&mut Distribution) -> Result<R, DispatchError>,
    ) -> Result<R, DispatchError> {
      Distributions::<T>::try_mutate(id, |maybe_distribution| {
        let distribution = maybe_distribution
          .as_mut()
          .ok_or(Error::<T>::DistributionNotFound)?;
        f(distribution)
      })
    }

    pub(crate) fn remove_distribution(id: DistributionId) -> Result<Distribution, DispatchError> {
      Distributions::<T>::take(id).ok_or_else(|| Error::<T>::DistributionNotFound.into())
    }

    fn create_distribution(from: &T::AccountId, asset: AssetKind, amount: Balance) -> DispatchResult {
      if asset != T::DistributionAsset::get() {
        return Self::handle_foreign_deposit(from, asset, amount);
      }
      let id = Self::insert_distribution(amount)?;
      log::debug!(target: LOG_TARGET, "distribution {id} created with {amount}");
      Self::deposit_event(Event::DistributionCreated {
        id,
        depositor: from.clone(),
        amount,
      });
      Ok(())
    }

    fn handle_foreign_deposit(from: &T::AccountId, asset: AssetKind, amount: Balance) -> DispatchResult {
      match ForeignPolicy::<T>::get() {
        ForeignDepositPolicy::Absorb => {
          log::warn!(
            target: LOG_TARGET,
            "absorbed deposit of {amount} {asset:?} from {from:?}: not the distribution asset",
          );
          Self::deposit_event(Event::ForeignDepositAbsorbed {
            from: from.clone(),
            asset,
            amount,
          });
        }
        ForeignDepositPolicy::Bounce => {
          T::Transfer::transfer(
            &Self::account_id(),
            from,
            asset,
            amount,
            TransferMemo::BounceDeposit,
          )?;
          Self::deposit_event(Event::ForeignDepositBounced {
            from: from.clone(),
            asset,
            amount,
          });
        }
      }
      Ok(())
    }
  }

  impl<T: Config> OnLedgerTransfer<T::AccountId, AssetKind, Balance> for Pallet<T> {
    fn on_transfer(
      ledger: &T::AccountId,
      from: &T::AccountId,
      to: &T::AccountId,
      asset: AssetKind,
      amount: Balance,
      memo: &[u8],
    ) -> DispatchResult {
      if *to != Self::account_id() {
        return Ok(());
      }
      ensure!(
        *ledger == T::TokenLedger::get(),
        Error::<T>::WrongSourceLedger
      );
      ensure!(amount > 0, Error::<T>::ZeroAmount);
      log::debug!(
        target: LOG_TARGET,
        "deposit of {amount} {asset:?} from {from:?} ({} byte memo)",
        memo.len(),
      );
      with_storage_layer(|| Self::create_distribution(from, asset, amount))
    }
  }

  /// Genesis configuration: keeps the pallet account alive without a native balance
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Pallet account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
