use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::{
  BoundedVec,
  traits::{EnsureOrigin, Get},
};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::Balance;

const AMOUNT: Balance = 1_000_000_000;

/// Fund the pallet account and open a distribution of `AMOUNT`.
fn funded_distribution<T: Config>() -> Result<DistributionId, BenchmarkError> {
  T::BenchmarkHelper::ensure_funded(
    &Pallet::<T>::account_id(),
    T::DistributionAsset::get(),
    AMOUNT,
  )
  .map_err(|_| BenchmarkError::Stop("failed to fund pallet account"))?;
  Pallet::<T>::insert_distribution(AMOUNT)
    .map_err(|_| BenchmarkError::Stop("failed to insert distribution"))
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn distribute() -> Result<(), BenchmarkError> {
    let origin =
      T::FundingOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let id = funded_distribution::<T>()?;
    // Worst case: the future-time check runs
    SlicePolicy::<T>::put(SliceTimePolicy::FutureOnly);
    let slice_at = u64::MAX;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, id, slice_at, AMOUNT);

    assert_eq!(Distributions::<T>::get(id).map(|d| d.slice_at), Some(slice_at));
    Ok(())
  }

  #[benchmark]
  fn pay() -> Result<(), BenchmarkError> {
    let origin =
      T::PayoutOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let id = funded_distribution::<T>()?;
    let recipient: T::AccountId = account("recipient", 0, 0);
    let quantity = AMOUNT / 2;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, id, recipient, quantity);

    assert_eq!(
      Distributions::<T>::get(id).map(|d| d.total_payed),
      Some(quantity)
    );
    Ok(())
  }

  #[benchmark]
  fn cancel() -> Result<(), BenchmarkError> {
    let origin =
      T::FundingOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let id = funded_distribution::<T>()?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, id);

    assert!(Distributions::<T>::get(id).is_none());
    Ok(())
  }

  #[benchmark]
  fn notify_deposit() -> Result<(), BenchmarkError> {
    let ledger = T::TokenLedger::get();
    let depositor: T::AccountId = whitelisted_caller();
    let pallet_account = Pallet::<T>::account_id();
    // Worst case: a foreign deposit sent back to the depositor
    ForeignPolicy::<T>::put(ForeignDepositPolicy::Bounce);
    let asset = T::BenchmarkHelper::foreign_asset();
    T::BenchmarkHelper::ensure_funded(&pallet_account, asset, AMOUNT)
      .map_err(|_| BenchmarkError::Stop("failed to fund pallet account"))?;
    let memo = BoundedVec::try_from(alloc::vec![0u8; T::MaxMemoLength::get() as usize])
      .map_err(|_| BenchmarkError::Stop("memo too long"))?;
    let next_id = NextDistributionId::<T>::get();

    #[extrinsic_call]
    _(RawOrigin::Signed(ledger), depositor, pallet_account, asset, AMOUNT, memo);

    assert_eq!(NextDistributionId::<T>::get(), next_id);
    Ok(())
  }

  #[benchmark]
  fn set_slice_policy() -> Result<(), BenchmarkError> {
    let origin =
      T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, SliceTimePolicy::FutureOnly);

    assert_eq!(SlicePolicy::<T>::get(), SliceTimePolicy::FutureOnly);
    Ok(())
  }

  #[benchmark]
  fn set_foreign_deposit_policy() -> Result<(), BenchmarkError> {
    let origin =
      T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, ForeignDepositPolicy::Bounce);

    assert_eq!(ForeignPolicy::<T>::get(), ForeignDepositPolicy::Bounce);
    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}

