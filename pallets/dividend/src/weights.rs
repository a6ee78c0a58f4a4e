#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn distribute() -> Weight;
	fn pay() -> Weight;
	fn cancel() -> Weight;
	fn notify_deposit() -> Weight;
	fn set_slice_policy() -> Weight;
	fn set_foreign_deposit_policy() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `Dividend::SlicePolicy` (r:1 w:0)
	/// Storage: `Dividend::Distributions` (r:1 w:1)
	fn distribute() -> Weight {
		Weight::from_parts(18_000_000, 1600)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `Dividend::Distributions` (r:1 w:1)
	/// Storage: `Assets::Asset` (r:1 w:1)
	/// Storage: `Assets::Account` (r:2 w:2)
	fn pay() -> Weight {
		Weight::from_parts(45_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	/// Storage: `Dividend::Distributions` (r:1 w:1)
	/// Storage: `Assets::Asset` (r:1 w:1)
	/// Storage: `Assets::Account` (r:2 w:2)
	fn cancel() -> Weight {
		Weight::from_parts(45_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	/// Worst case: foreign deposit under `ForeignDepositPolicy::Bounce`.
	/// Storage: `Dividend::ForeignPolicy` (r:1 w:0)
	/// Storage: `Assets::Asset` (r:1 w:1)
	/// Storage: `Assets::Account` (r:2 w:2)
	/// Storage: `System::Account` (r:0 w:1)
	fn notify_deposit() -> Weight {
		Weight::from_parts(50_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	/// Storage: `Dividend::SlicePolicy` (r:1 w:1)
	fn set_slice_policy() -> Weight {
		Weight::from_parts(8_000_000, 1000)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `Dividend::ForeignPolicy` (r:1 w:1)
	fn set_foreign_deposit_policy() -> Weight {
		Weight::from_parts(8_000_000, 1000)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn distribute() -> Weight {
		Weight::from_parts(18_000_000, 1600)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn pay() -> Weight {
		Weight::from_parts(45_000_000, 3600)
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(4))
	}
	fn cancel() -> Weight {
		Weight::from_parts(45_000_000, 3600)
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(4))
	}
	fn notify_deposit() -> Weight {
		Weight::from_parts(50_000_000, 3600)
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(4))
	}
	fn set_slice_policy() -> Weight {
		Weight::from_parts(8_000_000, 1000)
	}
	fn set_foreign_deposit_policy() -> Weight {
		Weight::from_parts(8_000_000, 1000)
	}
}
