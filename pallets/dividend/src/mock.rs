use crate as pallet_dividend;
use crate::{FungibleLedger, ForeignDepositPolicy, SliceTimePolicy};
use core::cell::RefCell;
use core::time::Duration;
use polkadot_sdk::frame_support::traits::fungibles::Mutate;
use polkadot_sdk::frame_support::traits::tokens::Preservation;
use polkadot_sdk::frame_support::{
  BoundedVec, PalletId, construct_runtime, derive_impl, ord_parameter_types, parameter_types,
  traits::{ConstU32, ConstU128, UnixTime},
};
use polkadot_sdk::frame_system::{self, EnsureRoot, EnsureSignedBy};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchResult,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{AssetKind, Balance, Moment, params::MAX_MEMO_LENGTH, well_known};

pub type AccountId = u64;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const MALLORY: AccountId = 3;
pub const FINDIR: AccountId = 10;
pub const PAYER: AccountId = 11;
pub const TOKEN_LEDGER: AccountId = 12;

pub const USDU: u32 = well_known::USDU;
pub const USDT: u32 = well_known::USDT;
pub const UNIT: Balance = primitives::params::USDU_UNIT;
pub const INITIAL_FUNDS: Balance = 1_000_000 * UNIT;

/// 2023-11-14T22:13:20Z
pub const GENESIS_TIME: Moment = 1_700_000_000;

thread_local! {
  static NOW: RefCell<Moment> = const { RefCell::new(GENESIS_TIME) };
}

pub fn set_now(secs: Moment) {
  NOW.with(|now| *now.borrow_mut() = secs);
}

pub struct MockTime;
impl UnixTime for MockTime {
  fn now() -> Duration {
    Duration::from_secs(NOW.with(|now| *now.borrow()))
  }
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    Dividend: pallet_dividend,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = Balance;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

ord_parameter_types! {
  pub const Findir: AccountId = FINDIR;
  pub const Payer: AccountId = PAYER;
}

parameter_types! {
  pub const DividendPalletId: PalletId = PalletId(*primitives::pallet_ids::DIVIDEND_PALLET_ID);
  pub const TokenLedger: AccountId = TOKEN_LEDGER;
  pub const DistributionAsset: AssetKind = AssetKind::Local(USDU);
  pub const DefaultSlicePolicy: SliceTimePolicy = SliceTimePolicy::Unchecked;
  pub const DefaultForeignDepositPolicy: ForeignDepositPolicy = ForeignDepositPolicy::Absorb;
}

impl pallet_dividend::Config for Test {
  type Transfer = FungibleLedger<Balances, Assets>;
  type UnixTime = MockTime;
  type FundingOrigin = EnsureSignedBy<Findir, AccountId>;
  type PayoutOrigin = EnsureSignedBy<Payer, AccountId>;
  type AdminOrigin = EnsureRoot<AccountId>;
  type FundingAccount = Findir;
  type TokenLedger = TokenLedger;
  type PalletId = DividendPalletId;
  type DistributionAsset = DistributionAsset;
  type DefaultSlicePolicy = DefaultSlicePolicy;
  type DefaultForeignDepositPolicy = DefaultForeignDepositPolicy;
  type MaxMemoLength = ConstU32<{ MAX_MEMO_LENGTH }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = DividendBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct DividendBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId> for DividendBenchmarkHelper {
  fn foreign_asset() -> AssetKind {
    AssetKind::Local(USDT)
  }

  fn ensure_funded(who: &AccountId, asset: AssetKind, amount: Balance) -> DispatchResult {
    use polkadot_sdk::frame_support::traits::Currency;
    match asset {
      AssetKind::Native => {
        let _ = Balances::deposit_creating(who, amount);
      }
      AssetKind::Local(id) | AssetKind::Foreign(id) => {
        Assets::mint_into(id, who, amount)?;
      }
    }
    Ok(())
  }
}

pub fn memo(text: &[u8]) -> BoundedVec<u8, ConstU32<{ MAX_MEMO_LENGTH }>> {
  BoundedVec::try_from(text.to_vec()).unwrap()
}

/// Moves `amount` of `asset_id` from `from` to the pallet account, then reports the
/// transfer as the token ledger would.
pub fn deposit(from: AccountId, asset_id: u32, amount: Balance) -> DispatchResult {
  let pallet_account = Dividend::account_id();
  <Assets as Mutate<AccountId>>::transfer(
    asset_id,
    &from,
    &pallet_account,
    amount,
    Preservation::Expendable,
  )?;
  Dividend::notify_deposit(
    RuntimeOrigin::signed(TOKEN_LEDGER),
    from,
    pallet_account,
    AssetKind::Local(asset_id),
    amount,
    memo(b"dividend pool"),
  )
}

pub fn usdu_balance(who: AccountId) -> Balance {
  <Assets as polkadot_sdk::frame_support::traits::fungibles::Inspect<AccountId>>::balance(USDU, &who)
}

pub fn usdt_balance(who: AccountId) -> Balance {
  <Assets as polkadot_sdk::frame_support::traits::fungibles::Inspect<AccountId>>::balance(USDT, &who)
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    // (id, owner, is_sufficient, min_balance)
    assets: vec![(USDU, FINDIR, true, 1), (USDT, FINDIR, true, 1)],
    metadata: vec![],
    accounts: vec![
      (USDU, FINDIR, INITIAL_FUNDS),
      (USDU, ALICE, INITIAL_FUNDS),
      (USDT, ALICE, INITIAL_FUNDS),
    ],
    reserves: vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_dividend::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  set_now(GENESIS_TIME);

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
