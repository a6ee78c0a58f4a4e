//! Outbound value transfers.
//!
//! The pallet never touches balances directly. Payouts, refunds and bounced deposits all
//! go through [`ValueTransfer`], which the runtime wires to its ledger pallets.

use core::marker::PhantomData;
use frame::prelude::*;
use polkadot_sdk::frame_support::traits::{
  fungible::Mutate as NativeMutate, fungibles::Mutate as FungiblesMutate, tokens::Preservation,
};
use primitives::{AssetKind, Balance};

/// Reason attached to an outbound transfer.
///
/// Only logged: FRAME's `fungible`/`fungibles` transfers have no memo field, so nothing
/// of it is recorded on chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransferMemo {
  PayDividends,
  CancelDistribution,
  BounceDeposit,
}

impl TransferMemo {
  pub fn as_str(&self) -> &'static str {
    match self {
      TransferMemo::PayDividends => "Pay dividends",
      TransferMemo::CancelDistribution => "Cancel dividend object",
      TransferMemo::BounceDeposit => "Bounce foreign deposit",
    }
  }
}

/// Moves value between accounts on behalf of the pallet.
///
/// `from` is always the pallet's own account: the pallet authorizes its transfers itself.
pub trait ValueTransfer<AccountId, AssetId, Balance> {
  fn transfer(
    from: &AccountId,
    to: &AccountId,
    asset: AssetId,
    amount: Balance,
    memo: TransferMemo,
  ) -> DispatchResult;
}

/// No-op `ValueTransfer`; every transfer fails, so nothing can leave the pallet.
impl<AccountId, AssetId, Balance> ValueTransfer<AccountId, AssetId, Balance> for () {
  fn transfer(_: &AccountId, _: &AccountId, _: AssetId, _: Balance, _: TransferMemo) -> DispatchResult {
    Err(DispatchError::Other("ValueTransfer not configured"))
  }
}

/// `ValueTransfer` backed by the runtime's ledgers:
/// - `AssetKind::Native` goes through `Native` (pallet-balances)
/// - `AssetKind::Local` / `AssetKind::Foreign` go through `Assets` (pallet-assets)
pub struct FungibleLedger<Native, Assets>(PhantomData<(Native, Assets)>);

impl<AccountId, Native, Assets> ValueTransfer<AccountId, AssetKind, Balance>
  for FungibleLedger<Native, Assets>
where
  AccountId: Eq + core::fmt::Debug,
  Native: NativeMutate<AccountId, Balance = Balance>,
  Assets: FungiblesMutate<AccountId, AssetId = u32, Balance = Balance>,
{
  fn transfer(
    from: &AccountId,
    to: &AccountId,
    asset: AssetKind,
    amount: Balance,
    memo: TransferMemo,
  ) -> DispatchResult {
    log::trace!(
      target: crate::LOG_TARGET,
      "{}: {:?} of {:?} from {:?} to {:?}",
      memo.as_str(),
      amount,
      asset,
      from,
      to,
    );
    match asset {
      AssetKind::Native => {
        Native::transfer(from, to, amount, Preservation::Expendable)?;
      }
      AssetKind::Local(id) | AssetKind::Foreign(id) => {
        Assets::transfer(id, from, to, amount, Preservation::Expendable)?;
      }
    }
    Ok(())
  }
}
