use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::error::{
    ApproveError, ConfirmError, DepositError, QueryError, RedeemError, TransferStakeError,
};

/// A mined transaction whose receipt reports success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

/// Calls available to the wallet holder.
///
/// State-changing calls return as soon as the node accepts the transaction;
/// callers pass the hash to [`StakingApi::wait_for_confirmation`] to block
/// until it is mined.
#[async_trait]
pub trait StakingApi: Send + Sync {
    /// Address of the signing wallet.
    fn account(&self) -> Address;

    /// Grants the staking contract an allowance of `amount` on the deposit token.
    async fn approve_deposit(&self, amount: U256) -> Result<TxHash, ApproveError>;

    async fn deposit(&self, amount: U256) -> Result<TxHash, DepositError>;

    async fn redeem(&self, amount: U256) -> Result<TxHash, RedeemError>;

    async fn transfer_stake(&self, to: Address, amount: U256)
    -> Result<TxHash, TransferStakeError>;

    async fn balance_of(&self, account: Address) -> Result<U256, QueryError>;

    /// Seconds until `user`'s stake unlocks; zero once unlocked.
    async fn time_until_unlock(&self, user: Address) -> Result<U256, QueryError>;

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<Confirmation, ConfirmError>;
}
