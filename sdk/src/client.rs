use std::sync::Arc;

use crate::{
    api::{Confirmation, StakingApi},
    config::Config,
    contract::{
        AaaStaking::{self, AaaStakingInstance},
        ERC20::{self, ERC20Instance},
    },
    error::{
        ApproveError, ClientError, ConfirmError, DepositError, QueryError, RedeemError,
        TransferStakeError,
    },
};
use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
};
use async_trait::async_trait;
use log::info;

struct Inner {
    cfg: Config,
    provider: DynProvider,
}

#[derive(Clone)]
struct ClientCtx(Arc<Inner>);

impl ClientCtx {
    async fn new(cfg: Config) -> Result<Self, ClientError> {
        let provider = ProviderBuilder::new()
            .wallet(cfg.wallet_private_key.clone())
            .connect(cfg.rpc_url.as_str())
            .await
            .map_err(|e| ClientError::Provider(e.to_string()))?
            .erased();

        Ok(Self::with_provider(cfg, provider))
    }

    fn with_provider(cfg: Config, provider: DynProvider) -> Self {
        Self(Arc::new(Inner { cfg, provider }))
    }

    fn staking(&self) -> AaaStakingInstance<DynProvider> {
        AaaStaking::new(self.0.cfg.contract_address, self.0.provider.clone())
    }

    fn usdt(&self) -> ERC20Instance<DynProvider> {
        ERC20::new(self.0.cfg.usdt_address, self.0.provider.clone())
    }

    fn provider(&self) -> &DynProvider {
        &self.0.provider
    }

    fn address(&self) -> Address {
        self.0.cfg.wallet_private_key.address()
    }
}

/// Chain client bound to one wallet, one staking contract and its deposit token.
#[derive(Clone)]
pub struct Client {
    ctx: ClientCtx,
}

impl Client {
    pub async fn new(cfg: Config) -> Result<Self, ClientError> {
        let ctx = ClientCtx::new(cfg).await?;
        Ok(Self { ctx })
    }
}

#[async_trait]
impl StakingApi for Client {
    fn account(&self) -> Address {
        self.ctx.address()
    }

    async fn approve_deposit(&self, amount: U256) -> Result<TxHash, ApproveError> {
        let spender = self.ctx.0.cfg.contract_address;
        let pending = self.ctx.usdt().approve(spender, amount).send().await?;

        info!("approve({spender}, {amount}) submitted in tx {}", pending.tx_hash());
        Ok(*pending.tx_hash())
    }

    async fn deposit(&self, amount: U256) -> Result<TxHash, DepositError> {
        let pending = self.ctx.staking().deposit(amount).send().await?;

        info!("deposit({amount}) submitted in tx {}", pending.tx_hash());
        Ok(*pending.tx_hash())
    }

    async fn redeem(&self, amount: U256) -> Result<TxHash, RedeemError> {
        let pending = self.ctx.staking().redeem(amount).send().await?;

        info!("redeem({amount}) submitted in tx {}", pending.tx_hash());
        Ok(*pending.tx_hash())
    }

    async fn transfer_stake(
        &self,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, TransferStakeError> {
        let pending = self.ctx.staking().transferStake(to, amount).send().await?;

        info!("transferStake({to}, {amount}) submitted in tx {}", pending.tx_hash());
        Ok(*pending.tx_hash())
    }

    async fn balance_of(&self, account: Address) -> Result<U256, QueryError> {
        let balance = self.ctx.staking().balanceOf(account).call().await?;
        Ok(balance)
    }

    async fn time_until_unlock(&self, user: Address) -> Result<U256, QueryError> {
        let remaining = self.ctx.staking().timeUntilUnlock(user).call().await?;
        Ok(remaining)
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<Confirmation, ConfirmError> {
        let receipt = PendingTransactionBuilder::new(self.ctx.provider().root().clone(), tx_hash)
            .get_receipt()
            .await
            .map_err(|e| ConfirmError::Transport(e.to_string()))?;

        confirmation_from_receipt(tx_hash, &receipt)
    }
}

/// A mined receipt with a failed status is an error, not a confirmation.
fn confirmation_from_receipt(
    tx_hash: TxHash,
    receipt: &TransactionReceipt,
) -> Result<Confirmation, ConfirmError> {
    if !receipt.status() {
        return Err(ConfirmError::Reverted(tx_hash));
    }

    info!(
        "tx {} confirmed in block {:?}, gas used {}",
        receipt.transaction_hash, receipt.block_number, receipt.gas_used
    );
    Ok(Confirmation {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        gas_used: receipt.gas_used,
    })
}
