#![allow(dead_code)]

use std::sync::Mutex;

use aaa_staking_cli::{Console, Outcome, session};
use aaa_staking_sdk::{
    Address, Confirmation, StakingApi, TxHash, U256,
    error::{
        ApproveError, ConfirmError, DepositError, QueryError, RedeemError, TransferStakeError,
    },
};
use async_trait::async_trait;

pub const WALLET: Address = Address::repeat_byte(0xaa);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Approve(U256),
    Deposit(U256),
    Redeem(U256),
    TransferStake(Address, U256),
    BalanceOf(Address),
    TimeUntilUnlock(Address),
    Confirm(TxHash),
}

impl Call {
    pub fn is_state_changing(&self) -> bool {
        matches!(
            self,
            Self::Approve(_) | Self::Deposit(_) | Self::Redeem(_) | Self::TransferStake(..)
        )
    }
}

/// Scripted chain: every submission gets the next hash `0x..01`, `0x..02`, ...
#[derive(Default)]
pub struct MockStaking {
    pub balance: U256,
    pub remaining: U256,
    pub approve_revert: Option<String>,
    pub deposit_revert: Option<String>,
    pub query_transport_error: Option<String>,
    /// Hashes whose receipt reports a revert.
    pub reverted_txs: Vec<TxHash>,
    pub(crate) calls: Mutex<Vec<Call>>,
}

impl MockStaking {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_hash(&self) -> TxHash {
        let submitted = self
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_state_changing())
            .count();
        tx_hash(submitted as u8)
    }
}

pub fn tx_hash(n: u8) -> TxHash {
    TxHash::with_last_byte(n)
}

#[async_trait]
impl StakingApi for MockStaking {
    fn account(&self) -> Address {
        WALLET
    }

    async fn approve_deposit(&self, amount: U256) -> Result<TxHash, ApproveError> {
        self.record(Call::Approve(amount));
        if let Some(reason) = &self.approve_revert {
            return Err(ApproveError::Reverted(reason.clone()));
        }
        Ok(self.next_hash())
    }

    async fn deposit(&self, amount: U256) -> Result<TxHash, DepositError> {
        self.record(Call::Deposit(amount));
        if let Some(reason) = &self.deposit_revert {
            return Err(DepositError::Reverted(reason.clone()));
        }
        Ok(self.next_hash())
    }

    async fn redeem(&self, amount: U256) -> Result<TxHash, RedeemError> {
        self.record(Call::Redeem(amount));
        Ok(self.next_hash())
    }

    async fn transfer_stake(
        &self,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, TransferStakeError> {
        self.record(Call::TransferStake(to, amount));
        Ok(self.next_hash())
    }

    async fn balance_of(&self, account: Address) -> Result<U256, QueryError> {
        self.record(Call::BalanceOf(account));
        if let Some(msg) = &self.query_transport_error {
            return Err(QueryError::Transport(msg.clone()));
        }
        Ok(self.balance)
    }

    async fn time_until_unlock(&self, user: Address) -> Result<U256, QueryError> {
        self.record(Call::TimeUntilUnlock(user));
        if let Some(msg) = &self.query_transport_error {
            return Err(QueryError::Transport(msg.clone()));
        }
        Ok(self.remaining)
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<Confirmation, ConfirmError> {
        self.record(Call::Confirm(tx_hash));
        if self.reverted_txs.contains(&tx_hash) {
            return Err(ConfirmError::Reverted(tx_hash));
        }
        Ok(Confirmation {
            tx_hash,
            block_number: Some(1),
            gas_used: 21_000,
        })
    }
}

pub struct SessionRun {
    pub outcome: Outcome,
    pub stdout: String,
    pub stderr: String,
}

/// Runs one session with `input` as the whole of stdin.
pub async fn run_session(api: &MockStaking, input: &str) -> SessionRun {
    let mut console = Console::new(input.as_bytes(), Vec::new(), Vec::new());
    let outcome = session::run(api, &mut console)
        .await
        .expect("in-memory console never fails");

    let (_, out, err) = console.into_parts();
    SessionRun {
        outcome,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}
