use aaa_staking_sdk::{
    U256,
    error::{
        AmountError, ApproveError, ConfirmError, DepositError, QueryError, RedeemError,
        TransferStakeError,
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before an answer was given")]
    InputClosed,

    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error("invalid recipient: {0}")]
    Recipient(String),

    #[error("approve: {0}")]
    Approve(#[from] ApproveError),
    #[error(transparent)]
    Deposit(#[from] DepositError),
    #[error(transparent)]
    Redeem(#[from] RedeemError),
    #[error(transparent)]
    TransferStake(#[from] TransferStakeError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Confirm(#[from] ConfirmError),

    #[error("remaining lock time out of range: {0} seconds")]
    UnlockOutOfRange(U256),
}
