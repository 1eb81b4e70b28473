use crate::contract::{AaaStaking, ERC20};
use alloy::contract as alloy_contract;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::sol_types::Revert;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config value: {0}")]
    InvalidValue(String),
    #[error("missing config: {0}")]
    Missing(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("client provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount must not be negative")]
    Negative,
    #[error("too many decimals: {found} given, token supports {max}")]
    TooManyDecimals { found: usize, max: u8 },
    #[error("invalid amount {0:?}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ApproveError {
    #[error("insufficient token balance: have {balance}, need {needed}")]
    InsufficientBalance { balance: U256, needed: U256 },
    #[error("invalid spender {0}")]
    InvalidSpender(Address),
    #[error("invalid approver {0}")]
    InvalidApprover(Address),

    #[error("reverted: {0}")]
    Reverted(String),
    #[error("unknown revert (selector {selector:#x})")]
    UnknownRevert { selector: u32, data: Vec<u8> },
    #[error("provider/transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum DepositError {
    #[error("insufficient allowance: approved {allowance}, need {needed}")]
    InsufficientAllowance { allowance: U256, needed: U256 },
    #[error("insufficient balance: have {balance}, need {needed}")]
    InsufficientBalance { balance: U256, needed: U256 },

    #[error("reverted: {0}")]
    Reverted(String),
    #[error("unknown revert (selector {selector:#x})")]
    UnknownRevert { selector: u32, data: Vec<u8> },
    #[error("provider/transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum RedeemError {
    #[error("insufficient balance: have {balance}, need {needed}")]
    InsufficientBalance { balance: U256, needed: U256 },

    #[error("reverted: {0}")]
    Reverted(String),
    #[error("unknown revert (selector {selector:#x})")]
    UnknownRevert { selector: u32, data: Vec<u8> },
    #[error("provider/transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum TransferStakeError {
    #[error("insufficient balance: have {balance}, need {needed}")]
    InsufficientBalance { balance: U256, needed: U256 },
    #[error("invalid sender {0}")]
    InvalidSender(Address),
    #[error("invalid receiver {0}")]
    InvalidReceiver(Address),

    #[error("reverted: {0}")]
    Reverted(String),
    #[error("unknown revert (selector {selector:#x})")]
    UnknownRevert { selector: u32, data: Vec<u8> },
    #[error("provider/transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("reverted: {0}")]
    Reverted(String),
    #[error("unknown revert (selector {selector:#x})")]
    UnknownRevert { selector: u32, data: Vec<u8> },
    #[error("provider/transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("transaction {0} reverted on-chain")]
    Reverted(TxHash),
    #[error("failed to watch transaction: {0}")]
    Transport(String),
}

fn extract_selector_and_data(e: &alloy_contract::Error) -> Option<(u32, Vec<u8>)> {
    e.as_revert_data().map(|bytes: Bytes| {
        let data = bytes.to_vec();
        let selector = if data.len() >= 4 {
            u32::from_be_bytes([data[0], data[1], data[2], data[3]])
        } else {
            0
        };
        (selector, data)
    })
}

/// Fallback shared by every remote error: a `require` reason string, an
/// undecodable revert payload, or a transport failure.
macro_rules! fallback_alloy_error {
    ($e:expr) => {{
        let e = $e;
        if let Some(revert) = e.as_decoded_error::<Revert>() {
            return Self::Reverted(revert.reason);
        }
        match extract_selector_and_data(e) {
            Some((selector, data)) => {
                debug!("undecoded revert selector={selector:#x} len={}", data.len());
                Self::UnknownRevert { selector, data }
            }
            None => Self::Transport(e.to_string()),
        }
    }};
}

macro_rules! impl_from_alloy_error {
    ($target:ty, $errors:ty, { $($contract_err:pat => $target_err:expr),* $(,)? }) => {
        impl From<alloy_contract::Error> for $target {
            #[allow(unreachable_patterns)]
            fn from(e: alloy_contract::Error) -> Self {
                if let Some(decoded) = e.as_decoded_interface_error::<$errors>() {
                    match decoded {
                        $(
                            $contract_err => return $target_err,
                        )*
                        _ => {}
                    }
                }

                fallback_alloy_error!(&e)
            }
        }
    };
    ($target:ty) => {
        impl From<alloy_contract::Error> for $target {
            fn from(e: alloy_contract::Error) -> Self {
                fallback_alloy_error!(&e)
            }
        }
    };
}

impl_from_alloy_error!(ApproveError, ERC20::ERC20Errors, {
    ERC20::ERC20Errors::ERC20InsufficientBalance(err) => Self::InsufficientBalance {
        balance: err.balance,
        needed: err.needed,
    },
    ERC20::ERC20Errors::ERC20InvalidSpender(err) => Self::InvalidSpender(err.spender),
    ERC20::ERC20Errors::ERC20InvalidApprover(err) => Self::InvalidApprover(err.approver),
});

impl_from_alloy_error!(DepositError, AaaStaking::AaaStakingErrors, {
    AaaStaking::AaaStakingErrors::ERC20InsufficientAllowance(err) => Self::InsufficientAllowance {
        allowance: err.allowance,
        needed: err.needed,
    },
    AaaStaking::AaaStakingErrors::ERC20InsufficientBalance(err) => Self::InsufficientBalance {
        balance: err.balance,
        needed: err.needed,
    },
});

impl_from_alloy_error!(RedeemError, AaaStaking::AaaStakingErrors, {
    AaaStaking::AaaStakingErrors::ERC20InsufficientBalance(err) => Self::InsufficientBalance {
        balance: err.balance,
        needed: err.needed,
    },
});

impl_from_alloy_error!(TransferStakeError, AaaStaking::AaaStakingErrors, {
    AaaStaking::AaaStakingErrors::ERC20InsufficientBalance(err) => Self::InsufficientBalance {
        balance: err.balance,
        needed: err.needed,
    },
    AaaStaking::AaaStakingErrors::ERC20InvalidSender(err) => Self::InvalidSender(err.sender),
    AaaStaking::AaaStakingErrors::ERC20InvalidReceiver(err) => Self::InvalidReceiver(err.receiver),
});

impl_from_alloy_error!(QueryError);

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::hex;
    use alloy::rpc::json_rpc::ErrorPayload;
    use alloy::sol_types::SolError;
    use alloy::transports::{RpcError, TransportErrorKind};

    const EXECUTION_REVERTED: i64 = 3;

    /// A node's `eth_call`/`eth_estimateGas` answer for a reverting call.
    fn revert_response(data: &[u8]) -> alloy_contract::Error {
        let raw = serde_json::value::to_raw_value(&hex::encode_prefixed(data))
            .expect("hex string serializes");
        let payload = ErrorPayload {
            code: EXECUTION_REVERTED,
            message: "execution reverted".into(),
            data: Some(raw),
        };
        alloy_contract::Error::TransportError(RpcError::ErrorResp(payload))
    }

    fn require_reason(reason: &str) -> Vec<u8> {
        Revert {
            reason: reason.to_string(),
        }
        .abi_encode()
    }

    #[test]
    fn test_approve_insufficient_balance_is_typed() {
        let data = ERC20::ERC20InsufficientBalance {
            sender: Address::repeat_byte(0xaa),
            balance: U256::from(3u64),
            needed: U256::from(5u64),
        }
        .abi_encode();

        let err = ApproveError::from(revert_response(&data));

        assert!(matches!(
            err,
            ApproveError::InsufficientBalance { balance, needed }
                if balance == U256::from(3u64) && needed == U256::from(5u64)
        ));
    }

    #[test]
    fn test_deposit_insufficient_allowance_is_typed() {
        let data = AaaStaking::ERC20InsufficientAllowance {
            spender: Address::repeat_byte(0x11),
            allowance: U256::ZERO,
            needed: U256::from(7u64),
        }
        .abi_encode();

        let err = DepositError::from(revert_response(&data));

        assert!(matches!(
            err,
            DepositError::InsufficientAllowance { allowance, needed }
                if allowance.is_zero() && needed == U256::from(7u64)
        ));
    }

    #[test]
    fn test_transfer_invalid_sender_and_receiver_are_typed() {
        let sender = AaaStaking::ERC20InvalidSender {
            sender: Address::ZERO,
        }
        .abi_encode();
        let receiver = AaaStaking::ERC20InvalidReceiver {
            receiver: Address::ZERO,
        }
        .abi_encode();

        assert!(matches!(
            TransferStakeError::from(revert_response(&sender)),
            TransferStakeError::InvalidSender(a) if a == Address::ZERO
        ));
        assert!(matches!(
            TransferStakeError::from(revert_response(&receiver)),
            TransferStakeError::InvalidReceiver(a) if a == Address::ZERO
        ));
    }

    #[test]
    fn test_require_reason_becomes_reverted() {
        let data = require_reason("staking paused");

        assert!(matches!(
            DepositError::from(revert_response(&data)),
            DepositError::Reverted(reason) if reason == "staking paused"
        ));
        assert!(matches!(
            QueryError::from(revert_response(&data)),
            QueryError::Reverted(reason) if reason == "staking paused"
        ));
    }

    #[test]
    fn test_error_not_declared_for_operation_falls_back() {
        // known to the staking ABI but not mapped for redeem
        let data = AaaStaking::ERC20InvalidReceiver {
            receiver: Address::ZERO,
        }
        .abi_encode();

        match RedeemError::from(revert_response(&data)) {
            RedeemError::UnknownRevert { selector, data: raw } => {
                assert_eq!(
                    selector.to_be_bytes(),
                    AaaStaking::ERC20InvalidReceiver::SELECTOR
                );
                assert_eq!(raw, data);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_selector_keeps_payload() {
        let data = [0xde, 0xad, 0xbe, 0xef, 0x01];

        match QueryError::from(revert_response(&data)) {
            QueryError::UnknownRevert { selector, data: raw } => {
                assert_eq!(selector, 0xdeadbeef);
                assert_eq!(raw, data.to_vec());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_non_revert_error_is_transport() {
        let payload = ErrorPayload {
            code: -32000,
            message: "insufficient funds for gas * price + value".into(),
            data: None,
        };
        let err = alloy_contract::Error::TransportError(RpcError::ErrorResp(payload));

        match ApproveError::from(err) {
            ApproveError::Transport(msg) => assert!(msg.contains("insufficient funds for gas")),
            other => panic!("unexpected {other:?}"),
        }

        let err = alloy_contract::Error::TransportError(RpcError::Transport(
            TransportErrorKind::BackendGone,
        ));
        assert!(matches!(QueryError::from(err), QueryError::Transport(_)));
    }
}
