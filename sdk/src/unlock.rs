use alloy::primitives::U256;

/// Remaining lock time of a staked balance, as reported by `timeUntilUnlock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockStatus {
    Unlocked,
    Locked { minutes: u64, seconds: u64 },
    /// The contract reported more seconds than fit in a `u64`.
    OutOfRange(U256),
}

impl From<U256> for UnlockStatus {
    fn from(remaining: U256) -> Self {
        if remaining.is_zero() {
            return Self::Unlocked;
        }

        match u64::try_from(remaining) {
            Ok(total) => Self::Locked {
                minutes: total / 60,
                seconds: total % 60,
            },
            Err(_) => Self::OutOfRange(remaining),
        }
    }
}
