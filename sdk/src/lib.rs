mod api;
pub mod client;
pub mod config;
mod contract;
pub mod error;
mod unlock;
pub mod units;
mod validators;

pub use alloy::primitives::{Address, TxHash, U256};

pub use api::{Confirmation, StakingApi};
pub use client::Client;
pub use config::{Config, ConfigBuilder};
pub use unlock::UnlockStatus;
pub use validators::validate_address;
