use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use url::Url;

use crate::{
    error::ConfigError,
    validators::{validate_address, validate_url, validate_wallet_private_key},
};

pub const RPC_URL_ENV: &str = "RPC_URL";
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
pub const CONTRACT_ADDRESS_ENV: &str = "CONTRACT_ADDRESS";
pub const USDT_ADDRESS_ENV: &str = "USDT_ADDRESS";

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: Url,
    pub wallet_private_key: PrivateKeySigner,
    /// The staking contract (AAA).
    pub contract_address: Address,
    /// The deposit token approved before every deposit.
    pub usdt_address: Address,
}

#[derive(Default)]
pub struct ConfigBuilder {
    rpc_url: Option<String>,
    wallet_private_key: Option<String>,
    contract_address: Option<String>,
    usdt_address: Option<String>,
}

impl ConfigBuilder {
    pub fn rpc_url(mut self, rpc_url: String) -> Self {
        self.rpc_url = Some(rpc_url);
        self
    }

    pub fn wallet_private_key(mut self, wallet_private_key: String) -> Self {
        self.wallet_private_key = Some(wallet_private_key);
        self
    }

    pub fn contract_address(mut self, contract_address: String) -> Self {
        self.contract_address = Some(contract_address);
        self
    }

    pub fn usdt_address(mut self, usdt_address: String) -> Self {
        self.usdt_address = Some(usdt_address);
        self
    }

    /// Overrides every field whose environment variable is set.
    pub fn from_env(mut self) -> Self {
        if let Ok(v) = std::env::var(RPC_URL_ENV) {
            self = self.rpc_url(v);
        }
        if let Ok(v) = std::env::var(PRIVATE_KEY_ENV) {
            self = self.wallet_private_key(v);
        }
        if let Ok(v) = std::env::var(CONTRACT_ADDRESS_ENV) {
            self = self.contract_address(v);
        }
        if let Ok(v) = std::env::var(USDT_ADDRESS_ENV) {
            self = self.usdt_address(v);
        }
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let rpc_url = Self::required(self.rpc_url, "rpc_url", validate_url)?;
        let wallet_private_key = Self::required(
            self.wallet_private_key,
            "wallet_private_key",
            validate_wallet_private_key,
        )?;
        let contract_address =
            Self::required(self.contract_address, "contract_address", validate_address)?;
        let usdt_address = Self::required(self.usdt_address, "usdt_address", validate_address)?;

        Ok(Config {
            rpc_url,
            wallet_private_key,
            contract_address,
            usdt_address,
        })
    }

    fn required<T>(
        value: Option<String>,
        field: &str,
        parser: impl FnOnce(&str) -> anyhow::Result<T>,
    ) -> Result<T, ConfigError> {
        let raw = value
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing(field.to_string()))?;
        parser(&raw).map_err(|e| ConfigError::InvalidValue(format!("{field}: {e}")))
    }
}
