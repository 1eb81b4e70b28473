use std::str::FromStr;

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use url::Url;

pub fn validate_url(url: &str) -> anyhow::Result<Url> {
    let url = Url::parse(url.trim()).map_err(|e| anyhow::anyhow!("invalid URL: {}", e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!("invalid URL: unsupported scheme {other:?}"),
    }
}

/// Accepts any 20-byte hex address, with or without EIP-55 casing.
pub fn validate_address(address: &str) -> anyhow::Result<Address> {
    Address::from_str(address.trim()).map_err(|e| anyhow::anyhow!("invalid address: {}", e))
}

pub fn validate_wallet_private_key(key: &str) -> anyhow::Result<PrivateKeySigner> {
    PrivateKeySigner::from_str(key.trim())
        .map_err(|e| anyhow::anyhow!("invalid private key: {}", e))
}
