//! The five menu actions. Each one runs to completion or stops at the first
//! failing step; nothing is retried.

use aaa_staking_sdk::{
    StakingApi, UnlockStatus,
    units::{AAA_DECIMALS, USDT_DECIMALS, format_amount, parse_amount},
    validate_address,
};
use log::debug;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::{console::Console, error::ActionError, menu::Action};

pub async fn run<R, W, E>(
    action: Action,
    api: &dyn StakingApi,
    console: &mut Console<R, W, E>,
) -> Result<(), ActionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    debug!("running {action:?} for {}", api.account());
    match action {
        Action::Deposit => deposit(api, console).await,
        Action::Redeem => redeem(api, console).await,
        Action::Balance => balance(api, console).await,
        Action::UnlockTimer => unlock_timer(api, console).await,
        Action::Transfer => transfer(api, console).await,
    }
}

/// Approves the staking contract on the deposit token, then deposits.
pub async fn deposit<R, W, E>(
    api: &dyn StakingApi,
    console: &mut Console<R, W, E>,
) -> Result<(), ActionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let raw = console.prompt("USDT amount to deposit: ").await?;
    let amount = parse_amount(&raw, USDT_DECIMALS)?;

    let approve_tx = api.approve_deposit(amount).await?;
    console.say(&format!("⏳ Approve tx: {approve_tx}")).await?;
    api.wait_for_confirmation(approve_tx).await?;
    console.say("✅ Approve confirmed!").await?;

    let deposit_tx = api.deposit(amount).await?;
    console.say(&format!("⏳ Deposit tx: {deposit_tx}")).await?;
    api.wait_for_confirmation(deposit_tx).await?;
    console.say("✅ Deposit confirmed!").await?;

    Ok(())
}

pub async fn redeem<R, W, E>(
    api: &dyn StakingApi,
    console: &mut Console<R, W, E>,
) -> Result<(), ActionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let raw = console.prompt("AAA amount to redeem: ").await?;
    let amount = parse_amount(&raw, AAA_DECIMALS)?;

    let tx = api.redeem(amount).await?;
    console.say(&format!("⏳ Redeem tx: {tx}")).await?;
    api.wait_for_confirmation(tx).await?;
    console.say("✅ Redeem confirmed!").await?;

    Ok(())
}

pub async fn balance<R, W, E>(
    api: &dyn StakingApi,
    console: &mut Console<R, W, E>,
) -> Result<(), ActionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let balance = api.balance_of(api.account()).await?;
    let formatted = format_amount(balance, AAA_DECIMALS)?;
    console.say(&format!("💰 AAA balance: {formatted}")).await?;

    Ok(())
}

pub async fn unlock_timer<R, W, E>(
    api: &dyn StakingApi,
    console: &mut Console<R, W, E>,
) -> Result<(), ActionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let remaining = api.time_until_unlock(api.account()).await?;

    match UnlockStatus::from(remaining) {
        UnlockStatus::Unlocked => {
            console.say("🔓 Your balance is already unlocked!").await?;
        }
        UnlockStatus::Locked { minutes, seconds } => {
            console
                .say(&format!(
                    "⏳ Time left before unlock: {minutes} min {seconds} sec"
                ))
                .await?;
        }
        UnlockStatus::OutOfRange(raw) => return Err(ActionError::UnlockOutOfRange(raw)),
    }

    Ok(())
}

/// Asks for the recipient first, then the amount.
pub async fn transfer<R, W, E>(
    api: &dyn StakingApi,
    console: &mut Console<R, W, E>,
) -> Result<(), ActionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let to_raw = console.prompt("Recipient address: ").await?;
    let amount_raw = console.prompt("AAA amount to transfer: ").await?;

    let to = validate_address(&to_raw).map_err(|e| ActionError::Recipient(e.to_string()))?;
    let amount = parse_amount(&amount_raw, AAA_DECIMALS)?;

    let tx = api.transfer_stake(to, amount).await?;
    console.say(&format!("⏳ AAA transfer tx: {tx}")).await?;
    api.wait_for_confirmation(tx).await?;
    console
        .say(&format!(
            "✅ Transfer of {amount_raw} AAA to {to_raw} confirmed!"
        ))
        .await?;

    Ok(())
}
