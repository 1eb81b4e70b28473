use std::process::ExitCode;

use aaa_staking_sdk::StakingApi;
use log::debug;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::{
    actions,
    console::Console,
    menu::{Action, MENU_PROMPT},
};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    InvalidChoice,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Succeeded | Self::InvalidChoice => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
        }
    }
}

/// Shows the menu, runs the selected action once and reports how it went.
///
/// Only console write failures surface as `Err`; every action failure is
/// printed and mapped to [`Outcome::Failed`].
pub async fn run<R, W, E>(
    api: &dyn StakingApi,
    console: &mut Console<R, W, E>,
) -> std::io::Result<Outcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let choice = match console.prompt(MENU_PROMPT).await {
        Ok(choice) => choice,
        Err(err) => {
            console.warn(&format!("⛔ Could not read choice: {err}")).await?;
            return Ok(Outcome::Failed);
        }
    };

    let Some(action) = Action::from_choice(&choice) else {
        debug!("rejected menu choice {choice:?}");
        console.say("⛔ Invalid choice.").await?;
        return Ok(Outcome::InvalidChoice);
    };

    match actions::run(action, api, console).await {
        Ok(()) => Ok(Outcome::Succeeded),
        Err(err) => {
            debug!("{action:?} failed: {err:?}");
            console
                .warn(&format!("⛔ {} failed: {err}", action.label()))
                .await?;
            Ok(Outcome::Failed)
        }
    }
}
