use std::process::ExitCode;

mod bootstrap;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let outcome = bootstrap::bootstrap().await?;
    Ok(outcome.exit_code())
}
