use check_redirects::cli::run_cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    run_cli().await?;
    Ok(())
}
