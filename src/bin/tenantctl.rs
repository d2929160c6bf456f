use clap::Parser;
use tenantctl::cli::utils::output_error;
use tenantctl::cli::{Cli, OutputFormat};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(e) = tenantctl::cli::run(cli).await {
        let message = match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => format!("{e:?}"),
            _ => format!("{e}"),
        };
        output_error(&output_format, &message)?;
        std::process::exit(1);
    }

    Ok(())
}
