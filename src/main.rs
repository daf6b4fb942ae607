use clap::Parser;
use vecdraw::cli::CliArgs;
use vecdraw::{commands, init_logging};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args = CliArgs::parse();
    tracing::debug!("{:?}", args);

    let output = commands::run(args)?;
    print!("{}", output);

    Ok(())
}
