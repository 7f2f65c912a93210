use backup_buddy::config::Cli;
use backup_buddy::{commands, logging, Config};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_tokens(std::env::args_os().skip(1));

    // Convert CLI args to Config; directories are validated by the run itself
    let config = Config::from(cli);
    logging::init(config.debug);

    info!("backup-buddy v{}", backup_buddy::VERSION);
    info!("Arg parsing complete");

    commands::organize::run(&config)?;

    Ok(())
}
