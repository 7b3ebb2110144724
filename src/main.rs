use anyhow::Result;
use dvtriage::cli;
use dvtriage::commands;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    dvtriage::observability::init_logging(cli.verbosity);

    let config = commands::resolve_config(cli.config.as_deref())?;
    commands::run(cli.command, &config)
}
