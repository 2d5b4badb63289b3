// src/bin/cli.rs
use brasileirao_scrape::cli::{self, Command};
use brasileirao_scrape::report::LogReporter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", cli::HELP);
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    let mut rep = LogReporter::default();
    let summary = cli::run(&opts, &mut rep)?;
    for (table, n) in &summary.rows {
        log::info!("{}: {n} rows", table.name());
    }
    Ok(())
}
