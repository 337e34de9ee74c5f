mod stats;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gffstats";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const VERBOSE_LOG_LEVEL: &str = "info";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Quick numeric summaries of GFF annotation files: feature counts, mean lengths and strand distribution.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr (RUST_LOG takes precedence)"),
        )
        .subcommand(stats::cli::create_stats_cli())
}

fn init_logging(matches: &ArgMatches) {
    let default_level = match matches.get_flag("verbose") {
        true => consts::VERBOSE_LOG_LEVEL,
        false => consts::DEFAULT_LOG_LEVEL,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);

    match matches.subcommand() {
        //
        // STATS
        //
        Some((stats::cli::STATS_CMD, matches)) => {
            stats::handlers::run_stats(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
