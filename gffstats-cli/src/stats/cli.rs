use clap::{Arg, Command, arg};

pub const STATS_CMD: &str = "stats";

pub fn create_stats_cli() -> Command {
    Command::new(STATS_CMD)
        .about("Compute feature counts, mean lengths and strand distribution for a GFF file.")
        .arg(
            arg!(--gff <GFF>)
                .required(true)
                .help("Path to input GFF file"),
        )
        .arg(
            arg!(--out <OUT>)
                .required(true)
                .help("Output JSON path (parent directories are created)"),
        )
        .arg(
            Arg::new("filter-type")
                .long("filter-type")
                .required(false)
                .help("Only count features of this type (e.g. gene, CDS)"),
        )
}
