use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use gffstats_core::utils::ensure_file_exists;
use gffstats_summary::{JsonWrite, SummaryOptions, summarize_file};

pub fn run_stats(matches: &ArgMatches) -> Result<()> {
    let gff_path = matches
        .get_one::<String>("gff")
        .expect("--gff is required");
    let out_path = matches
        .get_one::<String>("out")
        .expect("--out is required");
    let filter_type = matches.get_one::<String>("filter-type").cloned();

    // report a missing input before anything else happens
    ensure_file_exists(Path::new(gff_path))?;

    if let Some(feature_type) = &filter_type {
        info!("Counting only features of type {}", feature_type);
    }
    let options = SummaryOptions { filter_type };

    let stats = summarize_file(gff_path, &options)
        .with_context(|| format!("Failed to compute statistics for {}", gff_path))?;

    stats
        .write_json(out_path)
        .with_context(|| format!("Failed to write output file: {}", out_path))?;

    println!("Statistics written to {}", out_path);

    Ok(())
}
