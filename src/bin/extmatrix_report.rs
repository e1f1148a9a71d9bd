use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use extmatrix::ingest;
use extmatrix::leaderboard::LeaderboardBuilder;
use extmatrix::matrix::{OPENGL, OPENGL_ES, VULKAN};
use extmatrix::ExtMatrixResult;
use tracing_subscriber::EnvFilter;

/// Print the driver completion leaderboard for a support matrix document.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// Path to the matrix JSON document.
    matrix: PathBuf,

    /// API families to include, in report order.
    #[arg(
        long = "api",
        default_values_t = [OPENGL.to_string(), OPENGL_ES.to_string(), VULKAN.to_string()]
    )]
    apis: Vec<String>,
}

fn main() -> ExtMatrixResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();

    let matrix = ingest::matrix_from_file(&opts.matrix)
        .with_context(|| format!("loading matrix from {}", opts.matrix.display()))?;

    let board = LeaderboardBuilder::new(&matrix)
        .apis(opts.apis.iter().cloned())
        .build();

    println!("{} extensions tracked", board.total_extensions());
    println!();

    for version in board.versions() {
        println!(
            "{:<16} {:>3} extensions",
            version.id(),
            version.total_extensions()
        );
    }
    println!();

    let ranking = board.drivers_by_completion();
    for (rank, (driver, done)) in ranking.iter().enumerate() {
        println!("{:>2}. {:<12} {:>4} done", rank + 1, driver.to_string(), done);
    }

    for api in &opts.apis {
        println!();
        println!("latest fully supported {api}:");
        for (driver, _) in &ranking {
            match board.latest_fully_supported(api, driver) {
                Some(version) => println!("  {:<12} {}", driver.to_string(), version.version()),
                None => println!("  {:<12} -", driver.to_string()),
            }
        }
    }

    Ok(())
}
