use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use polycube_generator::dump::render_generation;
use polycube_generator::{validate_max_size, Generations};

/// Enumerate free polycubes up to a given size.
#[derive(Parser)]
#[command(name = "polycube-generator", version, about = "Count and optionally dump free polycubes by size")]
struct Cli {
    /// Largest polycube size to enumerate (1..=18).
    max_size: u8,

    /// Dump every generation's shapes to stdout after its count line.
    #[arg(short = 'd', long = "dump")]
    dump: bool,

    /// Worker thread count. Defaults to the number of logical CPUs.
    #[arg(short = 'j', long = "threads")]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    validate_max_size(cli.max_size).context("validating max_size")?;

    let threads = cli.threads.unwrap_or_else(num_cpus::get);
    info!("running with {threads} worker threads");

    let progress = ProgressBar::new(cli.max_size as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("growing {bar:40} generation {pos}/{len}")
            .unwrap(),
    );

    let mut generations = Generations::new().threads(threads);
    generations.grow_to(
        cli.max_size,
        |size, shapes| {
            progress.set_position(size as u64);
            println!("{size:2}: {}", shapes.len());
            if cli.dump {
                let owned: Vec<_> = shapes.iter().map(|s| (**s).clone()).collect();
                print!("{}", render_generation(&owned));
            }
        },
        || progress.tick(),
    );
    progress.finish_and_clear();

    Ok(())
}
