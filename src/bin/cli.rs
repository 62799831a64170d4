//! This is the command line tool that loads an input file and either transforms
//! it or reverses the transform.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, ArgAction, Command};
use follower::bitstream::DEFAULT_BLOCK_SIZE;
use follower::files::{output_path, transform_file};
use follower::pipeline::{Direction, FollowerDecoder, PassReport};
use follower::utils::FILE_EXTENSION;
use follower::{Context, Decoder};

use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Operation completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

/// Reverse the transform of 'transformed_path' in memory and compare the result
/// with the file at 'original_path'.
fn check(
    original_path: &str,
    transformed_path: &str,
    ctx: Context,
) -> io::Result<bool> {
    let original = fs::read(original_path)?;
    let transformed = fs::read(transformed_path)?;
    let mut restored = Vec::new();
    let (from, to) =
        FollowerDecoder::new(&transformed, &mut restored, ctx).decode()?;
    log::info!("Restored from {} to {} bytes.", from, to);
    Ok(original == restored)
}

fn print_report(report: &PassReport) {
    println!("raw stream\n{}", report.raw);
    println!("\n\nprediction stats\n{}", report.predictions);
    println!("\n\ncorrect prediction stats\n{}", report.correctness);
}

fn main() -> ExitCode {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("checked")
                .long("check")
                .help("Reverse the transform and compare with the input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Print the streak statistics of the pass")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("decompress")
                .short('d')
                .long("decompress")
                .help("Reverse the transform")
                .action(ArgAction::SetTrue)
                .conflicts_with("compress"),
        )
        .arg(
            Arg::new("compress")
                .short('c')
                .long("compress")
                .help("Transform the input")
                .conflicts_with("decompress")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path of the output file")
                .num_args(1),
        )
        .arg(
            Arg::new("block-size")
                .long("block-size")
                .value_name("BYTES")
                .help("The number of bytes to read from the input at once")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let cli_compress = matches.get_flag("compress");
    let cli_decompress = matches.get_flag("decompress");
    let cli_checked_mode = matches.get_flag("checked");
    let cli_stats = matches.get_flag("stats");
    let block_size = matches
        .get_one::<usize>("block-size")
        .copied()
        .unwrap_or(DEFAULT_BLOCK_SIZE);
    let ctx = Context::new(block_size);

    let input_path = match matches.get_one::<String>("INPUT") {
        Some(path) => path.clone(),
        None => return ExitCode::FAILURE,
    };

    // The user did not specify the direction. Try to figure it out using the
    // extension.
    let reverse = cli_decompress
        || (!cli_compress && input_path.ends_with(FILE_EXTENSION));
    let dir = if reverse {
        Direction::Reverse
    } else {
        Direction::Forward
    };

    // Come up with a file name, after the direction is known.
    let out = matches
        .get_one::<String>("output")
        .cloned()
        .unwrap_or_else(|| output_path(&input_path, dir));

    let x = Timer::new();
    let report = match transform_file(
        dir,
        Path::new(&input_path),
        Path::new(&out),
        ctx,
    ) {
        Ok(report) => {
            log::info!("Wrote {}.", out);
            report
        }
        Err(err) => {
            log::error!("{:?} pass failed: {}", dir, err);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Processed {} bits.", report.bits);
    if dir == Direction::Forward {
        log::info!("Prediction accuracy is {:.4}.", report.accuracy());
        log::info!(
            "Zero ratio went from {:.4} to {:.4}.",
            report.raw.zero_ratio(),
            report.correctness.zero_ratio()
        );
    }

    if cli_stats {
        print_report(&report);
    }

    if cli_checked_mode && dir == Direction::Forward {
        match check(&input_path, &out, ctx) {
            Ok(true) => log::info!("Correct!"),
            Ok(false) => {
                log::error!("Incorrect!");
                return ExitCode::FAILURE;
            }
            Err(err) => {
                log::error!("Could not reverse the transform: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    drop(x);
    ExitCode::SUCCESS
}
