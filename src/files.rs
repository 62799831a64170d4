//! Runs passes over files. The result is written into a temporary file next to
//! the output, which replaces the output only when the whole pass succeeded.

use crate::bitstream::{BitReader, BitWriter};
use crate::pipeline::{run_pass, Direction, PassReport};
use crate::utils::FILE_EXTENSION;
use crate::Context;

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// The extension of reversed files whose name did not end with
/// 'FILE_EXTENSION'.
pub const RESTORED_EXTENSION: &str = ".out";

/// The suffix of the temporary file that a pass writes into.
const PARTIAL_SUFFIX: &str = ".partial";

/// Come up with the name of the output file for a pass over 'input'.
/// The forward pass appends the extension, the reverse pass removes it.
pub fn output_path(input: &str, dir: Direction) -> String {
    match dir {
        Direction::Forward => String::from(input) + FILE_EXTENSION,
        Direction::Reverse => match input.strip_suffix(FILE_EXTENSION) {
            Some(stem) if !stem.is_empty() => String::from(stem),
            _ => String::from(input) + RESTORED_EXTENSION,
        },
    }
}

/// Returns true if 'a' and 'b' name the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn partial_path(output: &Path) -> PathBuf {
    let mut name = OsString::from(output.as_os_str());
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}

fn stream_file(
    dir: Direction,
    input: &Path,
    output: &Path,
    ctx: Context,
) -> io::Result<PassReport> {
    let input = File::open(input)?;
    let mut reader = BitReader::with_block_size(input, ctx.block_size());
    let mut writer = BitWriter::new(BufWriter::new(File::create(output)?));
    run_pass(dir, &mut reader, &mut writer)
}

/// Stream the file 'input' through a pass in the direction 'dir' and write the
/// result into 'output'. The output is left untouched if the pass fails, and
/// the input and the output must be different files.
pub fn transform_file(
    dir: Direction,
    input: &Path,
    output: &Path,
    ctx: Context,
) -> io::Result<PassReport> {
    if is_same_file(input, output) {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!("{} is both the input and the output", input.display()),
        ));
    }

    let partial = partial_path(output);
    let report = match stream_file(dir, input, &partial, ctx) {
        Ok(report) => report,
        Err(err) => {
            // The partial file may not exist if the input failed to open.
            let _ = fs::remove_file(&partial);
            return Err(err);
        }
    };

    if let Err(err) = fs::rename(&partial, output) {
        let _ = fs::remove_file(&partial);
        return Err(err);
    }
    log::debug!("Renamed {} to {}", partial.display(), output.display());
    Ok(report)
}
