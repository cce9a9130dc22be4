//! Command line arguments for `pngchunks`

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(name = "pngchunks")]
#[command(about = "Lists the chunks of a PNG file", long_about = None)]
#[command(version)]
pub struct Cli {
  /// PNG file to read
  #[arg(short = 'i', value_name = "FILE", num_args = 0..=1, default_missing_value = "")]
  pub input: Option<PathBuf>,

  /// Print the text of tEXt chunks
  #[arg(long)]
  pub print_text: bool,

  /// Chunk description table [default: chunk_table.json next to the executable]
  #[arg(long, value_name = "PATH", env = "PNGCHUNKS_CHUNK_TABLE")]
  pub chunk_table: Option<PathBuf>,

  /// Verbosity level (can be repeated for more detail)
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all log output except errors
  #[arg(short, long)]
  pub quiet: bool,
}

impl Cli {
  /// The file to read. A `-i` with nothing after it counts as no file.
  #[must_use]
  pub fn input_path(&self) -> Option<&Path> {
    self.input.as_deref().filter(|p| !p.as_os_str().is_empty())
  }
}
