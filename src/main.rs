//! Main entry point for the pngchunks CLI

mod cli;

use std::{
  fs::File,
  io::{self, BufReader, IsTerminal, Write},
  process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use log::info;
use pngchunks::{
  chunk_table::ChunkTable,
  png::{ChunkDecoder, DecodeOptions},
  report,
};

use crate::cli::Cli;

fn main() -> ExitCode {
  // No arguments at all just shows how to use the program.
  if std::env::args_os().len() <= 1 {
    return match Cli::command().print_help() {
      Ok(()) => ExitCode::SUCCESS,
      Err(e) => {
        eprintln!("{e}");
        ExitCode::FAILURE
      }
    };
  }

  let cli = Cli::parse();

  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  if cli.verbose > 0 {
    log::set_max_level(match cli.verbose {
      1 => log::LevelFilter::Info,
      2 => log::LevelFilter::Debug,
      _ => log::LevelFilter::Trace,
    });
  } else if cli.quiet {
    log::set_max_level(log::LevelFilter::Error);
  }

  if !io::stdout().is_terminal() {
    colored::control::set_override(false);
  }

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{e:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: &Cli) -> Result<()> {
  let Some(path) = cli.input_path() else {
    anyhow::bail!("No filename specified.");
  };

  let table = match cli.chunk_table.clone().or_else(ChunkTable::default_path) {
    Some(table_path) => ChunkTable::load(&table_path),
    None => ChunkTable::default(),
  };

  let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
  info!("reading {}", path.display());
  let options = DecodeOptions { print_text: cli.print_text };
  let decoder = ChunkDecoder::from_png_stream(BufReader::new(file), options)?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  writeln!(out, "{}", report::SIGNATURE_OK_LINE)?;
  let mut count = 0_usize;
  for record in decoder {
    let record = record?;
    writeln!(out, "{}", report::chunk_line(&record, table.describe(record.chunk_ty())))?;
    if let Some(text) = record.text() {
      writeln!(out, "{}", report::text_line(text).yellow())?;
    }
    count += 1;
  }
  info!("{count} chunks in {}", path.display());
  Ok(())
}
