//! Main entry point for the rezip CLI application.
//!
//! This binary wraps the library's pick/rezip surface in a small tool:
//! list an archive's index, stream picked entries to stdout, or rewrite a
//! selection of entries into a new archive. Any failure terminates the
//! process with the error chain printed; recovery is left to the caller.

use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::Parser;

use rezip::{ArchiveView, Cli};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut view = ArchiveView::open(&cli.file)?;

    // List mode: display the index and exit
    if cli.list || cli.verbose {
        return list_entries(&view, cli.verbose);
    }

    if cli.names.is_empty() {
        bail!("no entries named (use -l to list the archive)");
    }

    // Rezip mode: write the selection into a new archive
    if let Some(output) = &cli.output {
        view.rezip(output, &cli.names)?;
        if !cli.is_quiet() {
            eprintln!(
                "rezipped {} entries into {}",
                cli.names.len(),
                output.display()
            );
        }
        view.close();
        return Ok(());
    }

    // Pick mode: stream each named entry to stdout in the order given,
    // with a marker line between entries when several are requested
    let multiple = cli.names.len() > 1;
    let mut stdout = io::stdout().lock();
    for name in &cli.names {
        if multiple && !cli.is_quiet() {
            writeln!(stdout, "--- {name} ---")?;
        }
        view.pick(name, |reader| io::copy(reader, &mut stdout).map(|_| ()))?;
    }
    view.close();

    Ok(())
}

/// List indexed entries.
///
/// Supports two output formats:
/// - Simple format (`-l`): sorted base names, one per line
/// - Verbose format (`-v`): table with sizes, compression ratio, and the
///   full archived name, plus a totals line
fn list_entries(view: &ArchiveView, verbose: bool) -> Result<()> {
    let mut names: Vec<&str> = view.names().collect();
    names.sort_unstable();

    if !verbose {
        for name in names {
            println!("{name}");
        }
        return Ok(());
    }

    println!("{:>10}  {:>10}  {:>5}  Name", "Length", "Size", "Cmpr");
    println!("{}", "-".repeat(60));

    let mut total_uncompressed = 0u64;
    let mut total_compressed = 0u64;

    for name in &names {
        let Some(meta) = view.meta(name) else {
            continue;
        };
        println!(
            "{:>10}  {:>10}  {}  {}",
            meta.size,
            meta.compressed_size,
            ratio(meta.compressed_size, meta.size),
            meta.full_name
        );
        total_uncompressed += meta.size;
        total_compressed += meta.compressed_size;
    }

    println!("{}", "-".repeat(60));
    println!(
        "{:>10}  {:>10}  {}  {} files",
        total_uncompressed,
        total_compressed,
        ratio(total_compressed, total_uncompressed),
        names.len()
    );

    Ok(())
}

/// Compression ratio as percentage saved, aligned for the listing table.
fn ratio(compressed: u64, uncompressed: u64) -> String {
    if uncompressed > 0 {
        format!("{:>4}%", 100 - (compressed * 100 / uncompressed))
    } else {
        "  0%".to_string()
    }
}
