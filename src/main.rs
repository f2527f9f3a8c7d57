use anyhow::Result;
use clap::{Parser, Subcommand};
use rolo::index::{AddressBook, default_index_path, stats};
use rolo::{import, output};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rolo")]
#[command(about = "Terminal-first contact book with prefix-indexed search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from a CSV file and persist it
    Import {
        /// CSV file with FirstName,LastName,Address,PhoneNumber columns
        file: PathBuf,

        /// Index file to write (defaults to the platform data directory)
        #[arg(short, long)]
        index: Option<PathBuf>,
    },
    /// Search the persisted index
    #[command(group(
        clap::ArgGroup::new("query")
            .required(true)
            .multiple(true)
    ))]
    Search {
        /// Search by name prefix
        #[arg(long, group = "query")]
        name: Option<String>,

        /// Search by phone-number prefix
        #[arg(long, group = "query")]
        phone: Option<String>,

        /// Index file to read
        #[arg(short, long)]
        index: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show index statistics
    Stats {
        /// Index file to read
        #[arg(short, long)]
        index: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Import { file, index } => {
            let index_path = resolve_index_path(index)?;
            import_command(&file, &index_path)?;
        }
        Commands::Search {
            name,
            phone,
            index,
            no_color,
        } => {
            let index_path = resolve_index_path(index)?;
            search_command(name.as_deref(), phone.as_deref(), &index_path, !no_color)?;
        }
        Commands::Stats { index } => {
            let index_path = resolve_index_path(index)?;
            stats::show_stats(&index_path)?;
        }
    }

    Ok(())
}

/// Explicit index path, or the platform default.
fn resolve_index_path(index: Option<PathBuf>) -> Result<PathBuf> {
    match index {
        Some(path) => Ok(path),
        None => default_index_path(),
    }
}

fn import_command(file: &Path, index_path: &Path) -> Result<()> {
    #[cfg(feature = "progress")]
    let spinner = {
        use indicatif::{ProgressBar, ProgressStyle};
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(format!("Importing {}", file.display()));
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        spinner
    };

    let mut book = AddressBook::new();
    let result = import::read_contacts(file).and_then(|records| book.import_records(records));

    #[cfg(feature = "progress")]
    spinner.finish_and_clear();

    // The index is only written once the whole batch has been consumed, so
    // a failed import never leaves a partial document behind.
    let count = result?;
    book.save(index_path)?;

    println!("Imported {} contacts", count);
    println!("Index written to: {}", index_path.display());
    Ok(())
}

fn search_command(
    name: Option<&str>,
    phone: Option<&str>,
    index_path: &Path,
    color: bool,
) -> Result<()> {
    let mut book = AddressBook::new();
    if let Err(err) = book.load(index_path) {
        // A failed load is reported but not fatal; queries run against the
        // empty book and return no matches.
        eprintln!(
            "Warning: could not load index from {}: {:#}",
            index_path.display(),
            err
        );
    }

    if let Some(name) = name {
        let matches = book.search_by_name(name);
        output::print_matches(&format!("Name matches for '{}'", name), matches, color)?;
    }

    if let Some(phone) = phone {
        let matches = book.search_by_phone_number(phone);
        output::print_matches(&format!("Phone matches for '{}'", phone), matches, color)?;
    }

    Ok(())
}
