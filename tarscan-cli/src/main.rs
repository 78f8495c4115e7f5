//! tarscan CLI - list, verify and inspect ustar archives.

mod commands;
mod logging;
mod utils;

use clap::{Parser, Subcommand};
use commands::{ListOptions, cmd_cat, cmd_info, cmd_list, cmd_test};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tarscan")]
#[command(author, version, about = "Streaming ustar archive scanner")]
#[command(long_about = "
tarscan walks a tar archive header by header, validating each checksum and
skipping file content without reading it.

Examples:
  tarscan list backup.tar
  tarscan list --long backup.tar
  tarscan list --json -I '*.conf' backup.tar
  tarscan test backup.tar
  tarscan info backup.tar
  tarscan cat backup.tar etc/hosts
")]
struct Cli {
    /// Log scan progress to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List contents of an archive
    #[command(alias = "l")]
    List {
        /// Archive file to list
        archive: PathBuf,

        /// Show type, mode, size and header offset
        #[arg(short, long)]
        long: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Include only entries matching pattern (glob syntax: *.txt, src/**/*)
        #[arg(short = 'I', long)]
        include: Vec<String>,

        /// Exclude entries matching pattern (glob syntax)
        #[arg(short = 'X', long)]
        exclude: Vec<String>,
    },

    /// Verify every header checksum
    #[command(alias = "t")]
    Test {
        /// Archive file to test
        archive: PathBuf,
    },

    /// Show summary information about an archive
    #[command(alias = "i")]
    Info {
        /// Archive file to inspect
        archive: PathBuf,
    },

    /// Write one entry's content to stdout
    Cat {
        /// Archive file to read from
        archive: PathBuf,

        /// Path of the entry inside the archive
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::List {
            archive,
            long,
            json,
            include,
            exclude,
        } => cmd_list(
            &archive,
            &ListOptions {
                long,
                json,
                include: &include,
                exclude: &exclude,
            },
        ),
        Commands::Test { archive } => cmd_test(&archive),
        Commands::Info { archive } => cmd_info(&archive),
        Commands::Cat { archive, path } => cmd_cat(&archive, &path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
