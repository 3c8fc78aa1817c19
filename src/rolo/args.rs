use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "A phone book for the command line", long_about = None)]
pub struct Cli {
    /// Snapshot file to load from and save to (defaults to the user data dir)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
