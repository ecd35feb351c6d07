use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "Interactive command-line address book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Directory holding the address book and its config
    /// (defaults to $ROLODEX_HOME, then the platform data dir)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}
