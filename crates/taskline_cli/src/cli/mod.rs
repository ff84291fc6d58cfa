use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Line-oriented task tracker", long_about = None)]
pub struct Cli {
    /// One-shot command to run against the store (e.g. `taskline todo read book`);
    /// with no command an interactive session starts
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub command: Vec<String>,

    /// Override the task store location
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Output one JSON object per executed command
    #[arg(long)]
    pub json: bool,

    /// No banner or framing, responses verbatim
    #[arg(long)]
    pub plain: bool,
}
