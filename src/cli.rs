use clap::Parser;
use std::path::PathBuf;

/// Grade durian detections and attach a price to each one.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with an array of detection records (stdin when omitted)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where to write the graded records (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Directory holding base.yaml and the per-environment overrides
    #[arg(long, default_value = "configuration")]
    pub config_dir: PathBuf,
}
