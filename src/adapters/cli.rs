use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "atm_session")]
#[command(about = "Single-account ATM simulator", long_about = None)]
pub struct Args {
    /// Account record file (`pin,name,balance`)
    #[arg(long)]
    pub account_file: Option<PathBuf>,

    /// TOML configuration file, read when present
    #[arg(long, default_value = "atm.toml")]
    pub config: PathBuf,

    /// Do not show the stored PIN in the login prompt
    #[arg(long)]
    pub no_pin_hint: bool,

    /// Currency symbol printed in front of amounts
    #[arg(long)]
    pub currency: Option<String>,
}

/// Parse command-line arguments
pub fn parse_cli_args() -> Args {
    Args::parse()
}
