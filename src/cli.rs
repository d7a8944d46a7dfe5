//! CLI argument parsing
//!
//! Only the static flags live here; the `--spi` flag is built at runtime
//! from discovery and grafted onto the derived command in `main`.

use clap::Parser;

#[derive(Parser)]
#[command(name = "spiflag")]
#[command(author, version, about = "Show which SPI bus a discovery-aware flag selects", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// List discovered buses and exit
    #[arg(short, long)]
    pub list: bool,
}
