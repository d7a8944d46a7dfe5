//! spiflag - SPI bus selection demo
//!
//! Demonstrates discovery-aware flag registration: the `--spi` flag's
//! default value and help text are computed from the spidev nodes present
//! when the program starts. Run with `--help` to see the discovered buses
//! in the usage text, `--list` for a table, or `--spi <BUS>` to pick one.

mod cli;

use clap::{CommandFactory, FromArgMatches};
use cli::Cli;
use spiflag_core::{spi_bus_flag, BusInfo, BusLister};
use spiflag_spidev::SpidevScanner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scanner = SpidevScanner::new();

    // Register the discovery-aware flag on the derived command. The command
    // is the explicit flag set; nothing global is touched.
    let cmd = Cli::command();
    let cmd = spi_bus_flag(cmd, &scanner, "spi", "", "spi bus to use");
    let matches = cmd.get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let buses = scanner.buses();
    log::info!("discovered {} SPI bus(es)", buses.len());

    if cli.list {
        print_buses(&buses);
        return Ok(());
    }

    let selected = matches
        .get_one::<String>("spi")
        .cloned()
        .unwrap_or_default();
    if selected.is_empty() {
        eprintln!("No SPI buses discovered and none requested. Try --help.");
        std::process::exit(1);
    }

    match buses
        .iter()
        .find(|b| b.name == selected || b.aliases.iter().any(|a| *a == selected))
    {
        Some(bus) if bus.name == selected => {
            println!("Selected bus: {}", bus.name);
        }
        Some(bus) => {
            println!("Selected bus: {} (alias of {})", selected, bus.name);
        }
        None => {
            println!("Selected bus: {} (not among discovered buses)", selected);
        }
    }

    Ok(())
}

/// Print the discovered buses as a table
fn print_buses(buses: &[BusInfo]) {
    if buses.is_empty() {
        println!("No SPI buses discovered.");
        return;
    }

    println!("{:<14} {:>4}  {}", "Name", "Bus", "Aliases");
    println!("{}", "-".repeat(44));
    for bus in buses {
        let number = bus
            .number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<14} {:>4}  {}", bus.name, number, bus.aliases.join(", "));
    }
}
