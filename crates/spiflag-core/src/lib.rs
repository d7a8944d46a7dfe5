//! spiflag-core - discovery-aware SPI bus flags
//!
//! This crate ties a command-line flag to the set of SPI buses known at
//! program start, so that `yourcommand --help` shows the buses that actually
//! exist on the machine and a symbolic default (an alias) resolves to the
//! real bus name.
//!
//! # Overview
//!
//! Discovery is modelled as the [`BusLister`] capability: one method that
//! returns the currently known [`BusInfo`] descriptors in a stable order.
//! The flag builder flattens that listing into the flag's help text and
//! resolves the requested default value against canonical names and aliases.
//! The registration target is always an explicit [`clap::Command`]; there is
//! no process-wide flag set.
//!
//! # Example
//!
//! ```no_run
//! use clap::Command;
//! use spiflag_core::{spi_bus_flag, StaticRegistry};
//!
//! let mut registry = StaticRegistry::new();
//! registry.register("spidev0.0", &["/dev/spidev0.0", "spi0"], Some(0));
//!
//! let cmd = Command::new("mytool");
//! let cmd = spi_bus_flag(cmd, &registry, "spi", "spi0", "spi bus to use");
//! let matches = cmd.get_matches();
//!
//! // "spi0" resolved to the canonical name at registration time.
//! let bus = matches.get_one::<String>("spi").expect("flag has a default");
//! println!("using {}", bus);
//! ```

pub mod flag;
pub mod registry;

// Re-exports
pub use flag::{spi_bus_arg, spi_bus_flag};
pub use registry::{BusInfo, BusLister, StaticRegistry};
