//! spiflag-spidev - Linux spidev bus discovery
//!
//! The Linux SPI subsystem exposes userspace-accessible controllers as
//! character devices at `/dev/spidevX.Y`, where X is the bus number and Y
//! the chip select. This crate turns those nodes into bus descriptors for
//! flag registration.
//!
//! # Overview
//!
//! [`SpidevScanner`] reads the device directory, keeps entries named
//! `spidev<bus>.<cs>`, and reports them ordered by (bus, chip select). Each
//! bus is listed under its canonical `spidevX.Y` name, with the device node
//! path as an alias and, for chip select 0, the `spiX` shorthand.
//!
//! # Example
//!
//! ```no_run
//! use spiflag_core::BusLister;
//! use spiflag_spidev::SpidevScanner;
//!
//! let scanner = SpidevScanner::new();
//! for bus in scanner.buses() {
//!     println!("{} (aliases: {})", bus.name, bus.aliases.join(", "));
//! }
//! ```
//!
//! # System Requirements
//!
//! - Linux kernel with spidev support enabled (`CONFIG_SPI_SPIDEV`)
//! - Read access to `/dev`
//!
//! On systems without spidev nodes the scan simply reports no buses.

pub mod error;
pub mod scan;

// Re-exports
pub use error::{Result, ScanError};
pub use scan::{parse_spidev_name, SpidevScanner};
