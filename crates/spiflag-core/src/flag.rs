//! Discovery-aware flag construction and registration
//!
//! The flag's default value and help text are fixed at registration time
//! from whatever the discovery backend reports; later parsing is entirely
//! clap's business.

use crate::registry::{BusInfo, BusLister};
use clap::{Arg, Command};

/// Build a string flag whose default value and help text reflect the buses
/// currently known to `registry`.
///
/// The requested `default` may be a canonical bus name or any alias; it is
/// resolved to the matching bus's canonical name. When it matches nothing
/// the first discovered bus is used, and with no buses at all the default is
/// the empty string. The help text is `usage` followed by the full listing,
/// e.g. `"spi bus to use; available devices: [spidev0.0 /dev/spidev0.0]"`.
///
/// Registration is left to the caller; see [`spi_bus_flag`] for the variant
/// that attaches the flag to a [`Command`] directly.
pub fn spi_bus_arg(
    registry: &dyn BusLister,
    name: &'static str,
    default: &str,
    usage: &str,
) -> Arg {
    let buses = registry.buses();
    let names = display_names(&buses);
    let def = resolve_default(&buses, default);

    log::debug!(
        "flag --{}: requested default {:?} resolved to {:?} ({} candidate names)",
        name,
        default,
        def,
        names.len()
    );

    Arg::new(name)
        .long(name)
        .value_name("BUS")
        .default_value(def)
        .help(format!(
            "{}; available devices: [{}]",
            usage,
            names.join(" ")
        ))
}

/// Register the flag built by [`spi_bus_arg`] on `cmd`
///
/// Behaves exactly like [`spi_bus_arg`]; `cmd` is the flag set the binding
/// lands on. A `name` already registered on `cmd` is clap's failure
/// surface, not handled here.
pub fn spi_bus_flag(
    cmd: Command,
    registry: &dyn BusLister,
    name: &'static str,
    default: &str,
    usage: &str,
) -> Command {
    cmd.arg(spi_bus_arg(registry, name, default, usage))
}

/// Flatten descriptors into display order: each canonical name followed by
/// that bus's own aliases, buses in discovery order.
fn display_names(buses: &[BusInfo]) -> Vec<String> {
    let mut names = Vec::new();
    for bus in buses {
        names.push(bus.name.clone());
        names.extend(bus.aliases.iter().cloned());
    }
    names
}

/// Resolve a requested default against the discovered buses.
///
/// Buses are scanned in discovery order, canonical name before that bus's
/// own aliases; the first match supplies its canonical name. An alias of an
/// earlier bus therefore wins over the canonical name of a later one. With
/// no match the first discovered bus wins, and with no buses the result is
/// empty.
fn resolve_default(buses: &[BusInfo], requested: &str) -> String {
    for bus in buses {
        if bus.name == requested || bus.aliases.iter().any(|a| a == requested) {
            return bus.name.clone();
        }
    }
    buses.first().map(|b| b.name.clone()).unwrap_or_default()
}
