//! SPI bus descriptors and the discovery capability
//!
//! Discovery backends produce [`BusInfo`] records describing the buses that
//! exist right now. The [`BusLister`] trait is the only coupling point
//! between a backend and the flag builder.

/// A discovered SPI bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusInfo {
    /// Canonical name (used for matching and as the flag default)
    pub name: String,
    /// Alternative names accepted for this bus
    pub aliases: Vec<String>,
    /// Bus number, when discovery knows it (not consulted for flag binding)
    pub number: Option<u32>,
}

/// Source of SPI bus descriptors
///
/// Implementations return the buses known at the time of the call, in a
/// stable order of their choosing. Listing must not fail: a backend that
/// cannot enumerate degrades to an empty listing.
pub trait BusLister {
    /// List the currently known buses
    fn buses(&self) -> Vec<BusInfo>;
}

/// In-memory bus registry with explicit registration
///
/// Buses are listed in registration order. Useful for tests and for
/// programs that enumerate buses through their own means.
#[derive(Debug, Default)]
pub struct StaticRegistry {
    buses: Vec<BusInfo>,
}

impl StaticRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bus under `name`, with optional aliases and bus number
    pub fn register(&mut self, name: impl Into<String>, aliases: &[&str], number: Option<u32>) {
        let name = name.into();
        log::debug!("registering bus {:?} ({} aliases)", name, aliases.len());
        self.buses.push(BusInfo {
            name,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            number,
        });
    }

    /// Number of registered buses
    pub fn len(&self) -> usize {
        self.buses.len()
    }

    /// True when no buses are registered
    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}

impl BusLister for StaticRegistry {
    fn buses(&self) -> Vec<BusInfo> {
        self.buses.clone()
    }
}
