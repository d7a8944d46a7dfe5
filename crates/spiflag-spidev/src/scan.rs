//! Device directory scanning
//!
//! Discovery is name-based: any directory entry whose file name parses as
//! `spidev<bus>.<cs>` counts as a bus. Nothing is opened, so enumeration
//! works without read permission on the nodes themselves.

use crate::error::{Result, ScanError};

use spiflag_core::{BusInfo, BusLister};

use std::fs;
use std::path::{Path, PathBuf};

/// Default directory containing spidev character devices
const DEV_DIR: &str = "/dev";

/// Parse a `spidev<bus>.<cs>` file name into (bus, chip select).
///
/// Both numbers must be plain decimal; anything else (missing dot, signs,
/// stray characters) is rejected rather than guessed at.
pub fn parse_spidev_name(name: &str) -> Option<(u32, u32)> {
    let rest = name.strip_prefix("spidev")?;
    let (bus, cs) = rest.split_once('.')?;
    if bus.is_empty() || cs.is_empty() {
        return None;
    }
    if !bus.bytes().all(|b| b.is_ascii_digit()) || !cs.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((bus.parse().ok()?, cs.parse().ok()?))
}

/// Discovers SPI buses from spidev device nodes
#[derive(Debug, Clone)]
pub struct SpidevScanner {
    dev_dir: PathBuf,
}

impl SpidevScanner {
    /// Scanner over the standard `/dev` directory
    pub fn new() -> Self {
        Self {
            dev_dir: PathBuf::from(DEV_DIR),
        }
    }

    /// Scanner over an alternative device directory
    pub fn with_dev_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dev_dir: dir.into(),
        }
    }

    /// Enumerate spidev nodes, ordered by (bus, chip select).
    ///
    /// Directory read order is not stable across kernels and filesystems,
    /// so the result is sorted to keep flag defaults deterministic.
    pub fn scan(&self) -> Result<Vec<BusInfo>> {
        let entries = fs::read_dir(&self.dev_dir).map_err(|source| ScanError::ReadDir {
            dir: self.dev_dir.display().to_string(),
            source,
        })?;

        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::ReadDir {
                dir: self.dev_dir.display().to_string(),
                source,
            })?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some((bus, cs)) = parse_spidev_name(name) {
                found.push((bus, cs));
            }
        }
        found.sort_unstable();

        log::debug!(
            "found {} spidev node(s) under {}",
            found.len(),
            self.dev_dir.display()
        );

        Ok(found
            .into_iter()
            .map(|(bus, cs)| bus_info(&self.dev_dir, bus, cs))
            .collect())
    }
}

impl Default for SpidevScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl BusLister for SpidevScanner {
    fn buses(&self) -> Vec<BusInfo> {
        match self.scan() {
            Ok(buses) => buses,
            Err(e) => {
                log::warn!("spidev scan failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Build the descriptor for one node: canonical `spidevX.Y`, the node path
/// as an alias, and the `spiX` shorthand for chip select 0.
fn bus_info(dev_dir: &Path, bus: u32, cs: u32) -> BusInfo {
    let name = format!("spidev{}.{}", bus, cs);
    let mut aliases = vec![dev_dir.join(&name).display().to_string()];
    if cs == 0 {
        aliases.push(format!("spi{}", bus));
    }
    BusInfo {
        name,
        aliases,
        number: Some(bus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_parse_spidev_name() {
        assert_eq!(parse_spidev_name("spidev0.0"), Some((0, 0)));
        assert_eq!(parse_spidev_name("spidev10.2"), Some((10, 2)));
        assert_eq!(parse_spidev_name("spidev"), None);
        assert_eq!(parse_spidev_name("spidev0"), None);
        assert_eq!(parse_spidev_name("spidev0."), None);
        assert_eq!(parse_spidev_name("spidev.0"), None);
        assert_eq!(parse_spidev_name("spidevX.Y"), None);
        assert_eq!(parse_spidev_name("spidev-1.0"), None);
        assert_eq!(parse_spidev_name("spidev0.0.bak"), None);
        assert_eq!(parse_spidev_name("mmcblk0"), None);
    }

    #[test]
    fn test_scan_orders_by_bus_and_chip_select() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["spidev1.1", "spidev0.1", "spidev0.0", "ttyUSB0"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let scanner = SpidevScanner::with_dev_dir(dir.path());
        let names: Vec<_> = scanner
            .scan()
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["spidev0.0", "spidev0.1", "spidev1.1"]);
    }

    #[test]
    fn test_scan_synthesizes_aliases() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("spidev2.0")).unwrap();
        File::create(dir.path().join("spidev2.1")).unwrap();

        let scanner = SpidevScanner::with_dev_dir(dir.path());
        let buses = scanner.scan().unwrap();

        assert_eq!(buses[0].name, "spidev2.0");
        let node = dir.path().join("spidev2.0").display().to_string();
        assert_eq!(buses[0].aliases, [node, "spi2".to_string()]);
        assert_eq!(buses[0].number, Some(2));

        // Chip select 1 gets no spi2 shorthand, only the node path.
        assert_eq!(buses[1].name, "spidev2.1");
        let node = dir.path().join("spidev2.1").display().to_string();
        assert_eq!(buses[1].aliases, [node]);
    }

    #[test]
    fn test_scan_empty_directory_yields_no_buses() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = SpidevScanner::with_dev_dir(dir.path());
        assert!(scanner.scan().unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_errors_but_listing_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = SpidevScanner::with_dev_dir(dir.path().join("missing"));
        assert!(scanner.scan().is_err());
        assert!(scanner.buses().is_empty());
    }
}
