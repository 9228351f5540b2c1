//! Flat binary images in, full-memory dumps out. No headers, no banking:
//! bytes are copied verbatim to the load address.

use crate::bus::{Bus, MEMORY_SIZE};
use snafu::{ensure, ResultExt, Snafu};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename used for memory dumps when no path is given.
pub const DEFAULT_DUMP: &str = "memdump";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("could not read image {}: {source}", path.display()))]
    ReadImage {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("image {} is empty", path.display()))]
    EmptyImage { path: PathBuf },
    #[snafu(display("could not write memory dump {}: {source}", path.display()))]
    WriteDump {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Zeroes memory and copies the image at `path` in, starting at `load_addr`.
/// Anything that would run past the top of the address space is silently
/// truncated. Returns the number of bytes actually loaded.
pub fn load_into(bus: &mut Bus, path: &Path, load_addr: u16) -> Result<usize, Error> {
    bus.clear();
    let image = fs::read(path).context(ReadImageSnafu { path })?;
    ensure!(!image.is_empty(), EmptyImageSnafu { path });

    let max = MEMORY_SIZE - usize::from(load_addr);
    let count = image.len().min(max);
    bus.load(load_addr, &image[..count]);
    log::info!(
        "loaded ${count:04x} bytes: ${load_addr:04x} - ${:04x}",
        usize::from(load_addr) + count - 1,
    );
    Ok(count)
}

/// Writes the entire 64 KiB address space to `path`, or to [`DEFAULT_DUMP`]
/// when no path is given.
pub fn save_memory(bus: &Bus, path: Option<&Path>) -> Result<(), Error> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_DUMP));
    fs::write(path, bus.as_bytes()).context(WriteDumpSnafu { path })
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;

    fn scratch(name: &str) -> PathBuf {
        env::temp_dir().join(format!("sim6502-rom-{name}-{}", std::process::id()))
    }

    #[test]
    fn loads_at_the_requested_address() {
        let path = scratch("load");
        fs::write(&path, [0xA9, 0x01, 0x00]).unwrap();

        let mut bus = Bus::new();
        let count = load_into(&mut bus, &path, 0xC000).unwrap();
        assert_eq!(count, 3);
        assert_eq!(bus.mem_read(0xC000), 0xA9);
        assert_eq!(bus.mem_read(0xC002), 0x00);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn truncates_an_image_that_overruns_memory() {
        let path = scratch("truncate");
        fs::write(&path, [0x55; 32]).unwrap();

        let mut bus = Bus::new();
        let count = load_into(&mut bus, &path, 0xFFF0).unwrap();
        assert_eq!(count, 16);
        assert_eq!(bus.mem_read(0xFFFF), 0x55);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut bus = Bus::new();
        let err = load_into(&mut bus, Path::new("no-such-image.bin"), 0).unwrap_err();
        assert!(matches!(err, Error::ReadImage { .. }));
    }

    #[test]
    fn dump_round_trips_all_of_memory() {
        let path = scratch("dump");
        let mut bus = Bus::new();
        bus.mem_write(0x1234, 0xAB);

        save_memory(&bus, Some(&path)).unwrap();
        let dumped = fs::read(&path).unwrap();
        assert_eq!(dumped.len(), MEMORY_SIZE);
        assert_eq!(dumped[0x1234], 0xAB);

        fs::remove_file(path).unwrap();
    }
}
