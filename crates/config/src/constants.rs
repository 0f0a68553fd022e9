//! Fixed values shared across crates.

/// Log file name inside the cache directory.
pub const LOG_FILE_NAME: &str = "bitworks.log";

/// Lines of the boot screen, shown one at a time.
pub const BOOT_LINES: &[&str] = &[
    "JackROM BIOS (C) 1991 Jack Games Ltd.",
    "12-25-1991",
    "",
    "Main Processor: JG25",
    "Base Memory: 640 KB OK",
    "Extended Memory: 7424 KB",
    "128K CACHE MEMORY OK",
    "40MHz CPU Clock",
    "Detecting IDE Devices ...",
    "Primary Master: 40MB ST-251",
    "Primary Slave: None",
    "Starting DOS...",
    "",
    "C:\\>bitworks.exe",
    "Loading BitWorks Text Editor...",
    "",
    "",
];

/// Pause after the last boot line before the IDE appears (ms).
pub const BOOT_HOLD_MS: u64 = 500;

/// Name shown in the About message and the window chrome.
pub const PROGRAM_NAME: &str = "BitWorks Text Editor";
