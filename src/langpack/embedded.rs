//! Bundled language packs
//!
//! Pack sources compiled into the binary at build time.

// Include generated pack table from build script
include!(concat!(env!("OUT_DIR"), "/bundled_packs.rs"));
