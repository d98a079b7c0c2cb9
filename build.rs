//! Build script to embed the bundled language packs
//!
//! Scans `data/langpacks/` and generates a Rust source file with one
//! `include_str!` entry per `.langpack` file.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let packs_dir = Path::new(&manifest_dir).join("data").join("langpacks");

    generate_pack_table(&packs_dir, &Path::new(&out_dir).join("bundled_packs.rs"));

    // Rebuild if a pack is added, removed or edited
    println!("cargo:rerun-if-changed=data/langpacks");
}

fn generate_pack_table(packs_dir: &Path, output_path: &Path) {
    let mut packs: Vec<(String, String)> = fs::read_dir(packs_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", packs_dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "langpack"))
        .filter_map(|path| {
            let name = path.file_stem()?.to_str()?.to_string();
            Some((name, path.display().to_string()))
        })
        .collect();
    packs.sort();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated language pack table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Language packs compiled into the binary, as (name, TOML source)").unwrap();
    writeln!(output, "pub const BUNDLED_PACKS: &[(&str, &str)] = &[").unwrap();

    for (name, path) in &packs {
        println!("cargo:rerun-if-changed={path}");
        writeln!(output, "    ({name:?}, include_str!({path:?})),").unwrap();
    }

    writeln!(output, "];").unwrap();
}
