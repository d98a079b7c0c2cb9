//! Language packs
//!
//! Declarative TOML bundles holding the alphabet, keyboard layout, messages and
//! word lists for one language.

mod embedded;
pub mod loader;
mod pack;

pub use embedded::BUNDLED_PACKS;
pub use loader::{PackLocator, PackSource};
use std::collections::BTreeMap;
pub use pack::{LanguagePack, Messages, PackDefaults};

#[cfg(test)]
pub(crate) use pack::tests::sample_pack;

/// Plain language names and the pack each one selects
pub const LANGUAGES: &[(&str, &str)] = &[
    ("english", "en_GB"),
    ("suomi", "fi_FI"),
    ("français", "fr_FR"),
];

/// Program names that select a pack when none is requested
const PROGRAM_PACKS: &[(&str, &str)] = &[("sanuli", "fi_FI"), ("lemot", "fr_FR")];

/// Pack used when nothing else decides
pub const DEFAULT_PACK: &str = "en_GB";

/// Pack name for a plain language name, if that pack is among `packs`
#[must_use]
pub fn pack_for_language(
    language: &str,
    packs: &BTreeMap<String, PackSource>,
) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|&&(name, _)| name == language)
        .map(|&(_, pack)| pack)
        .filter(|pack| packs.contains_key(*pack))
}

/// Language names whose pack is among `packs`
#[must_use]
pub fn available_languages(packs: &BTreeMap<String, PackSource>) -> Vec<&'static str> {
    LANGUAGES
        .iter()
        .filter(|(_, pack)| packs.contains_key(*pack))
        .map(|&(name, _)| name)
        .collect()
}

/// Pack name implied by the name the program was invoked as
///
/// # Examples
/// ```
/// use termwordle::langpack::pack_for_program;
///
/// assert_eq!(pack_for_program("/usr/games/lemot"), "fr_FR");
/// assert_eq!(pack_for_program("termwordle"), "en_GB");
/// ```
#[must_use]
pub fn pack_for_program(argv0: &str) -> &'static str {
    let stem = std::path::Path::new(argv0)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    PROGRAM_PACKS
        .iter()
        .find(|&&(program, _)| stem.starts_with(program))
        .map_or(DEFAULT_PACK, |&(_, pack)| pack)
}
