//! Language pack discovery and loading
//!
//! Packs are looked up by name in a list of directories, then among the packs
//! compiled into the binary. A file on disk shadows a bundled pack of the same
//! name.

use super::embedded::BUNDLED_PACKS;
use super::pack::LanguagePack;
use crate::error::GameError;
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// System-wide directory for installed packs
pub const SYSTEM_PACK_DIR: &str = "/usr/share/games/termwordle";

/// File extension of language pack files
pub const PACK_EXTENSION: &str = "langpack";

/// Where a pack comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackSource {
    File(PathBuf),
    Bundled(&'static str),
}

/// Finds language packs on disk and in the binary
#[derive(Debug, Clone)]
pub struct PackLocator {
    dirs: Vec<PathBuf>,
}

impl PackLocator {
    /// Search `extra_dirs` first, then the system directory and the working directory
    pub fn new(extra_dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut dirs: Vec<PathBuf> = extra_dirs.into_iter().collect();
        dirs.push(PathBuf::from(SYSTEM_PACK_DIR));
        dirs.push(PathBuf::from("."));
        Self { dirs }
    }

    /// Only search the given directories (plus bundled packs)
    pub fn with_dirs(dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            dirs: dirs.into_iter().collect(),
        }
    }

    /// All pack names that can be loaded, with the source that wins for each
    #[must_use]
    pub fn available(&self) -> BTreeMap<String, PackSource> {
        let mut packs: BTreeMap<String, PackSource> = BUNDLED_PACKS
            .iter()
            .map(|&(name, source)| (name.to_string(), PackSource::Bundled(source)))
            .collect();

        // Earlier directories win, so insert them last
        for dir in self.dirs.iter().rev() {
            for (name, path) in pack_files(dir) {
                packs.insert(name, PackSource::File(path));
            }
        }

        packs
    }

    /// Load and parse a pack by name
    ///
    /// # Errors
    /// Returns `GameError::PackNotFound` if no pack has that name, an I/O error
    /// if the file cannot be read, or a parse error from `LanguagePack::from_toml`.
    pub fn load(&self, name: &str) -> Result<LanguagePack, GameError> {
        match self.available().remove(name) {
            Some(PackSource::File(path)) => {
                debug!("Loading language pack {name} from {}", path.display());
                let source = fs::read_to_string(&path)?;
                LanguagePack::from_toml(name, &source, &path)
            }
            Some(PackSource::Bundled(source)) => {
                debug!("Loading bundled language pack {name}");
                let origin = PathBuf::from(format!("<bundled>/{name}.{PACK_EXTENSION}"));
                LanguagePack::from_toml(name, source, &origin)
            }
            None => Err(GameError::PackNotFound(name.to_string())),
        }
    }
}

/// Pack files in a directory, skipping anything that is not `<name>.langpack`
fn pack_files(dir: &Path) -> Vec<(String, PathBuf)> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == PACK_EXTENSION))
        .filter_map(|path| {
            let name = path.file_stem()?.to_str()?.to_string();
            is_pack_name(&name).then_some((name, path))
        })
        .collect()
}

fn is_pack_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::langpack::pack::tests::SAMPLE;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("termwordle-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn bundled_packs_are_available() {
        let locator = PackLocator::with_dirs([]);
        let packs = locator.available();
        assert!(packs.contains_key("en_GB"));
        assert!(packs.contains_key("fr_FR"));
        assert!(packs.contains_key("fi_FI"));
    }

    #[test]
    fn bundled_packs_parse() {
        let locator = PackLocator::with_dirs([]);
        for name in locator.available().keys() {
            let pack = locator.load(name).unwrap();
            assert!(!pack.frequency_list().is_empty(), "{name} has no words");
            assert!(!pack.alphabet().is_empty(), "{name} has no keys");
        }
    }

    #[test]
    fn bundled_words_only_use_keyboard_letters() {
        let locator = PackLocator::with_dirs([]);
        for name in locator.available().keys() {
            let pack = locator.load(name).unwrap();
            let keys = pack.alphabet();
            let words = pack.frequency_list().iter().chain(pack.extra_words());
            for word in words {
                assert!(
                    word.letters().iter().all(|c| keys.contains(c)),
                    "{name}: {word} has a letter with no key"
                );
            }
        }
    }

    #[test]
    fn unknown_pack_is_reported() {
        let locator = PackLocator::with_dirs([]);
        assert!(matches!(
            locator.load("xx_XX"),
            Err(GameError::PackNotFound(name)) if name == "xx_XX"
        ));
    }

    #[test]
    fn file_pack_is_discovered_and_shadows_bundled() {
        let dir = scratch_dir("shadow");
        fs::write(dir.join("en_GB.langpack"), SAMPLE).unwrap();
        fs::write(dir.join("custom.langpack"), SAMPLE).unwrap();
        fs::write(dir.join("not a pack.langpack"), SAMPLE).unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let locator = PackLocator::with_dirs([dir.clone()]);
        let packs = locator.available();
        assert_eq!(
            packs.get("custom"),
            Some(&PackSource::File(dir.join("custom.langpack")))
        );
        assert_eq!(
            packs.get("en_GB"),
            Some(&PackSource::File(dir.join("en_GB.langpack")))
        );
        assert!(!packs.contains_key("not a pack"));
        assert!(!packs.contains_key("notes"));

        let pack = locator.load("en_GB").unwrap();
        assert_eq!(pack.description(), "Test pack");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn pack_names() {
        assert!(is_pack_name("en_GB"));
        assert!(is_pack_name("pt-BR"));
        assert!(!is_pack_name("en GB"));
        assert!(!is_pack_name(""));
    }
}
