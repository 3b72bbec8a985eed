/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */
//! Loading the generator configuration from JSON/YAML files and the command line and running it.

use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ArgMatches;
use serde::Deserialize;

use crate::generator::{GenerationError, Generator};
use crate::output::{OutputFormat, write_entries};
use crate::shortcodes::entry::EmojiEntry;
use crate::tables::curated::CuratedTable;
use crate::tables::emoji_tables::{EmojiTable, enumerate_candidates};
use crate::tables::names::NameTable;

/// The file the entries are written to if nothing else is specified
pub const DEFAULT_OUTPUT_FILE: &str = "emoji-data.js";

/// Everything a generation run needs to know
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// `emoji-test.txt` and `emoji-*sequences.txt` files
    pub table_files: Vec<PathBuf>,
    /// Texts that are scanned for emojis before the tables are enumerated
    pub source_files: Vec<PathBuf>,
    /// Curated data (JSON or data scripts), the first file that defines an emoji wins
    pub curated_files: Vec<PathBuf>,
    /// `UnicodeData.txt`-like files with character names
    pub name_files: Vec<PathBuf>,
    pub output_file: PathBuf,
    pub format: OutputFormat,
    /// The emoji version to download `emoji-test.txt` for (like `13.0`)
    pub emoji_version: Option<String>,
    pub online: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            table_files: vec![],
            source_files: vec![],
            curated_files: vec![],
            name_files: vec![],
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: OutputFormat::default(),
            emoji_version: None,
            online: false,
        }
    }
}

impl GeneratorConfig {
    /// Reads a configuration file.
    ///
    /// `.yaml`/`.yml` files are read as YAML, anything else as JSON.
    /// Relative paths are resolved against the directory of the configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig, ConfigError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let config = match ConfigFormat::for_file(path) {
            ConfigFormat::Yaml => Self::from_yaml_reader(reader)?,
            ConfigFormat::Json => Self::from_json_reader(reader)?,
        };
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base_dir))
    }

    /// # Examples
    /// ```
    /// use std::path::PathBuf;
    /// use emoji_shortcodes::configs::config::GeneratorConfig;
    /// use emoji_shortcodes::output::OutputFormat;
    ///
    /// let config = GeneratorConfig::from_json_reader(r#"{
    ///     "table_files": ["emoji-test.txt"],
    ///     "format": "json"
    /// }"#.as_bytes()).unwrap();
    ///
    /// assert_eq!(config.table_files, vec![PathBuf::from("emoji-test.txt")]);
    /// assert_eq!(config.format, OutputFormat::Json);
    /// assert_eq!(config.output_file, PathBuf::from("emoji-data.js"));
    /// ```
    pub fn from_json_reader<R: Read>(reader: R) -> Result<GeneratorConfig, ConfigError> {
        serde_json::from_reader(reader).map_err(|error| ConfigError::Serde(SerdeError::from(error)))
    }

    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<GeneratorConfig, ConfigError> {
        serde_yaml::from_reader(reader).map_err(|error| ConfigError::Serde(SerdeError::from(error)))
    }

    /// Resolves all relative paths against the given directory.
    pub fn relative_to(self, base_dir: &Path) -> GeneratorConfig {
        let relate_all = |paths: Vec<PathBuf>| -> Vec<PathBuf> {
            paths.iter()
                .map(|path| relate_path(base_dir, path))
                .collect()
        };
        GeneratorConfig {
            table_files: relate_all(self.table_files),
            source_files: relate_all(self.source_files),
            curated_files: relate_all(self.curated_files),
            name_files: relate_all(self.name_files),
            output_file: relate_path(base_dir, &self.output_file),
            ..self
        }
    }

    /// Adds the files given on the command line and lets single values override the configured ones.
    pub fn apply_matches(&mut self, matches: &ArgMatches) -> Result<(), ConfigError> {
        let paths = |name: &str| matches.values_of(name)
            .map(|values| values.map(PathBuf::from).collect::<Vec<_>>())
            .unwrap_or_default();
        self.table_files.extend(paths("table"));
        self.source_files.extend(paths("source"));
        self.curated_files.extend(paths("curated"));
        self.name_files.extend(paths("names"));

        if let Some(output_file) = matches.value_of("output") {
            self.output_file = PathBuf::from(output_file);
        }
        if let Some(format) = matches.value_of("format") {
            self.format = OutputFormat::from_str(format).map_err(ConfigError::Invalid)?;
        }
        if let Some(version) = matches.value_of("online") {
            self.online = true;
            self.emoji_version = Some(version.to_owned());
        }
        Ok(())
    }

    /// The configured emoji version as `(major, minor)`
    /// # Examples
    /// ```
    /// use emoji_shortcodes::configs::config::GeneratorConfig;
    ///
    /// let mut config = GeneratorConfig::default();
    /// config.emoji_version = Some(String::from("13.1"));
    /// assert_eq!(config.version(), Some((13, 1)));
    ///
    /// config.emoji_version = Some(String::from("12"));
    /// assert_eq!(config.version(), Some((12, 0)));
    /// ```
    pub fn version(&self) -> Option<(u32, u32)> {
        let version = self.emoji_version.as_deref()?.trim();
        let mut parts = version.splitn(2, '.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(minor) => minor.parse().ok()?,
            None => 0
        };
        Some((major, minor))
    }

    /// Loads all inputs and generates the entries.
    pub fn generate(&self) -> Result<Vec<EmojiEntry>, GenerationError> {
        let mut table = EmojiTable::from_files(&self.table_files)?;
        if self.online {
            self.expand_online(&mut table)?;
        }
        info!("Loaded {} emoji sequences", table.len());

        let sources = self.source_files.iter()
            .map(std::fs::read_to_string)
            .collect::<Result<Vec<_>, _>>()?;
        let candidates = enumerate_candidates(&table, &sources);
        debug!("Found {} candidates", candidates.len());

        let names = NameTable::from_files(&self.name_files)?;
        let curated = CuratedTable::from_files(&self.curated_files)?;

        Generator::new(&names).generate(&candidates, &curated)
    }

    /// Generates the entries and writes them to the output file.
    /// Returns the number of entries written.
    pub fn run(&self) -> Result<usize, GenerationError> {
        let entries = self.generate()?;
        let writer = BufWriter::new(File::create(&self.output_file)?);
        write_entries(self.format, &entries, writer)?;
        info!("Wrote {} entries to {}", entries.len(), self.output_file.display());
        Ok(entries.len())
    }

    #[cfg(feature = "online")]
    fn expand_online(&self, table: &mut EmojiTable) -> Result<(), GenerationError> {
        match self.version() {
            Some(version) => table.expand_online(version)?,
            None => warn!("No valid emoji version given, skipping the download")
        }
        Ok(())
    }

    #[cfg(not(feature = "online"))]
    fn expand_online(&self, _table: &mut EmojiTable) -> Result<(), GenerationError> {
        warn!("Downloading emoji tables requires the `online` feature");
        Ok(())
    }
}

enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    fn for_file(file: &Path) -> ConfigFormat {
        let extension = file.extension()
            .map(|extension| extension.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => ConfigFormat::Yaml,
            _ => ConfigFormat::Json
        }
    }
}

fn relate_path(base_dir: &Path, target_path: &Path) -> PathBuf {
    // has_root instead of is_absolute, so \file on Windows isn't treated like .\file
    if !target_path.has_root() {
        base_dir.join(&target_path)
    } else {
        target_path.to_path_buf()
    }
}

#[derive(Debug)]
/// An error that occurs while reading the configuration
pub enum ConfigError {
    Io(std::io::Error),
    Serde(SerdeError),
    /// A value that can't be used, e.g. an unknown output format
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(error) => Display::fmt(error, f),
            ConfigError::Serde(error) => Display::fmt(error, f),
            ConfigError::Invalid(message) => Display::fmt(message, f),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

/// The message of a JSON or YAML deserialization error
#[derive(Clone)]
pub struct SerdeError {
    debug: String,
    display: String,
}

impl std::error::Error for SerdeError {}

impl Debug for SerdeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.debug, f)
    }
}

impl Display for SerdeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.display, f)
    }
}

impl<E> From<E> for SerdeError
    where E: serde::de::Error {
    fn from(error: E) -> Self {
        Self {
            debug: format!("{:?}", error),
            display: format!("{}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths() {
        let base = Path::new("configs");
        assert_eq!(relate_path(base, Path::new("emoji-test.txt")), PathBuf::from("configs/emoji-test.txt"));
        assert_eq!(relate_path(base, Path::new("/tmp/emoji-test.txt")), PathBuf::from("/tmp/emoji-test.txt"));
    }

    #[test]
    fn format_by_extension() {
        assert!(matches!(ConfigFormat::for_file(Path::new("config.YML")), ConfigFormat::Yaml));
        assert!(matches!(ConfigFormat::for_file(Path::new("config.yaml")), ConfigFormat::Yaml));
        assert!(matches!(ConfigFormat::for_file(Path::new("config.json")), ConfigFormat::Json));
        assert!(matches!(ConfigFormat::for_file(Path::new("config")), ConfigFormat::Json));
    }
}
