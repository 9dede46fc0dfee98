// File: src/persistence.rs
//! Rule-set files on disk. `.json` files hold the human-editable form,
//! anything else is the compact bincode form; saves go through a named
//! temp file in the target directory so a crash never leaves a half
//! written rule file behind.

use crate::core::rules::RuleSet;
use crate::error::RulesError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn io_error(path: &Path, source: std::io::Error) -> RulesError {
    RulesError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn load_rules(path: &Path) -> Result<RuleSet, RulesError> {
    if !path.exists() {
        return Err(RulesError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let reader = BufReader::new(file);
    let rules = if is_json(path) {
        serde_json::from_reader(reader).map_err(|e| RulesError::Json {
            path: path.to_path_buf(),
            source: e,
        })?
    } else {
        bincode::deserialize_from(reader).map_err(|e| RulesError::Binary {
            path: path.to_path_buf(),
            source: e,
        })?
    };
    log::info!("loaded rule set from {}", path.display());
    Ok(rules)
}

pub fn save_rules(rules: &RuleSet, path: &Path) -> Result<(), RulesError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(|e| io_error(path, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| io_error(path, e))?;
    let writer = BufWriter::new(&temp_file);
    if is_json(path) {
        serde_json::to_writer_pretty(writer, rules).map_err(|e| RulesError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
    } else {
        bincode::serialize_into(writer, rules).map_err(|e| RulesError::Binary {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    temp_file.persist(path).map_err(|e| io_error(path, e.into()))?;
    log::info!("saved rule set to {}", path.display());
    Ok(())
}
