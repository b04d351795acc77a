// src/cli/input.rs
//! Reads documents and stop-word files supplied on the command line.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, TitleGraphError};
use crate::text::StopWords;
use crate::types::Document;

/// A community name and its documents.
pub type Batch = (String, Vec<Document>);

/// Parses a JSON object of `community -> [document, ...]`, sorted by name.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid JSON.
pub fn load_batches(path: &Path) -> Result<Vec<Batch>> {
    let content = read(path)?;
    parse_batches(&content)
}

/// # Errors
/// Returns error if `content` is not a JSON object of document arrays.
pub fn parse_batches(content: &str) -> Result<Vec<Batch>> {
    let parsed: BTreeMap<String, Vec<Document>> = serde_json::from_str(content)?;
    Ok(parsed.into_iter().collect())
}

/// # Errors
/// Returns error if the file cannot be read.
pub fn load_stopwords(path: &Path) -> Result<StopWords> {
    Ok(StopWords::from_lines(&read(path)?))
}

/// Picks the named community, or the only one when no name is given.
///
/// # Errors
/// Returns error if the name is unknown, or none is given and several exist.
pub fn select<'a>(batches: &'a [Batch], community: Option<&str>) -> Result<&'a Batch> {
    match community {
        Some(name) => batches
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| TitleGraphError::UnknownCommunity(name.to_string())),
        None => match batches {
            [only] => Ok(only),
            [] => Err(TitleGraphError::UnknownCommunity("<none in input>".to_string())),
            many => Err(TitleGraphError::AmbiguousCommunity(
                many.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>().join(", "),
            )),
        },
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TitleGraphError::Io {
        source,
        path: path.to_path_buf(),
    })
}
