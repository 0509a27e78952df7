//! Persisted opening recommendations
//!
//! Ranking the full dictionary is the single most expensive call, so the
//! result can be cached across process starts: one record per line,
//! comma-separated word and floating-point bits ("tares, 6.19"). The cache
//! carries no dictionary fingerprint; a caller that changes dictionaries is
//! responsible for invalidating it.

use super::entropy::Recommendation;
use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load cached recommendations from `path`
///
/// Returns `Ok(None)` if the file does not exist. Malformed lines are
/// skipped with a warning, like invalid dictionary lines in the word-list
/// loader; a readable file that yields no valid records loads as an empty
/// list, which callers should treat as a miss.
///
/// # Errors
/// Returns an I/O error if an existing file cannot be read.
pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Option<Vec<Recommendation>>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let recommendations: Vec<Recommendation> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match parse_line(line) {
            Some(rec) => Some(rec),
            None => {
                warn!("skipping malformed cache line: {line:?}");
                None
            }
        })
        .collect();

    debug!(
        "loaded {} cached recommendations from {}",
        recommendations.len(),
        path.display()
    );
    Ok(Some(recommendations))
}

/// Save recommendations to `path`, creating parent directories
///
/// # Errors
/// Returns an I/O error if directories cannot be created or the file cannot
/// be written.
pub fn save<P: AsRef<Path>>(path: P, recommendations: &[Recommendation]) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content: String = recommendations
        .iter()
        .map(|rec| format!("{}, {}\n", rec.word.text(), rec.bits))
        .collect();

    fs::write(path, content)?;
    debug!(
        "saved {} recommendations to {}",
        recommendations.len(),
        path.display()
    );
    Ok(())
}

fn parse_line(line: &str) -> Option<Recommendation> {
    let (word, bits) = line.split_once(',')?;
    let word = Word::new(word.trim()).ok()?;
    let bits: f64 = bits.trim().parse().ok()?;
    Some(Recommendation { word, bits })
}
