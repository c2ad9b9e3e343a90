use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::io::BufRead;
use std::ops::Deref;
use std::path::Path;

use crate::error::ReleaseError;

pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Where the os-release descriptor lives on a standard Linux system.
pub const DEFAULT_OS_RELEASE_PATH: &str = "/etc/os-release";

/// Key-value pairs read from an os-release file.
///
/// Keys are unique and kept in the order they first appeared; a repeated key
/// replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReleaseInfo(IndexMap<String, String>);

impl ReleaseInfo {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.0
    }
}

impl Deref for ReleaseInfo {
    type Target = IndexMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ReleaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Opens `path` and parses every line as `KEY=VALUE`.
///
/// Any unreadable file or line without `=` fails the whole load.
pub fn parse_os_release(path: impl AsRef<Path>) -> Result<ReleaseInfo> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading os-release");
    let file = std::fs::File::open(path).map_err(|e| ReleaseError::io(path, e))?;
    let reader = std::io::BufReader::new(file);
    read_entries(reader, Some(path))
}

pub fn parse_os_release_from_reader<R: BufRead>(reader: R) -> Result<ReleaseInfo> {
    read_entries(reader, None)
}

fn read_entries<R: BufRead>(reader: R, origin: Option<&Path>) -> Result<ReleaseInfo> {
    let mut map = IndexMap::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let raw = line_result.map_err(|e| match origin {
            Some(path) => ReleaseError::io(path, e),
            None => ReleaseError::Read(e),
        })?;
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }
        let (key, value) = parse_line(line).ok_or_else(|| ReleaseError::parse(idx + 1, line))?;
        tracing::trace!(key, value, "os-release entry");
        map.insert(key.to_string(), value.to_string());
    }

    tracing::debug!(entries = map.len(), "parsed os-release");
    Ok(ReleaseInfo(map))
}

/// Splits on the first `=` and unwraps a double-quoted value.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, raw_value) = line.split_once('=')?;
    Some((key, unquote(raw_value)))
}

// Drops the first and last characters once a leading `"` is seen; the closing
// character is not checked. A lone `"` becomes the empty string.
fn unquote(raw: &str) -> &str {
    match raw.strip_prefix('"') {
        Some(rest) => {
            let mut chars = rest.chars();
            chars.next_back();
            chars.as_str()
        }
        None => raw,
    }
}
