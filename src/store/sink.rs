use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::foundation::error::{AvatarError, AvatarResult};
use crate::foundation::hash::crc32;

/// Avatar family, used as the logical-name prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AvatarKind {
    Face,
    Custom,
    Initials,
    Identicon,
}

impl AvatarKind {
    pub fn prefix(self) -> &'static str {
        match self {
            AvatarKind::Face => "avatar",
            AvatarKind::Custom => "custom_avatar",
            AvatarKind::Initials => "initials",
            AvatarKind::Identicon => "identicon",
        }
    }
}

impl fmt::Display for AvatarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Deterministic storage name: `<prefix>_<key>` with the key reduced to `[A-Za-z0-9_-]`.
///
/// A key with no surviving characters is replaced by its 8-digit hex checksum.
pub fn logical_name(kind: AvatarKind, key: &str) -> String {
    let safe: String = key
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if safe.is_empty() {
        format!("{}_{:08x}", kind.prefix(), crc32(key.as_bytes()))
    } else {
        format!("{}_{safe}", kind.prefix())
    }
}

/// Destination for finished markup.
pub trait AvatarSink: Send + Sync {
    /// Persist `markup` under `logical_name`; returns where it went.
    fn store(&self, logical_name: &str, markup: &str) -> AvatarResult<String>;
}

/// Writes `<root>/<name>.svg`, creating `root` as needed.
#[derive(Clone, Debug)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AvatarSink for FileSink {
    fn store(&self, logical_name: &str, markup: &str) -> AvatarResult<String> {
        if logical_name.is_empty() || logical_name.contains(['/', '\\']) || logical_name == ".." {
            return Err(AvatarError::storage(format!(
                "invalid logical name '{logical_name}'"
            )));
        }
        std::fs::create_dir_all(&self.root).map_err(|e| {
            AvatarError::storage(format!("create '{}': {e}", self.root.display()))
        })?;
        let path = self.root.join(format!("{logical_name}.svg"));
        std::fs::write(&path, markup)
            .map_err(|e| AvatarError::storage(format!("write '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), bytes = markup.len(), "stored avatar");
        Ok(path.display().to_string())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, logical_name: &str) -> Option<String> {
        self.lock().get(logical_name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A poisoned map still holds complete entries.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl AvatarSink for InMemorySink {
    fn store(&self, logical_name: &str, markup: &str) -> AvatarResult<String> {
        self.lock()
            .insert(logical_name.to_string(), markup.to_string());
        Ok(format!("memory://{logical_name}"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/sink.rs"]
mod tests;
