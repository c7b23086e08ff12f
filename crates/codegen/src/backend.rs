//! Generation and output for one compilation.

use crate::error::{BackendError, BackendResult};
use crate::registry::TargetRegistry;
use rossoc_parser::Ir;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Renders an [`Ir`] through the registry and writes the result.
///
/// The rendered text is kept in memory until [`Backend::write`], so a
/// failed generation never touches the filesystem.
pub struct Backend {
    registry: TargetRegistry,
    content: Option<String>,
}

impl Backend {
    pub fn new(registry: TargetRegistry) -> Self {
        Backend {
            registry,
            content: None,
        }
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Text from the last call to [`Backend::generate`], if it succeeded.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Render `ir` with the renderer registered for `ir.target`.
    ///
    /// Text from an earlier call is discarded first, so after a failure
    /// there is nothing left to write.
    pub fn generate(&mut self, ir: &Ir) -> BackendResult<&str> {
        self.content = None;
        let renderer = self
            .registry
            .get(&ir.target)
            .ok_or_else(|| BackendError::UnknownTarget(ir.target.clone()))?;

        let content = renderer.render(ir);
        tracing::debug!(
            target_name = %ir.target,
            bytes = content.len(),
            "generated program"
        );

        Ok(self.content.insert(content).as_str())
    }

    /// Write the generated text to `path`.
    ///
    /// Fails with `NoContent` before anything was generated, `NoOutputPath`
    /// when `path` is absent or empty, and `FileExists` when the file exists
    /// and `overwrite` is false. The text goes to a temporary file next to
    /// `path` which is then renamed over it, so readers never see a partial
    /// file.
    pub fn write(&self, path: Option<&Path>, overwrite: bool) -> BackendResult<()> {
        let content = self.content.as_deref().ok_or(BackendError::NoContent)?;
        let path = path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(BackendError::NoOutputPath)?;

        if !overwrite && path.exists() {
            return Err(BackendError::FileExists(path.to_path_buf()));
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        if overwrite {
            file.persist(path).map_err(|e| e.error)?;
        } else {
            file.persist_noclobber(path).map_err(|e| match e.error.kind() {
                io::ErrorKind::AlreadyExists => BackendError::FileExists(path.to_path_buf()),
                _ => BackendError::Io(e.error),
            })?;
        }

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output");
        Ok(())
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::new(TargetRegistry::with_builtins())
    }
}
