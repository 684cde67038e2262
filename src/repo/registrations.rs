use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::NamedTempFile;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::error::StoreError;
use crate::model::Registration;
use crate::telemetry::spawn_blocking_with_tracing;

/// Exclusive right to rewrite a [`RegistrationStore`]
pub type WriterGuard = OwnedMutexGuard<()>;

/// Handle to the JSON file holding every registration record.
///
/// The file is a single JSON array, rewritten in full on every save. Saves go
/// through a temporary file in the same directory that is renamed over the
/// target, so readers see either the old or the new array and never a partial
/// write.
///
/// Clones share one writer lock. Saving requires the [`WriterGuard`] from
/// [`RegistrationStore::lock`], which is released only once the file is in
/// place, even if the saving future is dropped part way.
#[derive(Debug, Clone)]
pub struct RegistrationStore {
    path: PathBuf,
    writer: Arc<Mutex<()>>,
}

impl RegistrationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the single-writer lock for this store
    pub async fn lock(&self) -> WriterGuard {
        self.writer.clone().lock_owned().await
    }

    /// Load all records in stored order.
    /// A missing or blank file is an empty store.
    #[tracing::instrument(name = "Load registrations", skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Vec<Registration>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Registration store does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::Read(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(StoreError::Malformed)
    }

    /// Replace the stored records with `registrations`.
    /// `writer` is held by the blocking write and dropped after the rename.
    #[tracing::instrument(
        name = "Save registrations",
        skip(self, writer, registrations),
        fields(path = %self.path.display(), count = registrations.len())
    )]
    pub async fn save(
        &self,
        writer: WriterGuard,
        registrations: &[Registration],
    ) -> Result<(), StoreError> {
        let contents = serde_json::to_vec_pretty(registrations).map_err(StoreError::Encode)?;
        let path = self.path.clone();

        spawn_blocking_with_tracing(move || {
            let result = write_atomic(&path, &contents);
            drop(writer);
            result
        })
        .await
        .map_err(|e| StoreError::Write(io::Error::new(io::ErrorKind::Other, e)))?
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(StoreError::Write)?;

    let mut file = NamedTempFile::new_in(parent).map_err(StoreError::Write)?;
    file.write_all(contents).map_err(StoreError::Write)?;
    file.as_file().sync_all().map_err(StoreError::Write)?;
    file.persist(path).map_err(|e| StoreError::Write(e.error))?;

    Ok(())
}
