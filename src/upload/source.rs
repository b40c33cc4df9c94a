//! Local source access and payload encoding.

use crate::upload::error::{UploadError, UploadResult};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::io;
use std::path::{Path, PathBuf};

/// What sits at a local path, without following a final symbolic link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Missing,
    File,
    Symlink,
}

/// Filesystem operations the uploader needs.
#[async_trait]
pub trait LocalSource: Send + Sync {
    /// Classify `path`. A dangling link is still a [`SourceKind::Symlink`].
    async fn probe(&self, path: &Path) -> io::Result<SourceKind>;

    /// Read the bytes of a regular file.
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read the target a symbolic link points to.
    async fn read_link(&self, path: &Path) -> io::Result<PathBuf>;
}

/// [`LocalSource`] backed by the real filesystem through `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

#[async_trait]
impl LocalSource for FsSource {
    async fn probe(&self, path: &Path) -> io::Result<SourceKind> {
        match tokio::fs::symlink_metadata(path).await {
            Ok(meta) if meta.file_type().is_symlink() => Ok(SourceKind::Symlink),
            Ok(_) => Ok(SourceKind::File),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(SourceKind::Missing),
            Err(e) => Err(e),
        }
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        tokio::fs::read_link(path).await
    }
}

/// Check that `path` exists on disk or is a symbolic link.
pub async fn locate<S>(source: &S, path: &Path) -> UploadResult<SourceKind>
where
    S: LocalSource + ?Sized,
{
    match source.probe(path).await {
        Ok(SourceKind::Missing) => Err(UploadError::PathNotFound(path.to_path_buf())),
        Ok(kind) => Ok(kind),
        Err(e) => Err(UploadError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Content to upload for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    kind: SourceKind,
    bytes: Vec<u8>,
}

impl FilePayload {
    /// Read the payload for a path already classified by [`locate`].
    ///
    /// A symbolic link uploads its target path as text, not the bytes of
    /// the file it points to.
    pub async fn read<S>(source: &S, path: &Path, kind: SourceKind) -> UploadResult<Self>
    where
        S: LocalSource + ?Sized,
    {
        let read_err = |e| UploadError::Read {
            path: path.to_path_buf(),
            source: e,
        };

        let bytes = match kind {
            SourceKind::Missing => return Err(UploadError::PathNotFound(path.to_path_buf())),
            SourceKind::File => source.read(path).await.map_err(read_err)?,
            SourceKind::Symlink => {
                let target = source.read_link(path).await.map_err(read_err)?;
                target.to_string_lossy().into_owned().into_bytes()
            }
        };

        Ok(Self { kind, bytes })
    }

    /// Classify and read `path` in one step.
    pub async fn load<S>(source: &S, path: &Path) -> UploadResult<Self>
    where
        S: LocalSource + ?Sized,
    {
        let kind = locate(source, path).await?;
        Self::read(source, path, kind).await
    }

    #[must_use]
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Standard (padded) base64 of the payload, as the contents API expects.
    #[must_use]
    pub fn encode(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}
