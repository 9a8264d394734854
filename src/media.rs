//! Image storage for product photos, marketing visuals and menu scans.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extensions accepted for uploaded images.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "avif"];

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("`{0}` is not a supported image")]
    UnsupportedType(String),
    #[error("invalid target name `{0}`")]
    InvalidName(String),
    #[error("failed to write upload: {0}")]
    Io(#[from] io::Error),
}

/// Metadata of an uploaded file waiting in a temporary location.
#[derive(Debug, Clone, Copy)]
pub struct Upload<'a> {
    pub source: &'a Path,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
}

/// Persists uploaded images and returns the public URL of the stored copy.
pub trait MediaStore: Send + Sync {
    /// Store under a freshly generated unique name.
    fn store(&self, upload: Upload<'_>) -> Result<String, MediaError>;

    /// Store under `stem` plus the upload's extension, replacing any earlier
    /// file with the same stem.
    fn store_as(&self, stem: &str, upload: Upload<'_>) -> Result<String, MediaError>;
}

/// Media store backed by a local directory served as static files.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
    public_url: String,
}

impl LocalMediaStore {
    /// Create the store, making sure `root` exists.
    pub fn new(root: impl Into<PathBuf>, public_url: impl Into<String>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            public_url: public_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write(&self, file_name: &str, source: &Path) -> Result<String, MediaError> {
        let target = self.root.join(file_name);
        fs::copy(source, &target)?;
        log::info!("Stored upload as {}", target.display());
        Ok(format!("{}/{}", self.public_url, file_name))
    }

    fn remove_other_extensions(&self, stem: &str, keep: &str) -> io::Result<()> {
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let same_stem = path.file_stem().and_then(|value| value.to_str()) == Some(stem);
            let name = path.file_name().and_then(|value| value.to_str());
            if same_stem && name != Some(keep) {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

impl MediaStore for LocalMediaStore {
    fn store(&self, upload: Upload<'_>) -> Result<String, MediaError> {
        let extension = image_extension(upload.file_name, upload.content_type)?;
        let file_name = format!("{}.{extension}", uuid::Uuid::new_v4());
        self.write(&file_name, upload.source)
    }

    fn store_as(&self, stem: &str, upload: Upload<'_>) -> Result<String, MediaError> {
        let valid_stem = !stem.is_empty()
            && stem
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid_stem {
            return Err(MediaError::InvalidName(stem.to_string()));
        }

        let extension = image_extension(upload.file_name, upload.content_type)?;
        let file_name = format!("{stem}.{extension}");
        let url = self.write(&file_name, upload.source)?;
        self.remove_other_extensions(stem, &file_name)?;
        Ok(url)
    }
}

/// Resolve the stored extension from the client file name, falling back to
/// the declared content type.
fn image_extension(
    file_name: Option<&str>,
    content_type: Option<&str>,
) -> Result<&'static str, MediaError> {
    if let Some(content_type) = content_type.filter(|value| !value.starts_with("image/")) {
        return Err(MediaError::UnsupportedType(content_type.to_string()));
    }

    let from_name = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    if let Some(ext) = from_name {
        return IMAGE_EXTENSIONS
            .into_iter()
            .find(|allowed| *allowed == ext)
            .ok_or(MediaError::UnsupportedType(ext));
    }

    match content_type {
        Some("image/jpeg") => Ok("jpg"),
        Some("image/png") => Ok("png"),
        Some("image/gif") => Ok("gif"),
        Some("image/webp") => Ok("webp"),
        Some("image/avif") => Ok("avif"),
        other => Err(MediaError::UnsupportedType(
            other.unwrap_or("unknown").to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    fn source_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"\x89PNG fake").expect("write");
        file
    }

    #[test]
    fn store_uses_unique_names_and_public_url() {
        let dir = TempDir::new().expect("temp dir");
        let store = LocalMediaStore::new(dir.path(), "/uploads/").expect("store");
        let source = source_file();

        let upload = Upload {
            source: source.path(),
            file_name: Some("Tarte.PNG"),
            content_type: Some("image/png"),
        };
        let first = store.store(upload).expect("stored");
        let second = store.store(upload).expect("stored");

        assert!(first.starts_with("/uploads/"));
        assert!(first.ends_with(".png"));
        assert_ne!(first, second);
        assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 2);
    }

    #[test]
    fn store_rejects_non_images() {
        let dir = TempDir::new().expect("temp dir");
        let store = LocalMediaStore::new(dir.path(), "/uploads").expect("store");
        let source = source_file();

        let result = store.store(Upload {
            source: source.path(),
            file_name: Some("notes.pdf"),
            content_type: Some("application/pdf"),
        });

        assert!(matches!(result, Err(MediaError::UnsupportedType(_))));
    }

    #[test]
    fn extension_falls_back_to_content_type() {
        assert_eq!(image_extension(None, Some("image/jpeg")).ok(), Some("jpg"));
        assert!(image_extension(Some("photo.svg"), Some("image/svg+xml")).is_err());
    }

    #[test]
    fn store_as_replaces_previous_menu_scan() {
        let dir = TempDir::new().expect("temp dir");
        let store = LocalMediaStore::new(dir.path(), "/uploads").expect("store");
        let source = source_file();

        store
            .store_as(
                "carte-1",
                Upload {
                    source: source.path(),
                    file_name: Some("menu.png"),
                    content_type: None,
                },
            )
            .expect("stored");
        let url = store
            .store_as(
                "carte-1",
                Upload {
                    source: source.path(),
                    file_name: Some("menu.jpg"),
                    content_type: None,
                },
            )
            .expect("stored");

        assert_eq!(url, "/uploads/carte-1.jpg");
        assert!(dir.path().join("carte-1.jpg").exists());
        assert!(!dir.path().join("carte-1.png").exists());
    }

    #[test]
    fn store_as_rejects_path_traversal() {
        let dir = TempDir::new().expect("temp dir");
        let store = LocalMediaStore::new(dir.path(), "/uploads").expect("store");
        let source = source_file();

        let result = store.store_as(
            "../carte",
            Upload {
                source: source.path(),
                file_name: Some("menu.png"),
                content_type: None,
            },
        );

        assert!(matches!(result, Err(MediaError::InvalidName(_))));
    }
}
