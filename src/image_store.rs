use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rocket::fs::TempFile;
use rocket::http::RawStr;

use crate::settings::Settings;

/// Uploaded images, laid out as `{root}/{item_id}/{item_id}_{filename}`.
#[derive(Debug, Clone)]
pub(crate) struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Opens the store, creating the upload root if it is missing.
    pub(crate) fn open(settings: &Settings) -> io::Result<ImageStore> {
        let root = PathBuf::from(&settings.image_folder);
        fs::create_dir_all(&root)?;
        Ok(ImageStore { root })
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn image_path(&self, item_id: i32, filename: &str) -> PathBuf {
        self.root
            .join(item_id.to_string())
            .join(format!("{}_{}", item_id, filename))
    }

    /// Copies an upload to its place under the item's directory.
    pub(crate) async fn save(
        &self,
        item_id: i32,
        filename: &str,
        file: &mut TempFile<'_>,
    ) -> io::Result<PathBuf> {
        let path = self.image_path(item_id, filename);
        if let Some(dir) = path.parent() {
            rocket::tokio::fs::create_dir_all(dir).await?;
        }
        file.copy_to(&path).await?;

        Ok(path)
    }

    /// Removes the given files. Files that are already gone are skipped; any
    /// other failure stops at the offending path.
    pub(crate) async fn remove_all<P: AsRef<Path>>(&self, paths: &[P]) -> io::Result<usize> {
        let mut removed = 0;
        for path in paths {
            match rocket::tokio::fs::remove_file(path).await {
                Ok(()) => removed += 1,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    log::debug!("{} already gone", path.as_ref().display());
                }
                Err(err) => return Err(err),
            }
        }

        Ok(removed)
    }

    /// URL under which a stored path is served, if it lies inside the root.
    pub(crate) fn public_url(&self, path: &str) -> Option<String> {
        let relative = Path::new(path).strip_prefix(&self.root).ok()?;
        let parts = relative
            .components()
            .map(|part| {
                let part = part.as_os_str().to_str()?;
                Some(RawStr::new(part).percent_encode().as_str().to_string())
            })
            .collect::<Option<Vec<_>>>()?;

        Some(format!("/images/{}", parts.join("/")))
    }
}

/// The name the client gave an upload, reduced to its final path component.
///
/// `None` when no file was chosen.
pub(crate) fn upload_name(file: &TempFile<'_>) -> Option<String> {
    let raw = file.raw_name()?.dangerous_unsafe_unsanitized_raw().as_str();
    let name = Path::new(raw).file_name()?.to_str()?;
    if name.is_empty() {
        return None;
    }

    Some(name.to_string())
}
