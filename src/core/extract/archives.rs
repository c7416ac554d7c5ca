use std::path::{Path, PathBuf};

use tracing::debug;

use crate::utils::{Error, SceneResult};

/// Pick the archive volumes to extract from a release's file list (paths relative to `save_path`).
///
/// A single `.rar` is taken as is. With several, only the `.part01.rar` first volumes are kept,
/// since extracting those pulls in the remaining parts.
pub fn select_archive_volumes<S: AsRef<str>>(
    save_path: &Path,
    files: &[S],
) -> SceneResult<Vec<PathBuf>> {
    let rars: Vec<&str> = files
        .iter()
        .map(AsRef::as_ref)
        .filter(|f| f.ends_with(".rar"))
        .collect();

    match rars.as_slice() {
        [] => Ok(Vec::new()),
        [single] => Ok(vec![save_path.join(single)]),
        many => {
            let first_volumes: Vec<PathBuf> = many
                .iter()
                .filter(|f| f.ends_with(".part01.rar"))
                .map(|f| save_path.join(f))
                .collect();

            if first_volumes.is_empty() {
                return Err(Error::MultipleArchives {
                    save_path: save_path.to_path_buf(),
                    count: many.len(),
                });
            }

            debug!("Selected {} of {} .rar volumes", first_volumes.len(), many.len());
            Ok(first_volumes)
        }
    }
}
