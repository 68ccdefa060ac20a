/// Output file handling: the reconciled library appears whole or not at all
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write `contents` to `path` through a sibling temporary file and a rename
///
/// On failure the temporary file is removed and `path` is left as it was.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let temp = temp_path(path)?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let result = async {
        fs::write(&temp, contents).await?;
        fs::rename(&temp, path).await
    }
    .await;

    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(&temp).await {
            if cleanup.kind() != io::ErrorKind::NotFound {
                tracing::warn!("Could not remove {}: {}", temp.display(), cleanup);
            }
        }
        return Err(err);
    }

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path {} has no file name", path.display()),
        )
    })?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(name);
    temp_name.push(".rekon-tmp");
    Ok(path.with_file_name(temp_name))
}
