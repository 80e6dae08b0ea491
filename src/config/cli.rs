use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes rendered output to a path on the local filesystem, relative to the
/// working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let target = Path::new(path);

        match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)?,
            _ => {}
        }

        tracing::debug!("Writing {} bytes to {}", data.len(), target.display());
        fs::write(target, data)?;
        Ok(())
    }
}
