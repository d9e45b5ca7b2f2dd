use crate::core::Storage;
use crate::utils::error::{CalcError, Result};
use std::path::{Path, PathBuf};

/// Files under one local directory. Batch files are read and reports written through it.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted at the file's directory, plus the file name to read from it.
    /// A bare file name is rooted at the working directory.
    pub fn for_file(path: &str) -> Result<(Self, String)> {
        let file = Path::new(path);
        let name = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| CalcError::InvalidConfigValueError {
                field: "--config".to_string(),
                value: path.to_string(),
                reason: "Path does not name a file".to_string(),
            })?;
        let root = file.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok((Self::new(root), name.to_string()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(self.root.join(path)).await?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let target = self.root.join(path);
        // 報表目錄可能尚未建立
        if let Some(dir) = target.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        Ok(tokio::fs::write(target, data).await?)
    }
}
