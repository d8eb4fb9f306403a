use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
};

use crate::generator::{
  ast::GENERATED_SUFFIX,
  errors::{GeneratorError, GeneratorResult},
  orchestrator::GeneratedFile,
};

/// Writes generated files into an existing directory.
///
/// Each file goes to a temporary sibling first and is then moved into place,
/// so a failed run never leaves a half-written model behind.
#[derive(Debug)]
pub struct OutputWriter {
  dir: PathBuf,
}

impl OutputWriter {
  pub async fn open(dir: impl Into<PathBuf>) -> GeneratorResult<Self> {
    let dir = dir.into();
    match tokio::fs::metadata(&dir).await {
      Ok(meta) if meta.is_dir() => Ok(Self { dir }),
      Ok(_) => Err(GeneratorError::MissingOutputDir { path: dir }),
      Err(err) if err.kind() == ErrorKind::NotFound => Err(GeneratorError::MissingOutputDir { path: dir }),
      Err(err) => Err(GeneratorError::io(format!("reading {}", dir.display()), err)),
    }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  /// Deletes every `*.Generated.cs` file directly inside the directory and
  /// returns how many were removed.
  pub async fn remove_stale(&self) -> GeneratorResult<usize> {
    let listing = |err| GeneratorError::io(format!("listing {}", self.dir.display()), err);
    let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(listing)?;

    let mut removed = 0;
    while let Some(entry) = entries.next_entry().await.map_err(listing)? {
      let is_generated = entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.ends_with(GENERATED_SUFFIX));
      if !is_generated || !entry.file_type().await.map_err(listing)?.is_file() {
        continue;
      }

      let path = entry.path();
      tokio::fs::remove_file(&path)
        .await
        .map_err(|err| GeneratorError::io(format!("removing {}", path.display()), err))?;
      removed += 1;
    }
    Ok(removed)
  }

  pub async fn write_all(&self, files: &[GeneratedFile]) -> GeneratorResult<()> {
    for file in files {
      self.write(file).await?;
    }
    Ok(())
  }

  async fn write(&self, file: &GeneratedFile) -> GeneratorResult<()> {
    let target = self.dir.join(&file.file_name);
    let exists = tokio::fs::try_exists(&target)
      .await
      .map_err(|err| GeneratorError::io(format!("checking {}", target.display()), err))?;
    if exists {
      return Err(GeneratorError::OutputExists { path: target });
    }

    let temp = tempfile::Builder::new()
      .prefix(&format!(".{}.", file.file_name))
      .suffix(".tmp")
      .tempfile_in(&self.dir)
      .map_err(|err| GeneratorError::io(format!("creating a temporary file in {}", self.dir.display()), err))?
      .into_temp_path();

    tokio::fs::write(&temp, &file.contents)
      .await
      .map_err(|err| GeneratorError::io(format!("writing {}", temp.display()), err))?;

    temp.persist_noclobber(&target).map_err(|err| {
      if err.error.kind() == ErrorKind::AlreadyExists {
        GeneratorError::OutputExists { path: target.clone() }
      } else {
        GeneratorError::io(format!("moving output into {}", target.display()), err.error)
      }
    })
  }
}
