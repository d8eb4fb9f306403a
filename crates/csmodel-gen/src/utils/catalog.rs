use std::path::{Path, PathBuf};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::catalog::Catalog;

pub const BUNDLED_CATALOG_NAME: &str = "bundled Docker API catalog";
const BUNDLED_CATALOG: &str = include_str!("../../catalog/docker.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
  Bundled,
  File(PathBuf),
}

impl CatalogSource {
  pub fn from_option(path: Option<PathBuf>) -> Self {
    path.map_or(Self::Bundled, Self::File)
  }

  pub fn describe(&self) -> String {
    match self {
      Self::Bundled => BUNDLED_CATALOG_NAME.to_string(),
      Self::File(path) => path.display().to_string(),
    }
  }

  pub async fn load(&self) -> anyhow::Result<Catalog> {
    match self {
      Self::Bundled => Ok(Catalog::from_slice(BUNDLED_CATALOG.as_bytes(), BUNDLED_CATALOG_NAME)?),
      Self::File(path) => CatalogLoader::open(path).await?.parse(),
    }
  }
}

pub struct CatalogLoader {
  file: AsyncMmapFile,
  origin: String,
}

impl CatalogLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path).await?;
    Ok(Self {
      file,
      origin: path.display().to_string(),
    })
  }

  pub fn parse(&self) -> anyhow::Result<Catalog> {
    Ok(Catalog::from_slice(self.file.as_slice(), &self.origin)?)
  }
}
