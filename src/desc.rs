use crate::error::{GridError, PoolError, PoolResult};
use crate::generate::random_height_im;
use crate::im::HeightIm;
use serde::Deserialize;
use std::path::PathBuf;

pub const DESC_VERSION: u32 = 1;

/// Where the terrain for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceDesc {
    /// Heights given inline, one array per row.
    Literal { heights: Vec<Vec<i64>> },
    Random {
        rows: usize,
        cols: usize,
        max_height: u32,
        #[serde(default)]
        seed: Option<u64>,
    },
    /// A grayscale PNG, one gray level per height unit.
    Png { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PoolDesc {
    pub version: u32,
    pub source: SourceDesc,
    #[serde(default)]
    pub print_layers: bool,
    /// Directory for per-level mask/water PNGs. Nothing is written when absent.
    #[serde(default)]
    pub dump_dir: Option<PathBuf>,
}

pub fn parse_pool_json(json_text: &str) -> PoolResult<PoolDesc> {
    let desc: PoolDesc = serde_json::from_str(json_text)?;
    if desc.version != DESC_VERSION {
        return Err(PoolError::Desc(format!(
            "version {} not supported, expected {DESC_VERSION}",
            desc.version
        )));
    }
    Ok(desc)
}

impl SourceDesc {
    /// Produce the terrain this source describes.
    pub fn load_height_im(&self) -> PoolResult<HeightIm> {
        match self {
            SourceDesc::Literal { heights } => Ok(HeightIm::from_rows(heights)?),
            SourceDesc::Random {
                rows,
                cols,
                max_height,
                seed,
            } => {
                if *rows == 0 || *cols == 0 {
                    return Err(GridError::InvalidShape { w: *cols, h: *rows }.into());
                }
                Ok(random_height_im(*cols, *rows, *max_height, *seed))
            }
            #[cfg(feature = "im-io")]
            SourceDesc::Png { path } => Ok(HeightIm::load_png(path)?),
            #[cfg(not(feature = "im-io"))]
            SourceDesc::Png { path } => Err(PoolError::Desc(format!(
                "cannot load {}: built without im-io",
                path.display()
            ))),
        }
    }
}
