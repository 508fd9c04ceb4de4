//! Ring file formats.
//!
//! - JSON: `{"points": [[x, y], ...]}`
//! - CSV: header with `x` and `y` columns (extra columns are ignored)

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polyring::api::{GeomCfg, Ring2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk ring document.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RingDoc {
    pub points: Vec<[f64; 2]>,
}

impl RingDoc {
    pub fn from_ring(ring: &Ring2) -> Self {
        Self {
            points: ring.to_xy(),
        }
    }

    pub fn into_ring(self, cfg: GeomCfg) -> Ring2 {
        let mut ring = Ring2::from_xy(&self.points);
        ring.set_cfg(cfg);
        ring
    }
}

/// Load a ring, choosing the format by extension (`.csv`, anything else is JSON).
pub fn load_ring<P: AsRef<Path>>(path: P, cfg: GeomCfg) -> Result<Ring2> {
    let path = path.as_ref();
    let doc = if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv")) {
        read_csv(path)?
    } else {
        read_json(path)?
    };
    tracing::debug!(path = %path.display(), points = doc.points.len(), "loaded ring");
    Ok(doc.into_ring(cfg))
}

/// Write a ring as pretty JSON, creating parent directories.
pub fn save_ring<P: AsRef<Path>>(path: P, ring: &Ring2) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let body = serde_json::to_vec_pretty(&RingDoc::from_ring(ring))?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn read_json(path: &Path) -> Result<RingDoc> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing ring JSON {}", path.display()))
}

fn read_csv(path: &Path) -> Result<RingDoc> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns of {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push([x, y]),
            _ => bail!("{}: missing coordinate in row {}", path.display(), row + 1),
        }
    }
    Ok(RingDoc { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/square.json");
        let ring = Ring2::from_xy(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
        save_ring(&path, &ring).unwrap();
        let back = load_ring(&path, GeomCfg::default()).unwrap();
        assert_eq!(back, ring);
    }

    #[test]
    fn csv_with_integer_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tri.csv");
        fs::write(&path, "id,x,y\n0,0,0\n1,4,0\n2,0,3.5\n").unwrap();
        let ring = load_ring(&path, GeomCfg::uniform(1e-6)).unwrap();
        assert_eq!(ring.to_xy(), vec![[0.0, 0.0], [4.0, 0.0], [0.0, 3.5]]);
        assert_eq!(ring.cfg(), GeomCfg::uniform(1e-6));
        assert!((ring.area() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn malformed_json_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"points\": [[0, 0], [1]]}").unwrap();
        let err = load_ring(&path, GeomCfg::default()).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }
}
