use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use shapematch_algebra::Vec2;

use crate::matcher::MatchResult;

/// Error types for reading and writing point-set files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PointSetIoError {
    /// Failed to open, read or write the file
    #[error("Failed to access point-set file")]
    Io(#[from] std::io::Error),

    /// The file content is not valid point-set JSON
    #[error("Malformed point-set JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid point-set file extension
    #[error("Invalid point-set file extension. Got:{0}")]
    InvalidFileExtension(String),
}

/// A template and a target stored together, as exchanged with the visualization layer.
///
/// Serialized as `{"template": [[x, y], ...], "target": [[x, y], ...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointSets {
    /// Reference arrangement.
    pub template: Vec<Vec2>,
    /// Observed arrangement in unknown order.
    pub target: Vec<Vec2>,
}

fn check_extension(path: &Path) -> Result<(), PointSetIoError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(()),
        other => Err(PointSetIoError::InvalidFileExtension(
            other.unwrap_or_default().to_string(),
        )),
    }
}

/// Read a template/target pair from a `.json` file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file.
pub fn read_point_sets(path: impl AsRef<Path>) -> Result<PointSets, PointSetIoError> {
    let path = path.as_ref();
    check_extension(path)?;

    let reader = BufReader::new(File::open(path)?);
    let sets = serde_json::from_reader(reader)?;
    log::debug!("Read point sets from {}", path.display());

    Ok(sets)
}

/// Write a template/target pair to a `.json` file.
pub fn write_point_sets(path: impl AsRef<Path>, sets: &PointSets) -> Result<(), PointSetIoError> {
    write_json(path.as_ref(), sets)
}

/// Write a match result to a `.json` file.
pub fn write_match_result(
    path: impl AsRef<Path>,
    result: &MatchResult,
) -> Result<(), PointSetIoError> {
    write_json(path.as_ref(), result)
}

fn write_json<S: Serialize>(path: &Path, value: &S) -> Result<(), PointSetIoError> {
    check_extension(path)?;

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_points;

    #[test]
    fn test_point_sets_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("sets.json");

        let sets = PointSets {
            template: vec![Vec2::new(0.0, 0.0), Vec2::new(1.5, -2.0)],
            target: vec![Vec2::new(3.0, 4.0), Vec2::new(-1.0, 0.25)],
        };
        write_point_sets(&path, &sets)?;
        let back = read_point_sets(&path)?;
        assert_eq!(back, sets);
        Ok(())
    }

    #[test]
    fn test_read_array_layout() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("sets.json");
        std::fs::write(
            &path,
            r#"{"template": [[0, 0], [5, 0]], "target": [[1, 1], [1, 6]]}"#,
        )?;

        let sets = read_point_sets(&path)?;
        assert_eq!(sets.template[1], Vec2::new(5.0, 0.0));
        assert_eq!(sets.target[1], Vec2::new(1.0, 6.0));
        Ok(())
    }

    #[test]
    fn test_write_match_result() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("result.json");

        let template = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 3.0)];
        let result = match_points(&template, &template)?;
        write_match_result(&path, &result)?;

        let text = std::fs::read_to_string(&path)?;
        let back: MatchResult = serde_json::from_str(&text)?;
        assert_eq!(back, result);
        Ok(())
    }

    #[test]
    fn test_invalid_extension() {
        let res = read_point_sets("points.txt");
        assert!(matches!(
            res,
            Err(PointSetIoError::InvalidFileExtension(ext)) if ext == "txt"
        ));
    }

    #[test]
    fn test_malformed_json() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("broken.json");
        std::fs::write(&path, r#"{"template": [[0, 0, 1]], "target": []}"#)?;

        assert!(matches!(
            read_point_sets(&path),
            Err(PointSetIoError::Json(_))
        ));
        Ok(())
    }
}
