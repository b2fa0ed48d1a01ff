use crate::project::Project;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Save a project as pretty-printed JSON.
pub fn save_project(project: &Project, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create project file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, project)
        .with_context(|| format!("Failed to write project to: {}", path.display()))?;
    Ok(())
}

/// Load a project from a JSON file.
pub fn load_project(path: &Path) -> Result<Project> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open project file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse project from: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::sample_project;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.json");

        let project = sample_project();
        save_project(&project, &path).unwrap();

        let restored = load_project(&path).unwrap();
        assert_eq!(restored, project);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(load_project(&path).is_err());
    }

    #[test]
    fn test_load_malformed_json_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_project(&path).is_err());
    }
}
