//! Loading graphs and heuristics from JSON files.
//!
//! A graph file is a JSON object mapping each state to its ordered neighbor
//! list; a heuristic file maps states to non-negative estimates. Both use
//! string states, which is what the CLI works with.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::graph::{Graph, Heuristic};

/// Load an adjacency graph from a JSON file.
pub fn load_graph(path: &Path) -> Result<Graph<String>> {
    let file = File::open(path)?;
    let graph = serde_json::from_reader(BufReader::new(file))?;
    Ok(graph)
}

/// Load a heuristic table from a JSON file.
pub fn load_heuristic(path: &Path) -> Result<Heuristic<String>> {
    let file = File::open(path)?;
    let heuristic = serde_json::from_reader(BufReader::new(file))?;
    Ok(heuristic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    fn write_temp(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("input.json");
        fs::write(&path, contents).expect("write fixture");
        path
    }

    #[test]
    fn graph_loads_from_json_file() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_temp(&dir, r#"{"A": ["B"], "B": []}"#);
        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.neighbors(&"A".to_string()).unwrap(), ["B"]);
    }

    #[test]
    fn heuristic_loads_from_json_file() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_temp(&dir, r#"{"A": 3.0, "H": 0.0}"#);
        let heuristic = load_heuristic(&path).unwrap();
        assert_eq!(heuristic.estimate(&"A".to_string()), 3.0);
        assert_eq!(heuristic.estimate(&"Z".to_string()), 0.0);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let error = load_graph(Path::new("/nonexistent/graph.json")).unwrap_err();
        assert!(matches!(error, crate::Error::Io(_)));
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_temp(&dir, r#"{"A": "not a list"}"#);
        let error = load_graph(&path).unwrap_err();
        assert!(matches!(error, crate::Error::Json(_)));
    }
}
