use std::str::FromStr;
use serde::Deserialize;

/// How a path is rebuilt from a distance table.
///
/// - `Scan`: walk backwards from the target, scanning the topological order
///   for the first predecessor that satisfies the relaxation equality
///   (default; O(V·E)).
/// - `Parent`: follow the predecessor recorded during relaxation (linear in
///   the path length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStrategy {
    Scan,
    Parent,
}

impl Default for PathStrategy {
    fn default() -> Self {
        PathStrategy::Scan
    }
}

impl FromStr for PathStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scan" => Ok(PathStrategy::Scan),
            "parent" => Ok(PathStrategy::Parent),
            other => Err(format!(
                "invalid path_strategy: {other} (expected \"scan\" or \"parent\")"
            )),
        }
    }
}
