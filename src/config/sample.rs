// src/config/sample.rs

//! Built-in graph analysed when no config file is given.

use crate::config::model::{ConfigFile, ConfigSection, EdgeConfig, GraphSection};

/// Eight nodes: a 3-cycle `1 -> 2 -> 3 -> 1` fed by `0`, and a separate
/// chain `4 -> 5 -> 6 -> 7`. Source is `4`.
pub fn worked_example() -> ConfigFile {
    let edges = [
        (0, 1, 3),
        (1, 2, 2),
        (2, 3, 4),
        (3, 1, 1),
        (4, 5, 2),
        (5, 6, 5),
        (6, 7, 1),
    ]
    .into_iter()
    .map(|(from, to, weight)| EdgeConfig { from, to, weight })
    .collect();

    ConfigFile::new_unchecked(
        ConfigSection::default(),
        GraphSection {
            nodes: 8,
            source: 4,
            edges,
        },
    )
}
