#![allow(dead_code)]

use citysched::config::{ConfigFile, ConfigSection, EdgeConfig, GraphSection, RawConfigFile};
use citysched::types::PathStrategy;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new(nodes: usize, source: usize) -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                graph: GraphSection {
                    nodes,
                    source,
                    edges: Vec::new(),
                },
            },
        }
    }

    pub fn edge(mut self, from: usize, to: usize, weight: i64) -> Self {
        self.config.graph.edges.push(EdgeConfig { from, to, weight });
        self
    }

    pub fn path_strategy(mut self, strategy: PathStrategy) -> Self {
        self.config.config.path_strategy = strategy;
        self
    }

    pub fn target(mut self, target: usize) -> Self {
        self.config.config.target = Some(target);
        self
    }

    /// The unchecked form, for exercising validation.
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}
