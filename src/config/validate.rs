// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{CityschedError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::CityschedError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.graph))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_nodes(cfg)?;
    validate_source_and_target(cfg)?;
    validate_edges(cfg)?;
    Ok(())
}

fn ensure_has_nodes(cfg: &RawConfigFile) -> Result<()> {
    if cfg.graph.nodes == 0 {
        return Err(CityschedError::ConfigError(
            "[graph].nodes must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_source_and_target(cfg: &RawConfigFile) -> Result<()> {
    let nodes = cfg.graph.nodes;

    if cfg.graph.source >= nodes {
        return Err(CityschedError::ConfigError(format!(
            "[graph].source = {} is out of range (nodes = {})",
            cfg.graph.source, nodes
        )));
    }

    if let Some(target) = cfg.config.target {
        if target >= nodes {
            return Err(CityschedError::ConfigError(format!(
                "[config].target = {} is out of range (nodes = {})",
                target, nodes
            )));
        }
    }

    Ok(())
}

fn validate_edges(cfg: &RawConfigFile) -> Result<()> {
    let nodes = cfg.graph.nodes;
    for (i, edge) in cfg.graph.edges.iter().enumerate() {
        for (field, id) in [("from", edge.from), ("to", edge.to)] {
            if id >= nodes {
                return Err(CityschedError::ConfigError(format!(
                    "graph.edges[{}].{} = {} is out of range (nodes = {})",
                    i, field, id, nodes
                )));
            }
        }
    }
    Ok(())
}
