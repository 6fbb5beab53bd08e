use anyhow::{anyhow, Result};
use env_logger::Builder;
use log::LevelFilter;

use goto_target::{FormatConfig, ProjectView, TargetResolver};

pub fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
}

/// The anchor accepts the same syntax as targets, resolved from the start of the file
pub fn resolve_anchor(raw: &str, project: &dyn ProjectView, config: &FormatConfig) -> Result<usize> {
    TargetResolver::new(config)
        .resolve_detailed(raw, 0, project)
        .map(|resolution| resolution.offset)
        .map_err(|miss| anyhow!("cannot use {:?} as anchor: {}", raw, miss))
}
