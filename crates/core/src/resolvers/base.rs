use log::{debug, trace};

use crate::error::Miss;
use crate::models::{FormatConfig, Resolution};
use crate::resolvers::{AddressResolver, LabelResolver, OffsetResolver};
use crate::traits::{ProjectView, TargetStrategy};

/// Turns goto input into a file offset.
///
/// Strategies run in a fixed order (offset literal, label, address) and the
/// first hit wins. Nothing is cached between calls.
pub struct TargetResolver {
    strategies: Vec<Box<dyn TargetStrategy>>,
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::new(&FormatConfig::default())
    }
}

impl TargetResolver {
    pub fn new(config: &FormatConfig) -> Self {
        let strategies: Vec<Box<dyn TargetStrategy>> = vec![
            Box::new(OffsetResolver::new()),
            Box::new(LabelResolver::new(config.non_unique_label_prefix)),
            Box::new(AddressResolver::new()),
        ];
        Self { strategies }
    }

    pub fn with_strategies(strategies: Vec<Box<dyn TargetStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Like `resolve`, but says which interpretation matched, or why none did
    pub fn resolve_detailed(&self, raw: &str, anchor_offset: usize, project: &dyn ProjectView) -> Result<Resolution, Miss> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(Miss::Empty);
        }

        let mut last_miss = Miss::Empty;
        for strategy in &self.strategies {
            if !strategy.can_handle(input) {
                continue;
            }
            match strategy.resolve(input, anchor_offset, project) {
                Ok(resolution) => {
                    debug!(
                        "{:?} -> +{:06X} via {}",
                        input,
                        resolution.offset,
                        strategy.name()
                    );
                    return Ok(resolution);
                }
                Err(miss) => {
                    trace!("{} missed {:?}: {}", strategy.name(), input, miss);
                    if strategy.commits(input) {
                        return Err(miss);
                    }
                    last_miss = miss;
                }
            }
        }
        Err(last_miss)
    }

    /// File offset for `raw`, or `None` when no interpretation works
    pub fn resolve(&self, raw: &str, anchor_offset: usize, project: &dyn ProjectView) -> Option<usize> {
        self.resolve_detailed(raw, anchor_offset, project)
            .ok()
            .map(|resolution| resolution.offset)
    }

    /// Whether the input is good enough to enable "go"
    pub fn is_acceptable(&self, raw: &str, anchor_offset: usize, project: &dyn ProjectView) -> bool {
        self.resolve(raw, anchor_offset, project).is_some()
    }
}
