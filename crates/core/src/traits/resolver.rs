use crate::error::Miss;
use crate::models::Resolution;
use crate::traits::ProjectView;

/// One way of reading goto input. `TargetResolver` tries its strategies in order.
pub trait TargetStrategy {
    fn name(&self) -> &'static str;
    /// Check if this strategy should look at the (trimmed, non-empty) input at all
    fn can_handle(&self, input: &str) -> bool;
    fn resolve(&self, input: &str, anchor_offset: usize, project: &dyn ProjectView) -> Result<Resolution, Miss>;
    /// A strategy that commits owns the input: its miss ends the search
    fn commits(&self, _input: &str) -> bool {
        false
    }
}
