//! Planner-owned context: configuration, interpolator and cycle state.
//!
//! There is no process-wide instance. Whoever runs the planner creates one
//! context and hands out references to the components that need it.

use log::debug;

use crate::config::PlanningConfig;
use crate::diagnostics::{dump_planning_context, FeedSet};
use crate::discretized::DiscretizedTrajectory;
use crate::interpolate::Interpolator;

/// State carried from one planning cycle to the next.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanningState {
    cycle: u64,
    last_trajectory: Option<DiscretizedTrajectory>,
}

impl PlanningState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cycles started since creation or the last reset.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Advance to the next cycle and return its number.
    pub fn begin_cycle(&mut self) -> u64 {
        self.cycle = self.cycle.wrapping_add(1);
        self.cycle
    }

    pub fn last_trajectory(&self) -> Option<&DiscretizedTrajectory> {
        self.last_trajectory.as_ref()
    }

    /// Store the trajectory published this cycle, returning the previous one.
    pub fn publish_trajectory(
        &mut self,
        trajectory: DiscretizedTrajectory,
    ) -> Option<DiscretizedTrajectory> {
        self.last_trajectory.replace(trajectory)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug)]
pub struct PlanningContext {
    config: PlanningConfig,
    interpolator: Interpolator,
    state: PlanningState,
}

impl PlanningContext {
    pub fn new(config: PlanningConfig) -> Self {
        let interpolator = Interpolator::new(config.interpolation);
        Self {
            config,
            interpolator,
            state: PlanningState::new(),
        }
    }

    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    pub fn state(&self) -> &PlanningState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PlanningState {
        &mut self.state
    }

    /// Snapshot the external feeds per this context's diagnostics settings.
    pub fn dump(&self, feeds: &FeedSet<'_>) -> usize {
        debug!("dumping planning context at cycle {}", self.state.cycle());
        dump_planning_context(feeds, &self.config.diagnostics)
    }
}

impl Default for PlanningContext {
    fn default() -> Self {
        Self::new(PlanningConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PathPoint, TrajectoryPoint};

    fn one_point_trajectory(t: f64) -> DiscretizedTrajectory {
        DiscretizedTrajectory::new(vec![TrajectoryPoint::new(PathPoint::default(), 0.0, 0.0, t)])
            .expect("valid")
    }

    #[test]
    fn cycles_advance_and_reset() {
        let mut state = PlanningState::new();
        assert_eq!(state.cycle(), 0);
        assert_eq!(state.begin_cycle(), 1);
        assert_eq!(state.begin_cycle(), 2);
        state.reset();
        assert_eq!(state.cycle(), 0);
    }

    #[test]
    fn publishing_replaces_last_trajectory() {
        let mut ctx = PlanningContext::default();
        assert!(ctx.state().last_trajectory().is_none());
        assert!(ctx.state_mut().publish_trajectory(one_point_trajectory(0.0)).is_none());
        let previous = ctx
            .state_mut()
            .publish_trajectory(one_point_trajectory(1.0))
            .expect("previous trajectory");
        assert_eq!(previous, one_point_trajectory(0.0));
        assert_eq!(
            ctx.state().last_trajectory(),
            Some(&one_point_trajectory(1.0))
        );
    }

    #[test]
    fn interpolator_follows_config() {
        let mut config = PlanningConfig::default();
        config.interpolation.arc_span_tolerance = 0.5;
        let ctx = PlanningContext::new(config);
        assert_eq!(ctx.interpolator().config().arc_span_tolerance, 0.5);
    }
}
