//! pathkit-planning-core
//!
//! Reconstructs intermediate samples of a planned path or trajectory from two
//! boundary samples while keeping heading, curvature and curvature rate
//! continuous. Sequences of samples are evaluated through the same pairwise
//! interpolators; a planner-owned context carries configuration and cycle
//! state, and a diagnostics hook snapshots the external feeds of a cycle.

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod discretized;
pub mod interpolate;
pub mod types;

pub use config::{ArcSpanCheck, ConfigError, DiagnosticsConfig, InterpolationConfig, PlanningConfig};
pub use context::{PlanningContext, PlanningState};
pub use diagnostics::{
    dump_planning_context, DiagnosticsError, FeedSet, JsonSnapshotFeed, MessageFeed,
};
pub use discretized::{DiscretizedPath, DiscretizedTrajectory, PathError};
pub use interpolate::{
    interpolate_path_point, interpolate_sl_point, interpolate_trajectory_point,
    try_interpolate_path_point, try_interpolate_trajectory_point, InterpolationError,
    Interpolator,
};
pub use types::{PathPoint, SLPoint, TrajectoryPoint};
