//! Event planning tools.

pub mod planner;

pub use planner::{EventPlanParams, SmartEventPlannerTool};
