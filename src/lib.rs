pub mod api;
pub mod config;
pub mod domain;
pub mod optimizer;
pub mod planner;
pub mod telemetry;

pub use planner::{solve, solve_request, PlanError};
