//! Profit-maximizing fleet assignment: which aircraft flies which candidate leg, so that
//! every aircraft that flies ends the day where it started.

pub mod aircraft;
pub mod airport;
pub mod config;
pub mod error;
pub mod input;
pub mod leg;
pub mod planner;
pub mod registry;
pub mod search;
pub mod time;
