//! Tick and frame statistics

mod tick_stats;
mod fps_counter;

pub use tick_stats::{TickPhase, TickStats};
pub(crate) use tick_stats::PhaseTimer;
pub use fps_counter::FpsCounter;
