//! Early access handlers.

mod get_stats;
mod sign_up;

pub use get_stats::{GetStatsHandler, GetStatsQuery};
pub use sign_up::{SignUpCommand, SignUpHandler};
