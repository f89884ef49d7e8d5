//! Static site generator for a markdown development log.
//! Turns a directory of dated session notes into one HTML page per note plus
//! an index page with activity statistics: streaks, weekly and monthly totals,
//! and a calendar heatmap.
//!

pub mod analysis;
pub mod cli;
pub mod notes;
pub mod projects;
pub mod site;
pub mod utils;
