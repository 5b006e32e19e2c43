//! URL handling module for Robolens
//!
//! This module validates user-supplied targets and derives the robots.txt
//! location to fetch.

mod normalize;

pub use normalize::{parse_target, robots_url};
