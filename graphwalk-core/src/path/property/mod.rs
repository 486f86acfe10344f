//! Property-based tests for the path searches.
//!
//! Checks both searches against an all-pairs hop-distance oracle on small
//! graphs of varied shape, in both orientations.

mod oracle;
mod strategies;
