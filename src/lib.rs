//! Guides Cleaner: reference-driven cleanup for guide projects
//!
//! Deletes content pages, assessments, images and code files that nothing in
//! a guide project references any more, and merges two projects of the same
//! schema version by entity identity.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod merge;
pub mod project;
pub mod prune;
pub mod reachability;
pub mod tree;
