//! Envsafe CLI Library
//!
//! This module exposes the cli, data, cache, and profile modules for use in
//! integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod profile;
