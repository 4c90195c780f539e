//! mkvtool - easy operations on Matroska containers
//!
//! This library crate exposes the configuration and renaming layers for
//! integration testing.

pub mod config;
pub mod rename;
