//! Core components, types, and utilities for the homework bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Fixed notification texts and the verdict table.
//! - The error taxonomy and result aliases.

pub mod config;
pub mod error;
pub mod messages;
pub mod types;
