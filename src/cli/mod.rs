//! CLI module

pub mod commands;
