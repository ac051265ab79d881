//! JSON configuration files consumed by the tools.

pub mod regions;
