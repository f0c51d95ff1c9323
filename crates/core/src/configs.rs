//! Configuration parsing
//!
//! Declarative task definitions loaded from an optional `makeshift.yml`.

pub mod tasks;
