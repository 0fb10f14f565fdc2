//! Metadata about the sales table and the closed vocabularies its columns hold.

pub mod metadata;
