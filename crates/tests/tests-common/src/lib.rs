//! Helpers shared by the HTTP test suites.

pub mod router;
