//! An HTTP service translating a small set of English phrases about orders
//! into SQL, and running them against the orders table.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod types;
