//! student-service - CRUD HTTP API for student records
//!
//! A request router dispatches to handlers that decode input, call a
//! `StudentStore`, and serialize the result as JSON. SQLite and Postgres
//! stores satisfy the same contract and are chosen at startup.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
