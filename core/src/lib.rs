pub mod aggregate;
pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod report;
pub mod session;
pub mod tasks;
