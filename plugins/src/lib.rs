pub mod factory;
pub mod tasks;
