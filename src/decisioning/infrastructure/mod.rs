pub mod executors;
pub mod persistence;
