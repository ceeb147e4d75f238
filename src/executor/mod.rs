mod runner;

pub use runner::{CommandRunner, ExecutionError};
