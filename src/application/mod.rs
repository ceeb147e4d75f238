mod application;
pub mod data;
mod input;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use input::{InputError, read_input};
pub use runtime_config::RuntimeConfig;
