mod generator;

pub use generator::commands_from_lines;
