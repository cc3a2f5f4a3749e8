pub mod build_tool;
pub mod git;
pub mod repo;
pub mod settings;
pub mod tools;
