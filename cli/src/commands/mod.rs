pub mod build;
pub mod call;
pub mod check;
pub mod clean;
pub mod completions;
pub mod deploy;
pub mod schema;
