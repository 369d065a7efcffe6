//! Workspace root package.
//!
//! Holds workspace-level tooling such as the pre-commit hook configuration;
//! the planner lives in `crates/searoute-lib` and the CLI in `crates/searoute-cli`.
