// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod command;
pub mod config;
pub mod countdown;
pub mod face;
pub mod geometry;
pub mod history;
pub mod runtime;
pub mod util;
