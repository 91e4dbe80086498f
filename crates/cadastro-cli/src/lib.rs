//! Reusable pieces of the cadastro validator CLI.

pub mod logging;
