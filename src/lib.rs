//! Crytic converter library surface.
//!
//! Turns Medusa and Echidna failure reports into Foundry regression tests for a
//! `CryticToFoundry` harness. The binaries in `src/main.rs` and `src/bin/` are thin
//! wrappers over [`pipeline`].

pub mod emitter;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod runtime;
pub mod scanner;
pub mod utils;
