//! Command-line front end for tally.
//!
//! The session loop lives in [`session`] behind reader/writer generics so
//! integration tests can drive scripted sessions over in-memory buffers;
//! `main` only wires it to stdin/stdout.

pub mod bind;
pub mod session;
