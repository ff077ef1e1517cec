//! Piet interpreter: runs programs drawn as grids of colored codels.
//!
//! [`core`] holds the engine (regions, navigation, decoding, the stack machine) and is
//! free of terminal or file concerns. The rest of the crate parses the text program
//! format, records traces, loads configuration and drives the interactive debugger.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod models;
pub mod trace;

#[cfg(test)]
mod test;
