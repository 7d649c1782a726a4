//! gnbuild-lib: Core logic for building the V8 monolith with GN and Ninja
//!
//! This crate provides everything between the command line and the two
//! external tools:
//! - `flags`: translation of GYP-style flag tokens into GN args and target OS lookup
//! - `platform`: host OS table and location of the GN/Ninja binaries
//! - `gn`: assembly of the final `--args=` value
//! - `execute`: the generate-then-build sequence behind an injectable runner

pub mod consts;
pub mod execute;
pub mod flags;
pub mod gn;
pub mod options;
pub mod platform;

#[cfg(test)]
pub(crate) mod util;
