//! GYP-style flag handling.
//!
//! The embedder passes flags in its own dialect (`key=1`, `target_cpu=ia32`);
//! this module rewrites them for GN and pulls out the target OS.

pub mod target;
pub mod translate;

pub use target::find_target_os;
pub use translate::{translate_flag, translate_flags};
