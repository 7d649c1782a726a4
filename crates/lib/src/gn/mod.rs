pub mod args;

pub use args::{BASELINE_ARGS, GnArgs};
