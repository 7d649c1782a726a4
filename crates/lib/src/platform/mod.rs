pub mod os;
pub mod tools;

pub use os::HostOs;
pub use tools::{Tool, locate_tool, tool_path};
