//! Command implementations for the tarscan CLI.

pub mod cat;
pub mod info;
pub mod list;

pub use cat::cmd_cat;
pub use info::cmd_info;
pub use list::{ListOptions, cmd_list};
pub use test::cmd_test;
