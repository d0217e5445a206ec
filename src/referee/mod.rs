pub mod command;
pub mod protocol;

pub use command::{parse_command, Command};
pub use protocol::{handle_command, Flow};
