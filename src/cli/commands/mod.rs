pub mod check;
mod command_result;
pub mod export;
mod helper;
pub mod init;

pub use command_result::*;
