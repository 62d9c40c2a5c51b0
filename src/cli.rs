pub mod args;
pub mod value_enum;

pub use args::{Args, Command, CountArgs, GenerateArgs, LoadArgs};
pub use value_enum::CliOutputFormat;
