pub mod dial;
pub mod error;
pub mod instruction;
pub mod part1;
pub mod password;

pub use dial::{turn_dial, Dial, DialConfig, Turn};
pub use error::{Error, ParseError};
pub use instruction::{parse_clicks, parse_direction, Direction, Instruction};
pub use password::{process_input, process_reader, process_str, Password};
