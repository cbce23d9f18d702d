use std::fmt;
use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::dial::{Dial, DialConfig, Turn};
use crate::error::Error;
use crate::instruction::Instruction;

/// Totals gathered while turning the dial through a whole input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Password {
    /// Times the dial reset through zero. This is the password itself.
    pub resets: u64,
    /// Turns that came to rest exactly on zero.
    pub zero_landings: u64,
    pub final_position: u32,
    pub instructions: usize,
}

impl Password {
    /// Adds `turn` to the totals, or returns `None` if the reset count no
    /// longer fits in a `u64`.
    fn record(&mut self, turn: Turn) -> Option<()> {
        self.resets = self.resets.checked_add(turn.resets)?;
        self.zero_landings += u64::from(turn.position == 0);
        self.final_position = turn.position;
        self.instructions += 1;
        Some(())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password: {}", self.resets)
    }
}

/// Applies every line in order, stopping at the first one that fails to read
/// or parse.
#[tracing::instrument(skip(lines))]
pub fn process_input<I, L>(lines: I, config: DialConfig) -> Result<Password, Error>
where
    I: IntoIterator<Item = io::Result<L>>,
    L: AsRef<str>,
{
    let mut dial = Dial::new(config);
    let mut password = Password {
        final_position: dial.position(),
        ..Password::default()
    };

    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        let line = line.as_ref();
        let line_number = index + 1;

        let instruction =
            Instruction::parse(line).map_err(|kind| Error::parse(line_number, line, kind))?;
        if instruction.clicks < 0 {
            warn!(
                line = line_number,
                clicks = instruction.clicks,
                "negative click count, leaving the dial where it is"
            );
        }

        let turn = dial.apply(instruction);
        debug!(
            line = line_number,
            ?instruction,
            resets = turn.resets,
            position = turn.position,
            "turned dial"
        );
        password
            .record(turn)
            .ok_or(Error::ResetOverflow { line: line_number })?;
    }

    Ok(password)
}

pub fn process_str(input: &str, config: DialConfig) -> Result<Password, Error> {
    process_input(input.lines().map(Ok), config)
}

pub fn process_reader(reader: impl BufRead, config: DialConfig) -> Result<Password, Error> {
    process_input(reader.lines(), config)
}
