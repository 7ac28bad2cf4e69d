//! Line-based input with re-prompting validation.

use std::io::{BufRead, Write};

use thiserror::Error;

use stockline_core::{ProductId, ProductName, Stock};
use stockline_inventory::InsertPosition;

#[derive(Debug, Error)]
pub enum InputError {
    /// Input stream closed before a valid value was read.
    #[error("end of input")]
    Eof,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;

/// Parse a non-negative integer from one input line.
pub fn parse_non_negative(line: &str) -> Option<i64> {
    line.trim().parse::<i64>().ok().filter(|n| *n >= 0)
}

/// Map the position menu answer (1 = head, 2 = tail).
pub fn parse_position(value: i64) -> Option<InsertPosition> {
    match value {
        1 => Some(InsertPosition::Head),
        2 => Some(InsertPosition::Tail),
        _ => None,
    }
}

/// Prompts on `out` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.out)
    }

    fn prompt(&mut self, message: &str) -> InputResult<()> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Read one raw line (terminator included). `Eof` on a closed stream.
    pub fn read_line(&mut self) -> InputResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(line)
    }

    /// Prompt until the user enters a non-negative integer.
    pub fn read_non_negative(&mut self, message: &str) -> InputResult<i64> {
        self.prompt(message)?;
        loop {
            let line = self.read_line()?;
            if let Some(value) = parse_non_negative(&line) {
                return Ok(value);
            }
            tracing::debug!("rejected numeric input {:?}", line.trim_end());
            self.prompt("Error. Enter a non-negative integer: ")?;
        }
    }

    pub fn read_id(&mut self, message: &str) -> InputResult<ProductId> {
        loop {
            let value = self.read_non_negative(message)?;
            match ProductId::try_from(value) {
                Ok(id) => return Ok(id),
                Err(e) => writeln!(self.out, "Error. {e}")?,
            }
        }
    }

    pub fn read_stock(&mut self, message: &str) -> InputResult<Stock> {
        let units = self.read_non_negative(message)?;
        Ok(Stock::new(units.unsigned_abs()))
    }

    /// Read a product name; overlong input is truncated by [`ProductName`].
    pub fn read_name(&mut self, message: &str) -> InputResult<ProductName> {
        self.prompt(message)?;
        let line = self.read_line()?;
        Ok(ProductName::new(&line))
    }

    pub fn read_position(&mut self) -> InputResult<InsertPosition> {
        loop {
            let value = self.read_non_negative("Where to insert (1=Head, 2=Tail): ")?;
            if let Some(position) = parse_position(value) {
                return Ok(position);
            }
            writeln!(self.out, "Invalid position option. Try again.")?;
        }
    }
}
