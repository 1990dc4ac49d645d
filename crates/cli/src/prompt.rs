//! Line-based prompting and input validation.
//!
//! Bad input is never fatal: `ask_until` re-prompts until the parser accepts
//! the line. `Ok(None)` from any prompt means input was closed.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use minierp_core::{DomainError, DomainResult};
use minierp_inventory::MovementKind;
use minierp_inventory::product::validate_unit_price;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Print `prompt` (no newline) and read one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript tidy when input ends mid-prompt.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask repeatedly until `parse` accepts the answer, printing `hint` after
    /// each rejected attempt.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        hint: &str,
        parse: impl Fn(&str) -> DomainResult<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::debug!(input = %answer, error = %e, "input rejected");
                    self.say(hint)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// A strictly positive unit price, e.g. `19.99`.
pub fn parse_price(input: &str) -> DomainResult<Decimal> {
    let price: Decimal = input
        .trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("'{}' is not a number", input.trim())))?;
    validate_unit_price(price)?;
    Ok(price)
}

/// A whole number of units, zero allowed (initial stock).
pub fn parse_stock_quantity(input: &str) -> DomainResult<u32> {
    input.trim().parse::<u32>().map_err(|_| {
        DomainError::validation(format!("'{}' is not a non-negative whole number", input.trim()))
    })
}

/// A whole number of units greater than zero (movements).
pub fn parse_movement_quantity(input: &str) -> DomainResult<u32> {
    match parse_stock_quantity(input)? {
        0 => Err(DomainError::validation("movement quantity must be positive")),
        n => Ok(n),
    }
}

/// `I` for inbound, `O` for outbound, any case.
pub fn parse_movement_kind(input: &str) -> DomainResult<MovementKind> {
    match input.trim().to_uppercase().as_str() {
        "I" => Ok(MovementKind::In),
        "O" => Ok(MovementKind::Out),
        other => Err(DomainError::validation(format!("unknown movement type '{other}'"))),
    }
}

/// Non-empty text.
pub fn parse_name(input: &str) -> DomainResult<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(name.to_string())
}
