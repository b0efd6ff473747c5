use serde::Serialize;

use crate::prelude::*;

pub struct CountTokensCommand<E: Encoder> {
    encoder: E,
    input: String,
}

#[derive(Debug, Serialize)]
pub struct CountTokensResult {
    pub model: String,
    pub count: usize,
}

impl<E: Encoder> CountTokensCommand<E> {
    pub fn new(encoder: E, input: impl Into<String>) -> Self {
        Self {
            encoder,
            input: input.into(),
        }
    }
}

impl CommandResult for CountTokensResult {
    fn print_raw<W: std::io::Write>(&self, mut w: W) -> Result<()> {
        writeln!(w, "{}", self.count)?;
        Ok(())
    }
}

impl<E: Encoder> CommandHandle<CountTokensResult> for CountTokensCommand<E> {
    fn call(&self) -> Result<CountTokensResult> {
        Ok(CountTokensResult {
            model: self.encoder.model().to_string(),
            count: self.encoder.count(&self.input),
        })
    }
}
