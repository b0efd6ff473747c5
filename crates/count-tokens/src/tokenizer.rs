//! Token counting for OpenAI chat models.
//!
//! The encoding table itself lives in `tiktoken-rs`. This module only resolves an encoder from
//! a model identifier and measures the length of the encoded sequence.
use tiktoken_rs::CoreBPE;

use crate::prelude::*;

/// Model whose tokenizer is used to count tokens. `tiktoken-rs` resolves it to `cl100k_base`.
pub const MODEL: &str = "gpt-3.5-turbo";

/// Maps text to an ordered sequence of token ids.
pub trait Encoder {
    /// Identifier of the model the encoder is bound to.
    fn model(&self) -> &str;

    fn encode(&self, text: &str) -> Vec<u32>;

    /// Number of tokens `text` occupies.
    fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

/// Encoder backed by the BPE tables bundled with `tiktoken-rs`.
pub struct Tiktoken {
    model: String,
    bpe: CoreBPE,
}

impl Tiktoken {
    /// Resolves the encoder for `model`. Fails when `tiktoken-rs` doesn't know the identifier.
    pub fn for_model(model: &str) -> Result<Self> {
        log::debug!("resolving tokenizer for model={}", model);
        let bpe = tiktoken_rs::get_bpe_from_model(model).map_err(|e| Error::UnknownModel {
            model: model.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            model: model.to_string(),
            bpe,
        })
    }
}

impl Encoder for Tiktoken {
    fn model(&self) -> &str {
        &self.model
    }

    /// Special tokens such as `<|endoftext|>` are encoded as ordinary text.
    fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_ordinary(text)
    }
}

/// Counts the tokens `text` occupies under the [`MODEL`] tokenizer.
pub fn count_tokens(text: &str) -> Result<usize> {
    let encoder = Tiktoken::for_model(MODEL)?;
    let count = encoder.count(text);
    log::trace!("counted {} tokens over {} bytes", count, text.len());
    Ok(count)
}
