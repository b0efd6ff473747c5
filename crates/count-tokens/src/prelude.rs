pub use crate::error::Error;
pub use crate::tokenizer::{Encoder, Tiktoken, MODEL};
pub use crate::{CommandHandle, CommandResult};

pub type Result<T> = std::result::Result<T, Error>;
