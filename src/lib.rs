pub mod assembler;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod instructions;
pub mod operand;
pub mod tokenizer;

pub use assembler::{assemble, AsmConfig, Assembler, ListingEntry, Program};
pub use error::{AsmError, ErrorKind};
