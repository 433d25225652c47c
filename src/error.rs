/// Why a single line failed to assemble.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),
    #[error("{mnemonic} expects {expected} operand(s), got {found}")]
    Arity {
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid operand `{token}`: expected a hexadecimal number")]
    Syntax { token: String },
    #[error("operand `{token}` out of range (valid 0x0..={max:#x})")]
    Range { token: String, max: u8 },
}

/// First error of an assembly run, tagged with its 1-based source line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct AsmError {
    pub line: usize,
    pub kind: ErrorKind,
}
