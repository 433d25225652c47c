use std::num::IntErrorKind;

use crate::error::ErrorKind;
use crate::instructions::{InstrDesc, OperandKind};

/// Parse and range-check operand tokens against a descriptor, in source order.
pub fn validate(desc: &InstrDesc, tokens: &[&str]) -> Result<Vec<u8>, ErrorKind> {
    if tokens.len() != desc.operands.len() {
        return Err(ErrorKind::Arity {
            mnemonic: desc.mnemonic,
            expected: desc.operands.len(),
            found: tokens.len(),
        });
    }
    desc.operands
        .iter()
        .zip(tokens)
        .map(|(&kind, tok)| parse_operand(kind, tok))
        .collect()
}

/// Parse one hexadecimal token for the given operand kind.
pub fn parse_operand(kind: OperandKind, token: &str) -> Result<u8, ErrorKind> {
    let syntax = || ErrorKind::Syntax { token: token.to_string() };
    let range = || ErrorKind::Range { token: token.to_string(), max: kind.max() };

    let mut t = token.trim();
    if kind == OperandKind::Register {
        if let Some(r) = t.strip_prefix('R').or_else(|| t.strip_prefix('r')) {
            t = r;
        }
    }
    let digits = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")).unwrap_or(t);
    // from_str_radix would accept a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(syntax());
    }
    let value = match u32::from_str_radix(digits, 16) {
        Ok(v) => v,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Err(range()),
        Err(_) => return Err(syntax()),
    };
    if value > u32::from(kind.max()) {
        return Err(range());
    }
    Ok(value as u8)
}
