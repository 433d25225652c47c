use serde::Serialize;

use crate::encoder::{join_nibbles, split_byte, Word};
use crate::instructions::{by_opcode, Field};

/// A word taken apart into its descriptor and source-order operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub mnemonic: &'static str,
    pub opcode: u8,
    pub operands: Vec<u8>,
}

/// Inverse of [`crate::encoder::encode`]. `None` for unused opcodes or a
/// non-zero literal nibble.
pub fn decode(word: Word) -> Option<Decoded> {
    let (opcode, n1) = split_byte(word[0]);
    let (n2, n3) = split_byte(word[1]);
    let nibbles = [n1, n2, n3];
    let desc = by_opcode(opcode)?;

    let mut operands = vec![0u8; desc.operands.len()];
    let mut at = 0;
    for &field in desc.fields {
        match field {
            Field::Literal(v) => {
                if nibbles[at] != v {
                    return None;
                }
                at += 1;
            }
            Field::Operand(i) if desc.operands[i].nibbles() == 2 => {
                operands[i] = join_nibbles(nibbles[at], nibbles[at + 1]);
                at += 2;
            }
            Field::Operand(i) => {
                operands[i] = nibbles[at];
                at += 1;
            }
        }
    }
    Some(Decoded {
        mnemonic: desc.mnemonic,
        opcode,
        operands,
    })
}
