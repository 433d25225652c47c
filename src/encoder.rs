use crate::instructions::{Field, InstrDesc};

/// One assembled instruction: opcode nibble first, big-endian nibble order.
pub type Word = [u8; 2];

#[inline]
pub fn split_byte(v: u8) -> (u8, u8) {
    (v >> 4, v & 0xF)
}

#[inline]
pub fn join_nibbles(hi: u8, lo: u8) -> u8 {
    ((hi & 0xF) << 4) | (lo & 0xF)
}

/// Pack validated operands (source order) into a 2-byte word.
///
/// `operands` must come from [`crate::operand::validate`] for the same
/// descriptor; values are masked to their field width, never range-checked.
pub fn encode(desc: &InstrDesc, operands: &[u8]) -> Word {
    let mut nibbles = [desc.opcode & 0xF, 0, 0, 0];
    let mut at = 1;
    for &field in desc.fields {
        match field {
            Field::Literal(v) => {
                nibbles[at] = v & 0xF;
                at += 1;
            }
            Field::Operand(i) if desc.operands[i].nibbles() == 2 => {
                let (hi, lo) = split_byte(operands[i]);
                nibbles[at] = hi;
                nibbles[at + 1] = lo;
                at += 2;
            }
            Field::Operand(i) => {
                nibbles[at] = operands[i] & 0xF;
                at += 1;
            }
        }
    }
    debug_assert_eq!(at, 4, "{} layout is not 3 nibbles", desc.mnemonic);
    [
        join_nibbles(nibbles[0], nibbles[1]),
        join_nibbles(nibbles[2], nibbles[3]),
    ]
}
