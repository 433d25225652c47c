use serde::Serialize;

/// How a byte operand is read by the machine at run time. Encoding is the same
/// for both; the role only documents the mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ByteRole {
    Address,
    Immediate,
}

/// What a source operand token denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperandKind {
    Register,
    Byte(ByteRole),
    RotateAmount,
}

impl OperandKind {
    /// Number of nibbles the operand occupies in the encoded word.
    pub const fn nibbles(self) -> u8 {
        match self {
            OperandKind::Register | OperandKind::RotateAmount => 1,
            OperandKind::Byte(_) => 2,
        }
    }

    /// Largest accepted value.
    pub const fn max(self) -> u8 {
        match self {
            OperandKind::Register | OperandKind::RotateAmount => 0xF,
            OperandKind::Byte(_) => 0xFF,
        }
    }
}

/// One slot of the encoding order following the opcode nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    /// Fixed nibble with no source token.
    Literal(u8),
    /// Source operand at this index (source order).
    Operand(usize),
}

#[derive(Debug, Serialize)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub opcode: u8,
    /// Operand kinds in the order they are written in source.
    pub operands: &'static [OperandKind],
    /// Nibble order after the opcode; maps source operands to positions.
    pub fields: &'static [Field],
}

impl InstrDesc {
    /// Width of a field in nibbles.
    pub fn field_nibbles(&self, field: Field) -> u8 {
        match field {
            Field::Literal(_) => 1,
            Field::Operand(i) => self.operands[i].nibbles(),
        }
    }
}

const REG: OperandKind = OperandKind::Register;
const ADDR: OperandKind = OperandKind::Byte(ByteRole::Address);
const IMM: OperandKind = OperandKind::Byte(ByteRole::Immediate);
const ROT: OperandKind = OperandKind::RotateAmount;

const RXY: &[Field] = &[Field::Operand(0), Field::Operand(1)];
const XY_R: &[Field] = &[Field::Operand(1), Field::Operand(0)];
const RST: &[Field] = &[Field::Operand(0), Field::Operand(1), Field::Operand(2)];
const REG3: &[OperandKind] = &[REG, REG, REG];

pub const TABLE: &[InstrDesc] = &[
    InstrDesc {
        mnemonic: "LOAD",
        opcode: 0x1,
        operands: &[REG, ADDR],
        fields: RXY,
    },
    InstrDesc {
        mnemonic: "LOADI",
        opcode: 0x2,
        operands: &[REG, IMM],
        fields: RXY,
    },
    // STORE XY,R
    InstrDesc {
        mnemonic: "STORE",
        opcode: 0x3,
        operands: &[ADDR, REG],
        fields: XY_R,
    },
    // MOVE S,R encodes as 0 R S
    InstrDesc {
        mnemonic: "MOVE",
        opcode: 0x4,
        operands: &[REG, REG],
        fields: &[Field::Literal(0), Field::Operand(1), Field::Operand(0)],
    },
    InstrDesc {
        mnemonic: "ADD",
        opcode: 0x5,
        operands: REG3,
        fields: RST,
    },
    InstrDesc {
        mnemonic: "ADD-FLOAT",
        opcode: 0x6,
        operands: REG3,
        fields: RST,
    },
    InstrDesc {
        mnemonic: "OR",
        opcode: 0x7,
        operands: REG3,
        fields: RST,
    },
    InstrDesc {
        mnemonic: "AND",
        opcode: 0x8,
        operands: REG3,
        fields: RST,
    },
    InstrDesc {
        mnemonic: "XOR",
        opcode: 0x9,
        operands: REG3,
        fields: RST,
    },
    InstrDesc {
        mnemonic: "ROTATE-RIGHT",
        opcode: 0xA,
        operands: &[REG, ROT],
        fields: &[Field::Operand(0), Field::Literal(0), Field::Operand(1)],
    },
    // JUMP XY,R
    InstrDesc {
        mnemonic: "JUMP",
        opcode: 0xB,
        operands: &[ADDR, REG],
        fields: XY_R,
    },
    InstrDesc {
        mnemonic: "HALT",
        opcode: 0xC,
        operands: &[],
        fields: &[Field::Literal(0), Field::Literal(0), Field::Literal(0)],
    },
];

/// Find a mnemonic, ignoring case and treating `_` as `-`.
pub fn lookup(name: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| {
        d.mnemonic.len() == name.len()
            && d.mnemonic.bytes().zip(name.bytes()).all(|(want, got)| {
                let got = if got == b'_' { b'-' } else { got };
                want.eq_ignore_ascii_case(&got)
            })
    })
}

/// Descriptor for an opcode nibble.
pub fn by_opcode(opcode: u8) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.opcode == opcode)
}
