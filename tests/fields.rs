use brookshear_asm::decoder::decode;
use brookshear_asm::encoder::encode;
use brookshear_asm::instructions::{Field, OperandKind, TABLE};
use brookshear_asm::{assemble, ErrorKind};
use pretty_assertions::assert_eq;

// Nibble index (0 = opcode) of each source operand's first nibble.
fn nibble_of(desc: &brookshear_asm::instructions::InstrDesc, operand: usize) -> usize {
    let mut at = 1;
    for &f in desc.fields {
        if f == Field::Operand(operand) {
            return at;
        }
        at += desc.field_nibbles(f) as usize;
    }
    unreachable!()
}

fn nibble(word: [u8; 2], i: usize) -> u8 {
    let b = word[i / 2];
    if i % 2 == 0 { b >> 4 } else { b & 0xF }
}

#[test]
fn every_register_value_lands_in_its_nibble() {
    for desc in TABLE {
        for (i, kind) in desc.operands.iter().enumerate() {
            if *kind != OperandKind::Register {
                continue;
            }
            let at = nibble_of(desc, i);
            for r in 0..=15u8 {
                let mut ops = vec![0u8; desc.operands.len()];
                ops[i] = r;
                let word = encode(desc, &ops);
                assert_eq!(nibble(word, 0), desc.opcode);
                assert_eq!(nibble(word, at), r, "{} operand {}", desc.mnemonic, i);
            }
        }
    }
}

#[test]
fn every_byte_value_round_trips() {
    for v in 0..=255u8 {
        let src = format!("LOADI R5, {v:X}\nSTORE {v:02x}, R5\nJUMP {v:#04x}, R5");
        let prog = assemble(&src).unwrap();
        let b = prog.as_bytes();
        assert_eq!(b, &[0x25, v, 0x35, v, 0xB5, v]);
        for w in b.chunks(2) {
            let d = decode([w[0], w[1]]).unwrap();
            assert!(d.operands.contains(&v));
        }
    }
}

#[test]
fn range_boundaries_per_field() {
    assert!(assemble("ADD RF, F, rf").is_ok());
    assert!(assemble("LOAD R0, FF").is_ok());
    assert!(assemble("ROTATE-RIGHT R0, F").is_ok());
    for src in ["ADD R10, R0, R0", "MOVE 0, 10", "LOAD R0, 100", "ROTATE-RIGHT R0, 10", "LOADI R0, 1FF"] {
        let err = assemble(src).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Range { .. }), "{src}");
    }
}

#[test]
fn decode_inverts_encode() {
    for desc in TABLE {
        let ops: Vec<u8> = desc
            .operands
            .iter()
            .enumerate()
            .map(|(i, k)| (0x9 + i as u8 * 0x23) & k.max())
            .collect();
        let d = decode(encode(desc, &ops)).unwrap();
        assert_eq!(d.mnemonic, desc.mnemonic);
        assert_eq!(d.opcode, desc.opcode);
        assert_eq!(d.operands, ops);
    }
}
