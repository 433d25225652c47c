use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::encoder::{encode, Word};
use crate::error::{AsmError, ErrorKind};
use crate::instructions::lookup;
use crate::operand::validate;
use crate::tokenizer::tokenize;

pub const DEFAULT_EMULATOR_URL: &str = "http://joeledstrom.github.io/brookshear-emu/#";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsmConfig {
    pub uppercase_hex: bool,
    /// Prefix the hex program is appended to by [`Program::emulator_url`].
    pub emulator_url: String,
}

impl Default for AsmConfig {
    fn default() -> Self {
        Self {
            uppercase_hex: false,
            emulator_url: DEFAULT_EMULATOR_URL.to_string(),
        }
    }
}

/// One emitted instruction and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub line: usize,
    pub source: String,
    pub bytes: Word,
}

/// Output of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    bytes: Vec<u8>,
    listing: Vec<ListingEntry>,
}

impl Program {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn listing(&self) -> &[ListingEntry] {
        &self.listing
    }

    /// Number of 2-byte instructions.
    pub fn len(&self) -> usize {
        self.listing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    pub fn to_hex(&self, cfg: &AsmConfig) -> String {
        let mut s = String::with_capacity(self.bytes.len() * 2);
        for b in &self.bytes {
            let _ = if cfg.uppercase_hex {
                write!(s, "{b:02X}")
            } else {
                write!(s, "{b:02x}")
            };
        }
        s
    }

    pub fn emulator_url(&self, cfg: &AsmConfig) -> String {
        format!("{}{}", cfg.emulator_url, self.to_hex(cfg))
    }

    fn push(&mut self, line: usize, source: &str, word: Word) {
        self.bytes.extend_from_slice(&word);
        self.listing.push(ListingEntry {
            line,
            source: source.trim().to_string(),
            bytes: word,
        });
    }
}

#[derive(Debug, Clone, Default)]
pub struct Assembler {
    pub cfg: AsmConfig,
}

impl Assembler {
    pub fn new(cfg: AsmConfig) -> Self {
        Self { cfg }
    }

    /// Assemble a whole source text. Stops at the first bad line.
    pub fn assemble(&self, source: &str) -> Result<Program, AsmError> {
        let mut prog = Program::default();
        for (idx, text) in source.lines().enumerate() {
            let line = idx + 1;
            let word = assemble_line(text).map_err(|kind| {
                warn!(line, source = text, "{kind}");
                AsmError { line, kind }
            })?;
            if let Some(word) = word {
                debug!(line, "{:<24} -> {:02x}{:02x}", text.trim(), word[0], word[1]);
                prog.push(line, text, word);
            }
        }
        info!(instructions = prog.len(), "assembled");
        Ok(prog)
    }
}

/// Assemble with the default configuration.
pub fn assemble(source: &str) -> Result<Program, AsmError> {
    Assembler::default().assemble(source)
}

/// Encode a single line; `Ok(None)` for blank or comment-only lines.
pub fn assemble_line(text: &str) -> Result<Option<Word>, ErrorKind> {
    let Some(tokens) = tokenize(text) else {
        return Ok(None);
    };
    trace!(mnemonic = tokens.mnemonic, operands = ?tokens.operands, "tokens");
    let desc = lookup(tokens.mnemonic)
        .ok_or_else(|| ErrorKind::UnknownMnemonic(tokens.mnemonic.to_string()))?;
    let values = validate(desc, &tokens.operands)?;
    Ok(Some(encode(desc, &values)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_rendering() {
        let prog = assemble("LOADI R1, aB\nHALT").unwrap();
        assert_eq!(prog.to_hex(&AsmConfig::default()), "21abc000");
        let upper = AsmConfig { uppercase_hex: true, ..AsmConfig::default() };
        assert_eq!(prog.to_hex(&upper), "21ABC000");
        assert_eq!(
            prog.emulator_url(&AsmConfig::default()),
            "http://joeledstrom.github.io/brookshear-emu/#21abc000"
        );
    }

    #[test]
    fn listing_tracks_source_lines() {
        let prog = assemble("; header\n\n  LOAD R1, 2A ; x\nHALT").unwrap();
        let lines: Vec<usize> = prog.listing().iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4]);
        assert_eq!(prog.listing()[0].source, "LOAD R1, 2A ; x");
        assert_eq!(prog.listing()[0].bytes, [0x11, 0x2A]);
    }

    #[test]
    fn config_fields_default_when_missing() {
        let cfg: AsmConfig = serde_json::from_str(r#"{ "uppercase_hex": true }"#).unwrap();
        assert!(cfg.uppercase_hex);
        assert_eq!(cfg.emulator_url, DEFAULT_EMULATOR_URL);
    }

    #[test]
    fn empty_source_is_an_empty_program() {
        let prog = assemble("").unwrap();
        assert!(prog.is_empty());
        assert!(prog.as_bytes().is_empty());
    }
}
