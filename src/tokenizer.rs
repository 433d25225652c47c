pub const COMMENT: char = ';';
pub const DELIM: char = ',';

/// A non-blank source line split into mnemonic and raw operand tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub mnemonic: &'a str,
    pub operands: Vec<&'a str>,
}

/// Drop everything from the first `;` onwards.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(p) => &line[..p],
        None => line,
    }
}

/// Split a line; `None` when nothing but whitespace or a comment remains.
pub fn tokenize(line: &str) -> Option<Line<'_>> {
    let s = strip_comment(line).trim();
    if s.is_empty() {
        return None;
    }
    let (mnemonic, rest) = match s.find(char::is_whitespace) {
        Some(p) => (&s[..p], s[p..].trim()),
        None => (s, ""),
    };

    let mut operands = Vec::new();
    if !rest.is_empty() {
        for piece in rest.split(DELIM) {
            let piece = piece.trim();
            if piece.is_empty() {
                // keep ",," and a trailing "," visible to the validator
                operands.push(piece);
            } else {
                operands.extend(piece.split_whitespace());
            }
        }
    }
    Some(Line { mnemonic, operands })
}
