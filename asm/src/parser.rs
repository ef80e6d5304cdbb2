use crate::error::Error;

// ----------------------------------------------------------------------------
// Line

/// One source line: where it came from and what is left after normalization.
#[derive(Debug, Clone)]
pub struct Line {
    path: String,
    idx: usize,
    raw: String,
    code: String,
}

impl Line {
    pub fn new(path: &str, idx: usize, raw: &str) -> Self {
        Self {
            path: path.to_string(),
            idx,
            raw: raw.to_string(),
            code: normalize(raw),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn pos(&self) -> String {
        format!("{}:{}", self.path, self.idx + 1)
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Drop everything from the first `//` onward, then every whitespace
/// character. May return an empty string.
fn normalize(raw: &str) -> String {
    let code = match raw.find("//") {
        Some(at) => &raw[..at],
        None => raw,
    };
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

// ----------------------------------------------------------------------------
// Classification

/// Instruction kind, decided by the first character of a non-empty
/// normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    A,
    C,
    Label,
}

impl Kind {
    /// Callers must filter empty lines first.
    pub fn of(code: &str) -> Kind {
        match code.chars().next() {
            Some('@') => Kind::A,
            Some('(') => Kind::Label,
            _ => Kind::C,
        }
    }
}

// ----------------------------------------------------------------------------
// Field extraction

/// Label name: strictly between the leading `(` and the last `)`.
pub fn label_name(code: &str) -> Result<&str, Error> {
    let inner = &code[1..];
    match inner.rfind(')') {
        Some(end) => Ok(&inner[..end]),
        None => Err(Error::MalformedLabel(code.to_string())),
    }
}

/// Before the first `=`; empty means no destination.
pub fn dest_field(code: &str) -> &str {
    match code.find('=') {
        Some(at) => &code[..at],
        None => "",
    }
}

/// After the first `;`; empty means no jump.
pub fn jump_field(code: &str) -> &str {
    match code.find(';') {
        Some(at) => &code[at + 1..],
        None => "",
    }
}

/// Between the `=` (if any) and the `;` (if any). Mandatory, but malformed
/// lines can leave it empty; the encoding table rejects that downstream.
pub fn comp_field(code: &str) -> &str {
    let from = code.find('=').map_or(0, |at| at + 1);
    let to = code.find(';').unwrap_or(code.len());
    code.get(from..to).unwrap_or("")
}

// ----------------------------------------------------------------------------
