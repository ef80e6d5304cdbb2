use crate::error::Error;
use crate::parser::{self, Kind, Line};
use crate::symbol::Symbols;
use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump};

// ----------------------------------------------------------------------------
// Pass 1

/// Bind every label to the address of the instruction that follows it.
pub fn first_pass(lines: &[Line], symbols: &mut Symbols) -> Result<(), Error> {
    let mut pc: u16 = 0;
    for line in lines {
        if line.is_empty() {
            continue;
        }
        match Kind::of(line.code()) {
            Kind::Label => {
                let name = match parser::label_name(line.code()) {
                    Ok(name) => name,
                    Err(err) => {
                        err.print_diag(line);
                        return Err(err);
                    }
                };
                symbols.add_entry(name, pc);
            }
            Kind::A | Kind::C => pc += 1,
        }
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Pass 2

/// Re-walk the same lines, resolve every operand and encode, one word per
/// instruction in input order. Aborts on the first error.
pub fn second_pass(lines: &[Line], symbols: &mut Symbols) -> Result<Vec<u16>, Error> {
    let mut words = vec![];
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let inst = match Kind::of(line.code()) {
            Kind::Label => continue,
            Kind::A => encode_a(line.code(), symbols),
            Kind::C => encode_c(line.code()),
        };
        match inst {
            Ok(inst) => words.push(inst.to_bin()),
            Err(err) => {
                err.print_diag(line);
                return Err(err);
            }
        }
    }
    Ok(words)
}

/// All-digit operands are 15-bit literals; everything else is a symbol,
/// allocated on first sight.
pub(crate) fn encode_a(code: &str, symbols: &mut Symbols) -> Result<Inst, Error> {
    let operand = &code[1..];
    let addr = if !operand.is_empty() && operand.chars().all(|c| c.is_ascii_digit()) {
        let value: u32 = operand
            .parse()
            .map_err(|_| Error::OperandOutOfRange(operand.to_string()))?;
        if value > 0x7FFF {
            return Err(Error::OperandOutOfRange(operand.to_string()));
        }
        value as u16
    } else {
        symbols.get_or_allocate(operand)
    };
    Ok(Inst::A(addr))
}

pub(crate) fn encode_c(code: &str) -> Result<Inst, Error> {
    let dest = parser::dest_field(code);
    let comp = parser::comp_field(code);
    let jump = parser::jump_field(code);
    Ok(Inst::C(
        Dest::parse(dest).ok_or_else(|| Error::InvalidMnemonic(dest.to_string()))?,
        Comp::parse(comp).ok_or_else(|| Error::InvalidMnemonic(comp.to_string()))?,
        Jump::parse(jump).ok_or_else(|| Error::InvalidMnemonic(jump.to_string()))?,
    ))
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assemble(source: &str) -> Result<Vec<String>, Error> {
        let lines: Vec<Line> = source
            .lines()
            .enumerate()
            .map(|(idx, raw)| Line::new("test.asm", idx, raw))
            .collect();
        let mut symbols = Symbols::new();
        first_pass(&lines, &mut symbols)?;
        let words = second_pass(&lines, &mut symbols)?;
        Ok(words.iter().map(|w| format!("{:016b}", w)).collect())
    }

    #[test]
    fn add_program() {
        let words = assemble("@2\nD=A\n@3\nD=D+A\n@0\nM=D").unwrap();
        assert_eq!(
            words,
            vec![
                "0000000000000010",
                "1110110000010000",
                "0000000000000011",
                "1110000010010000",
                "0000000000000000",
                "1110001100001000",
            ]
        );
    }

    #[test]
    fn label_binds_to_next_instruction() {
        let words = assemble("(LOOP)\n@LOOP\n0;JMP").unwrap();
        assert_eq!(words, vec!["0000000000000000", "1110101010000111"]);
    }

    #[test]
    fn forward_reference() {
        let words = assemble("@END\n0;JMP\n(END)\n@END\n0;JMP").unwrap();
        // END is instruction 2, not a variable
        assert_eq!(words[0], "0000000000000010");
        assert_eq!(words[2], "0000000000000010");
    }

    #[test]
    fn variables_allocate_in_encounter_order() {
        let words = assemble("@foo\n@foo\n@bar").unwrap();
        assert_eq!(
            words,
            vec!["0000000000010000", "0000000000010000", "0000000000010001"]
        );
    }

    #[test]
    fn predefined_symbols_resolve() {
        let words = assemble("@R3\n@THAT\n@SCREEN\n@KBD").unwrap();
        assert_eq!(
            words,
            vec![
                "0000000000000011",
                "0000000000000100",
                "0100000000000000",
                "0110000000000000",
            ]
        );
    }

    #[test]
    fn blanks_and_comments_are_transparent() {
        let source = "// init\n\n   @2\n(HERE)  // label\n  D=A  // load\n\n@HERE\n";
        let words = assemble(source).unwrap();
        assert_eq!(
            words,
            vec!["0000000000000010", "1110110000010000", "0000000000000001"]
        );
    }

    #[test]
    fn literal_bounds() {
        assert_eq!(assemble("@32767").unwrap(), vec!["0111111111111111"]);
        assert!(matches!(
            assemble("@32768"),
            Err(Error::OperandOutOfRange(_))
        ));
        assert!(matches!(
            assemble("@99999999999"),
            Err(Error::OperandOutOfRange(_))
        ));
    }

    #[test]
    fn unknown_comp_aborts() {
        assert!(matches!(assemble("D=Q"), Err(Error::InvalidMnemonic(_))));
    }

    #[test]
    fn unknown_dest_and_jump_abort() {
        assert!(matches!(assemble("X=D"), Err(Error::InvalidMnemonic(_))));
        assert!(matches!(assemble("D;JXX"), Err(Error::InvalidMnemonic(_))));
        assert!(matches!(assemble("D="), Err(Error::InvalidMnemonic(_))));
    }

    #[test]
    fn unclosed_label_aborts_pass_one() {
        assert!(matches!(assemble("(LOOP"), Err(Error::MalformedLabel(_))));
    }

    #[test]
    fn label_line_emits_no_word() {
        let words = assemble("(A)\n(B)\n@5\n(C)").unwrap();
        assert_eq!(words.len(), 1);
    }
}
