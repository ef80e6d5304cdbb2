use crate::parser::{self, Kind, Line};
use crate::pass;
use crate::symbol::Symbols;
use color_print::cformat;

/// Print the assembled listing: pc, word, line number, instruction. Runs
/// after a successful pass 2, so every symbol is already bound; rows that
/// still fail to encode get placeholders.
pub fn print_dump(lines: &[Line], symbols: &mut Symbols) {
    let mut pc: u16 = 0;
    for line in lines {
        let body = if line.is_empty() {
            format!("{:24}| {:>4}:", "", line.no())
        } else {
            match Kind::of(line.code()) {
                Kind::Label => {
                    let addr = parser::label_name(line.code())
                        .ok()
                        .and_then(|name| symbols.get_address(name).ok());
                    let label = match addr {
                        Some(addr) => cformat!("<green>{}</> = {:04X}", line.code(), addr),
                        None => cformat!("<green>{}</>", line.code()),
                    };
                    format!("{:24}| {:>4}: {}", "", line.no(), label)
                }
                kind => {
                    let inst = match kind {
                        Kind::A => pass::encode_a(line.code(), symbols),
                        _ => pass::encode_c(line.code()),
                    };
                    let row = match inst {
                        Ok(inst) => format!(
                            "[{:04X}] {:016b} | {:>4}: {}",
                            pc,
                            inst.to_bin(),
                            line.no(),
                            inst.cformat()
                        ),
                        Err(_) => cformat!(
                            "[{:04X}] <red,bold>{}</> | {:>4}: {}",
                            pc,
                            "?".repeat(16),
                            line.no(),
                            line.code()
                        ),
                    };
                    pc += 1;
                    row
                }
            }
        };
        println!("{}", body);
    }
    println!("------------------------+--------------------------------------");
}
