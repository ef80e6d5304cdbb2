mod error;
mod parser;
mod pass;
mod symbol;
mod util;

use color_print::cprintln;
use error::Error;
use parser::Line;
use symbol::Symbols;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file (defaults to the input with a .hack extension)
    #[clap(short, long)]
    output: Option<String>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    use std::fs::File;
    use std::io::{BufRead, Write};

    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_output(&args.input),
    };

    println!("1. Read and Parse Lines");
    println!("  < {}", args.input);
    let file = File::open(&args.input).map_err(|e| Error::FileOpen(args.input.clone(), e))?;
    let mut lines = vec![];
    for (idx, raw) in std::io::BufReader::new(file).lines().enumerate() {
        let raw = raw.map_err(Error::FileRead)?;
        lines.push(Line::new(&args.input, idx, &raw));
    }

    println!("2. Scan Labels");
    let mut symbols = Symbols::new();
    pass::first_pass(&lines, &mut symbols)?;

    println!("3. Resolve Symbols and Encode");
    let words = pass::second_pass(&lines, &mut symbols)?;

    println!("4. Write Binary");
    println!("  > {}", output);
    let mut file = File::create(&output).map_err(|e| Error::FileCreate(output.clone(), e))?;
    for word in &words {
        writeln!(file, "{:016b}", word).map_err(|e| Error::FileWrite(output.clone(), e))?;
    }

    if args.dump {
        util::print_dump(&lines, &mut symbols);
    }

    Ok(())
}

fn default_output(input: &str) -> String {
    std::path::Path::new(input)
        .with_extension("hack")
        .display()
        .to_string()
}
