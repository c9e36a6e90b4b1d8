use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

use huge_uint::{arithmetic, loader, new_numbers, HugeUint, LoadConfig, NumberError, Radix};

#[derive(Parser, Debug)]
#[command(author, version, about = "Adds or subtracts two huge unsigned numbers read from a file")]
struct Args {
    /// File holding the two numbers
    file: PathBuf,

    /// Base the numbers are written in: bin, dec or hex
    #[arg(long, default_value = "hex")]
    radix: Radix,

    /// Operation to perform (sub is binary only)
    #[arg(long, value_enum, default_value_t = Operation::Add)]
    op: Operation,

    /// Character between the two numbers
    #[arg(long, default_value = " ", value_parser = parse_byte)]
    separator: u8,

    /// Character that ends the input early (NUL by default)
    #[arg(long, default_value = "NUL", value_parser = parse_byte)]
    end: u8,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
    Add,
    Sub,
}

impl Operation {
    fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
        }
    }
}

type BinaryOp = fn(&HugeUint, &HugeUint) -> HugeUint;

fn select(op: Operation, radix: Radix) -> Option<BinaryOp> {
    match (op, radix) {
        (Operation::Add, Radix::Binary) => Some(arithmetic::add_bin as BinaryOp),
        (Operation::Add, Radix::Decimal) => Some(arithmetic::add_dec as BinaryOp),
        (Operation::Add, Radix::Hexadecimal) => Some(arithmetic::add_hex as BinaryOp),
        (Operation::Sub, Radix::Binary) => Some(arithmetic::sub_bin as BinaryOp),
        (Operation::Sub, _) => None,
    }
}

/// Accepts a single ASCII character or one of `NUL`, `\0`, `\t`, `\n`, `\r`.
fn parse_byte(s: &str) -> Result<u8, String> {
    match s {
        "NUL" | "\\0" => Ok(0),
        "\\t" => Ok(b'\t'),
        "\\n" => Ok(b'\n'),
        "\\r" => Ok(b'\r'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("expected a single ASCII character, got '{}'", s)),
    }
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

// `log` records from the library arrive through the `tracing-log` bridge.
fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_filter(verbose))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(operation) = select(args.op, args.radix) else {
        bail!("{:?} is not supported for {} numbers", args.op, args.radix);
    };

    let mut numbers = new_numbers(2, 0).context("memory error while creating the numbers")?;

    let file = File::open(&args.file)
        .with_context(|| format!("cannot open the file '{}'", args.file.display()))?;

    let config = LoadConfig {
        separator: args.separator,
        end: args.end,
        radix: args.radix,
    };
    let count = loader::load(&mut numbers, &config, file)
        .with_context(|| format!("cannot load numbers from '{}'", args.file.display()))?;
    if count != 2 {
        bail!("invalid amount of numbers, expected 2, {} given", count);
    }

    let result = operation(&numbers[0], &numbers[1]);
    if result.error() == Some(NumberError::Memory) {
        bail!("memory error while computing the result");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    numbers[0].print_to(&mut out)?;
    write!(out, "{}", args.op.symbol())?;
    numbers[1].print_to(&mut out)?;
    out.write_all(b"=")?;
    result.print_to(&mut out)?;
    out.write_all(b"\n")?;
    if result.error() == Some(NumberError::Underflow) {
        writeln!(out, "UNDERFLOW DETECTED!")?;
    }
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_byte() {
        assert_eq!(parse_byte(" "), Ok(b' '));
        assert_eq!(parse_byte(";"), Ok(b';'));
        assert_eq!(parse_byte("NUL"), Ok(0));
        assert_eq!(parse_byte("\\n"), Ok(b'\n'));
        assert!(parse_byte("ab").is_err());
        assert!(parse_byte("é").is_err());
    }

    #[test]
    fn test_select() {
        let add = select(Operation::Add, Radix::Hexadecimal).unwrap();
        let sum = add(&HugeUint::from_digits("FF"), &HugeUint::from_digits("01"));
        assert_eq!(sum.digits(), b"100");

        assert!(select(Operation::Sub, Radix::Binary).is_some());
        assert!(select(Operation::Sub, Radix::Decimal).is_none());
        assert!(select(Operation::Sub, Radix::Hexadecimal).is_none());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["huge-uint", "numbers.txt"]).unwrap();
        assert_eq!(args.radix, Radix::Hexadecimal);
        assert_eq!(args.op, Operation::Add);
        assert_eq!(args.separator, b' ');
        assert_eq!(args.end, 0);

        let args = Args::try_parse_from([
            "huge-uint",
            "n.txt",
            "--radix",
            "bin",
            "--op",
            "sub",
            "--end",
            ";",
        ])
        .unwrap();
        assert_eq!(args.radix, Radix::Binary);
        assert_eq!(args.op, Operation::Sub);
        assert_eq!(args.end, b';');

        assert!(Args::try_parse_from(["huge-uint"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_filter(0), LevelFilter::ERROR);
        assert_eq!(level_filter(1), LevelFilter::INFO);
        assert_eq!(level_filter(2), LevelFilter::DEBUG);
        assert_eq!(level_filter(7), LevelFilter::TRACE);
    }
}
