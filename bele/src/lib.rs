use core::{fmt, str::FromStr};
use std::{ffi::OsString, io::Write};

use anyhow::{bail, Context, Result};
use bele_lib::ByteOrder;
use log::debug;

#[derive(Debug)]
pub struct BinaryConfig {
    pub help: &'static str,
}

impl BinaryConfig {
    fn bail(&self, exit_code: i32) -> ! {
        if exit_code == 0 {
            println!("{}", self.help);
        } else {
            eprintln!("{}", self.help);
        }
        std::process::exit(exit_code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    U16,
    U24,
    U32,
    U64,
    F64,
}

impl ValueType {
    pub fn width(self) -> usize {
        match self {
            ValueType::U16 => bele_lib::UINT16_SIZE,
            ValueType::U24 => bele_lib::UINT24_SIZE,
            ValueType::U32 => bele_lib::UINT32_SIZE,
            ValueType::U64 => bele_lib::UINT64_SIZE,
            ValueType::F64 => bele_lib::FLOAT64_SIZE,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::U16 => write!(f, "u16"),
            ValueType::U24 => write!(f, "u24"),
            ValueType::U32 => write!(f, "u32"),
            ValueType::U64 => write!(f, "u64"),
            ValueType::F64 => write!(f, "f64"),
        }
    }
}

impl FromStr for ValueType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u16" => Ok(ValueType::U16),
            "u24" => Ok(ValueType::U24),
            "u32" => Ok(ValueType::U32),
            "u64" => Ok(ValueType::U64),
            "f64" => Ok(ValueType::F64),
            _ => bail!("unknown type \"{s}\", expected one of: u16, u24, u32, u64, f64"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hex encoded input bytes.
    Decode(String),
    /// Decimal or `0x` prefixed integer.
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub order: ByteOrder,
    pub value_type: ValueType,
    pub raw: bool,
}

/// Why argument parsing stopped without producing [`Args`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Help,
    Invalid,
}

pub fn parse_args(config: BinaryConfig) -> Args {
    match parse(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(Usage::Help) => config.bail(0),
        Err(Usage::Invalid) => config.bail(1),
    }
}

pub fn parse(env_args: impl IntoIterator<Item = OsString>) -> Result<Args, Usage> {
    let mut raw = false;
    let mut positional = Vec::with_capacity(4);

    for arg in env_args {
        let arg = arg.into_string().map_err(|_| Usage::Invalid)?;
        if arg.starts_with("--") {
            match arg.as_str() {
                "--help" => return Err(Usage::Help),
                "--raw" => raw = true,
                _ => return Err(Usage::Invalid),
            }
        } else if arg.starts_with('-') && arg.len() > 1 {
            match arg.as_str() {
                "-h" => return Err(Usage::Help),
                "-r" => raw = true,
                _ => return Err(Usage::Invalid),
            }
        } else {
            positional.push(arg);
        }
    }

    let [command, order, value_type, value]: [String; 4] =
        positional.try_into().map_err(|_| Usage::Invalid)?;
    let order = order.parse::<ByteOrder>().map_err(|_| Usage::Invalid)?;
    let value_type = value_type.parse::<ValueType>().map_err(|_| Usage::Invalid)?;
    let command = match command.as_str() {
        "decode" if !raw => Command::Decode(value),
        "encode" if value_type != ValueType::F64 => Command::Encode(value),
        _ => return Err(Usage::Invalid),
    };

    Ok(Args {
        command,
        order,
        value_type,
        raw,
    })
}

pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    match &args.command {
        Command::Decode(input) => {
            let bytes = hex::decode(input).context("input is not valid hex")?;
            debug!("decoding {} bytes as {} {}", bytes.len(), args.order, args.value_type);
            let decoded = decode(&bytes, args.value_type, args.order)?;
            writeln!(out, "{decoded}")?;
        }
        Command::Encode(input) => {
            let value = parse_integer(input)?;
            let bytes = encode(value, args.value_type, args.order)?;
            if args.raw {
                out.write_all(&bytes)?;
            } else {
                writeln!(out, "{}", hex::encode(&bytes))?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn decode(bytes: &[u8], value_type: ValueType, order: ByteOrder) -> Result<String> {
    let decoded = match value_type {
        ValueType::U16 => bele_lib::read_uint16(bytes, order)?.to_string(),
        ValueType::U24 => bele_lib::read_uint24(bytes, order)?.to_string(),
        ValueType::U32 => bele_lib::read_uint32(bytes, order)?.to_string(),
        ValueType::U64 => bele_lib::read_uint64(bytes, order)?.to_string(),
        ValueType::F64 => bele_lib::read_float64(bytes, order)?.to_string(),
    };
    Ok(decoded)
}

fn encode(value: u64, value_type: ValueType, order: ByteOrder) -> Result<Vec<u8>> {
    let too_large = || format!("{value} does not fit in {value_type}");
    let mut bytes = Vec::with_capacity(value_type.width());
    match value_type {
        ValueType::U16 => {
            let value = u16::try_from(value).with_context(too_large)?;
            bytes.resize(value_type.width(), 0);
            bele_lib::put_uint16(&mut bytes, value, order)?;
        }
        ValueType::U24 => {
            let value = u32::try_from(value)
                .ok()
                .filter(|v| *v <= bele_lib::UINT24_MAX)
                .with_context(too_large)?;
            bele_lib::write_uint24_to_stream(&mut bytes, value, order)?;
        }
        ValueType::U32 => {
            let value = u32::try_from(value).with_context(too_large)?;
            bele_lib::write_to_stream(&mut bytes, value, order)?;
        }
        ValueType::U64 => bele_lib::write_to_stream(&mut bytes, value, order)?,
        ValueType::F64 => bail!("encoding {value_type} is not supported"),
    }
    Ok(bytes)
}

fn parse_integer(s: &str) -> Result<u64> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => s.parse(),
    };
    parsed.with_context(|| format!("\"{s}\" is not an unsigned integer"))
}
