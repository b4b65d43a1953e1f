use std::io;

use anyhow::Result;
use bele::{parse_args, run, BinaryConfig};

const HELP_STR: &str = "
Decode and encode integers in a chosen byte order

Usage: bele [OPTIONS] decode ORDER TYPE HEX
       bele [OPTIONS] encode ORDER TYPE VALUE

Arguments:
    ORDER\tbe, big-endian, le or little-endian.
    TYPE\tu16, u24, u32, u64, or f64 (decode only).
    HEX\tBytes to decode, trailing bytes are ignored.
    VALUE\tDecimal or 0x prefixed integer to encode.

Options:
    -r, --raw\tWrite encoded bytes to stdout instead of hex.
    -h, --help\tPrint this help.
";

fn main() -> Result<()> {
    simple_logger::init_with_env()?;

    let args = parse_args(BinaryConfig {
        help: HELP_STR.trim(),
    });
    run(&args, &mut io::stdout().lock())
}
