use fitsvalue::block::{blocks_needed, padded_byte_len, parse_byte_count};
use fitsvalue::{classify, pretty_string, ValueKind};
use std::process;

const USAGE: &str = "Usage: fitsvalue [-p] [-f <file>] [-b <bytes>] [<token>...]\n\n\
Classify FITS header value tokens and compute block counts.\n\n\
  -p, --pretty        show the normalized form of string values\n\
  -f, --file <file>   read tokens from a file, one per line\n\
  -b, --blocks <n>    print the number of 2880-byte blocks for n bytes\n\
  -V, --version       print the library version";

fn format_token(token: &str, pretty: bool) -> String {
    let kind = classify(Some(token));
    if pretty && kind == ValueKind::String {
        let normalized = pretty_string(Some(token)).unwrap_or_default();
        format!("{}\t{}\t{}\n", kind, token, normalized)
    } else {
        format!("{}\t{}\n", kind, token)
    }
}

fn format_blocks(num_bytes: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Bytes: {}\n", num_bytes));
    out.push_str(&format!("Blocks: {}\n", blocks_needed(num_bytes)));
    match padded_byte_len(num_bytes) {
        Some(padded) => out.push_str(&format!("Padded size: {} bytes\n", padded)),
        None => out.push_str("Padded size: overflow\n"),
    }
    out
}

fn read_tokens(path: &str) -> Result<Vec<String>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading '{}': {}", path, fitsvalue::Error::from(e)))?;
    Ok(text.lines().map(String::from).collect())
}

fn run(args: &[String]) -> Result<String, String> {
    let mut pretty = false;
    let mut tokens: Vec<String> = Vec::new();
    let mut blocks = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-V" | "--version" => return Ok(format!("fitsvalue {}\n", fitsvalue::VERSION)),
            "-p" | "--pretty" => pretty = true,
            "-f" | "--file" => {
                let path = iter
                    .next()
                    .ok_or_else(|| format!("Missing argument for {}", arg))?;
                tokens.extend(read_tokens(path)?);
            }
            "-b" | "--blocks" => {
                let text = iter
                    .next()
                    .ok_or_else(|| format!("Missing argument for {}", arg))?;
                let n = parse_byte_count(text)
                    .map_err(|e| format!("Invalid argument for {}: {}", arg, e))?;
                blocks = Some(n);
            }
            "--" => {
                tokens.extend(iter.by_ref().cloned());
            }
            other if other.starts_with('-') && classify(Some(other)) == ValueKind::String => {
                return Err(format!("Unknown option: {}", other));
            }
            _ => tokens.push(arg.clone()),
        }
    }

    if tokens.is_empty() && blocks.is_none() {
        return Err(USAGE.to_string());
    }

    let mut out = String::new();
    for token in &tokens {
        out.push_str(&format_token(token, pretty));
    }
    if let Some(n) = blocks {
        out.push_str(&format_blocks(n));
    }
    Ok(out)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    }
}
