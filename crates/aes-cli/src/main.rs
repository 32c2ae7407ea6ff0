//! Command-line interface encrypting a single AES-128 block.

#![forbid(unsafe_code)]

mod input;

use aes_core::{encrypt_block, init, Aes128Key};
use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};

use crate::input::{check_length, decode_block, Param};

/// AES-128 single-block encryption.
#[derive(Debug, Parser)]
#[command(name = "aes128", version, about = "Encrypt one 128-bit block with AES-128")]
struct Cli {
    /// Plaintext block as 32 hex characters.
    #[arg(value_name = "AES_INPUT")]
    input: String,
    /// AES-128 key as 32 hex characters.
    #[arg(value_name = "AES_KEY")]
    key: String,
    /// Enable debug logging on stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let ciphertext = run(&cli)?;
    println!("CIPHERTEXT: {ciphertext}");
    Ok(())
}

/// Validates both parameters and returns the hex-encoded ciphertext.
fn run(cli: &Cli) -> Result<String> {
    check_length(&cli.input, Param::Input)?;
    check_length(&cli.key, Param::Key)?;
    let block = decode_block(&cli.input)?;
    let key = Aes128Key::from(decode_block(&cli.key)?);
    debug!(
        input_len = cli.input.len(),
        key_len = cli.key.len(),
        "accepted parameters"
    );

    init();
    let ciphertext = encrypt_block(&block, &key);
    Ok(hex::encode(ciphertext))
}
