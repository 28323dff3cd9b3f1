//! One-shot batch tool: hash member PINs from a CSV and write a PIN_Hash
//! column in place of the plaintext PIN column.

use clap::Parser;
use dojo_portal::pinhash::hash_pin_table;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hash_pins",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hash PINs from a members CSV and write a PIN_Hash column",
    long_about = None
)]
struct Cli {
    /// Path to the members CSV with a PIN column
    #[arg(long = "infile")]
    infile: PathBuf,

    /// Where to write the output CSV
    #[arg(long = "outfile")]
    outfile: PathBuf,

    /// Salt string (must match the portal's PIN_SALT)
    #[arg(long = "salt")]
    salt: String,
}

fn main() {
    let cli = Cli::parse();

    match hash_pin_table(&cli.infile, &cli.outfile, &cli.salt) {
        Ok(count) => {
            println!("Wrote {} ({} records)", cli.outfile.display(), count);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
