//! Raster Operation Table Demo
//!
//! Applies all sixteen binary raster operations to a sample destination
//! and source byte and prints the results, either as an aligned text
//! table or as JSON.
//!
//! # Usage Examples
//!
//! ```bash
//! # Default sample bytes
//! cargo run --example rop_table
//!
//! # Custom bytes, hex accepted
//! cargo run --example rop_table -- --dst 0xA5 --src 0x0F
//!
//! # Machine-readable output
//! cargo run --example rop_table -- --json
//! ```

use clap::Parser;
use log::info;
use monoblit_rs::prelude::*;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "rop_table")]
#[command(about = "Print the sixteen binary raster operations", long_about = None)]
struct Cli {
	/// Destination byte, decimal or 0x-prefixed hex
	#[arg(long, default_value = "0xCC", value_parser = parse_byte)]
	dst: u8,

	/// Source byte, decimal or 0x-prefixed hex
	#[arg(long, default_value = "0xAA", value_parser = parse_byte)]
	src: u8,

	/// Emit the table as JSON
	#[arg(long)]
	json: bool,
}

/// One row of the operation table.
#[derive(Serialize)]
struct RopEntry {
	index: u8,
	name: String,
	uses_source: bool,
	result: String,
}

fn parse_byte(value: &str) -> Result<u8, String> {
	let parsed = if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u8::from_str_radix(hex, 16)
	} else {
		value.parse()
	};
	parsed.map_err(|e| format!("invalid byte '{value}': {e}"))
}

fn main() {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	info!("Applying all ops to D={} S={}", hex::encode([cli.dst]), hex::encode([cli.src]));

	let entries: Vec<RopEntry> = Rop2::ALL
		.iter()
		.map(|&op| RopEntry {
			index: op.to_u8(),
			name: op.to_string(),
			uses_source: op.uses_source(),
			result: hex::encode([op.apply(cli.dst, || cli.src)]),
		})
		.collect();

	if cli.json {
		match serde_json::to_string_pretty(&entries) {
			Ok(json) => println!("{json}"),
			Err(e) => info!("✗ Failed to serialise table: {e}"),
		}
		return;
	}

	println!("index  name   source  result");
	for entry in &entries {
		println!(
			"{:>5}  {:<5}  {:<6}  0x{}",
			entry.index,
			entry.name,
			if entry.uses_source {
				"yes"
			} else {
				"no"
			},
			entry.result.to_uppercase()
		);
	}

	info!("✓ Raster op table complete!");
}
