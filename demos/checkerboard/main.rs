//! Checkerboard Tiling Demo
//!
//! Tiles a 2x2 checkerboard pattern across a plane with `srcCopy` blits
//! and renders the result as ASCII art, then inverts a centred window to
//! show the unary entry point.
//!
//! # Usage Examples
//!
//! ```bash
//! # Tile a 32x16 plane
//! cargo run --example checkerboard
//!
//! # Tile a custom extent with custom glyphs
//! cargo run --example checkerboard -- --width 24 --height 8 --one '#' --zero '.'
//!
//! # Skip the inverted window
//! cargo run --example checkerboard -- --no-invert
//! ```

use clap::Parser;
use log::info;
use monoblit_rs::prelude::*;

#[derive(Parser)]
#[command(name = "checkerboard")]
#[command(about = "Tile a checkerboard pattern through srcCopy blits", long_about = None)]
struct Cli {
	/// Plane width in pixels
	#[arg(long, default_value_t = 32)]
	width: i32,

	/// Plane height in pixels
	#[arg(long, default_value_t = 16)]
	height: i32,

	/// Glyph for white pixels
	#[arg(long, default_value_t = '#')]
	one: char,

	/// Glyph for black pixels
	#[arg(long, default_value_t = '.')]
	zero: char,

	/// Skip inverting the centre window
	#[arg(long)]
	no_invert: bool,
}

fn main() {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	// 2x2 checkerboard tile: (0,0)=0, (1,0)=1, (0,1)=1, (1,1)=0.
	let mut pattern_bytes = [0x40u8, 0x80];
	let pattern = match BitPlane::from_buffer(2, 2, &mut pattern_bytes) {
		Ok(plane) => plane,
		Err(e) => {
			info!("✗ Failed to wrap pattern buffer: {e}");
			return;
		}
	};

	let mut board = BitPlane::new();
	if let Err(e) = board.create(cli.width, cli.height) {
		info!("✗ Failed to create {}x{} plane: {e}", cli.width, cli.height);
		return;
	}
	info!("Created {board}");

	let mut blits = 0;
	for y in (0..board.height()).step_by(2) {
		for x in (0..board.width()).step_by(2) {
			if board.bit_blt(x, y, 2, 2, &pattern, 0, 0, Rop2::S) {
				blits += 1;
			}
		}
	}
	info!("Tiled the plane with {blits} srcCopy blits");

	if !cli.no_invert {
		// Invert a centred window covering half of each extent.
		let (cx, cy) = (board.width() / 2, board.height() / 2);
		let (x, y) = (board.width() / 4, board.height() / 4);
		if board.bit_blt_self(x, y, cx, cy, Rop1::Dn) {
			info!("Inverted a {cx}x{cy} window at ({x}, {y})");
		}
	}

	println!("{}", board.to_ascii_art(cli.one, cli.zero));

	info!("✓ Checkerboard demo complete!");
}
