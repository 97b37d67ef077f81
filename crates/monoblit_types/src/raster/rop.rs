//! Binary and unary raster operation codes.
//!
//! A raster operation is a Boolean function of a destination byte `D` and,
//! for most codes, a source byte `S`, applied independently to all eight
//! bit-lanes. The sixteen binary codes cover every two-input Boolean
//! function; three of them ignore the source entirely and are additionally
//! exposed as the unary [`Rop1`] subset.
//!
//! Codes are named after their reverse-Polish form: operands first, then
//! operators (`n` = not, `a` = and, `o` = or, `x` = xor). `DSna` therefore
//! reads "D, S-not, and": `D & !S`.

use serde::{Deserialize, Serialize};

use crate::raster::error::RasterError;

/// Binary raster operation, a Boolean function of destination and source.
///
/// The discriminant is the canonical operation index. Operations whose
/// definition does not reference `S` (`Zero`, `Dn`, `D`, `One`) never
/// evaluate the source; see [`Rop2::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rop2 {
	/// `0x00` (blackness)
	Zero = 0,

	/// `!(D | S)`
	DSon = 1,

	/// `D & !S`
	DSna = 2,

	/// `!S` (notSrcCopy)
	Sn = 3,

	/// `S & !D` (srcErase)
	SDna = 4,

	/// `!D` (dstInvert)
	Dn = 5,

	/// `D ^ S` (srcInvert)
	DSx = 6,

	/// `!(D & S)`
	DSan = 7,

	/// `D & S` (srcAnd)
	DSa = 8,

	/// `!(D ^ S)`
	DSxn = 9,

	/// `D` (destination left untouched)
	D = 10,

	/// `D | !S` (mergePaint)
	DSno = 11,

	/// `S` (srcCopy)
	S = 12,

	/// `S | !D`
	SDno = 13,

	/// `D | S` (srcPaint)
	DSo = 14,

	/// `0xFF` (whiteness)
	One = 15,
}

impl Rop2 {
	/// All sixteen operations in index order.
	pub const ALL: [Rop2; 16] = [
		Rop2::Zero,
		Rop2::DSon,
		Rop2::DSna,
		Rop2::Sn,
		Rop2::SDna,
		Rop2::Dn,
		Rop2::DSx,
		Rop2::DSan,
		Rop2::DSa,
		Rop2::DSxn,
		Rop2::D,
		Rop2::DSno,
		Rop2::S,
		Rop2::SDno,
		Rop2::DSo,
		Rop2::One,
	];

	/// Converts an operation index to a `Rop2`.
	///
	/// # Errors
	///
	/// Returns an error if the value is outside `0..=15`.
	pub fn from_u8(value: u8) -> Result<Self, RasterError> {
		Self::ALL.get(value as usize).copied().ok_or(RasterError::InvalidRop(value))
	}

	/// Converts the operation to its index.
	pub fn to_u8(self) -> u8 {
		self as u8
	}

	/// Returns true if the definition references the source operand.
	pub fn uses_source(self) -> bool {
		!matches!(self, Rop2::Zero | Rop2::Dn | Rop2::D | Rop2::One)
	}

	/// Applies the operation to all eight bit-lanes of a destination byte.
	///
	/// The source byte is produced on demand by `src`. The closure is
	/// invoked exactly once if the operation references `S` and never
	/// otherwise. Callers that thread a cursor through `src` (the blit
	/// inner loop does) rely on this: source-free operations must not
	/// advance the source stream.
	pub fn apply(self, dst: u8, src: impl FnOnce() -> u8) -> u8 {
		match self {
			Rop2::Zero => 0x00,
			Rop2::DSon => !(dst | src()),
			Rop2::DSna => dst & !src(),
			Rop2::Sn => !src(),
			Rop2::SDna => src() & !dst,
			Rop2::Dn => !dst,
			Rop2::DSx => dst ^ src(),
			Rop2::DSan => !(dst & src()),
			Rop2::DSa => dst & src(),
			Rop2::DSxn => !(dst ^ src()),
			Rop2::D => dst,
			Rop2::DSno => dst | !src(),
			Rop2::S => src(),
			Rop2::SDno => src() | !dst,
			Rop2::DSo => dst | src(),
			Rop2::One => 0xFF,
		}
	}
}

impl Default for Rop2 {
	fn default() -> Self {
		Self::S
	}
}

impl std::fmt::Display for Rop2 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Rop2::Zero => "0",
			Rop2::DSon => "DSon",
			Rop2::DSna => "DSna",
			Rop2::Sn => "Sn",
			Rop2::SDna => "SDna",
			Rop2::Dn => "Dn",
			Rop2::DSx => "DSx",
			Rop2::DSan => "DSan",
			Rop2::DSa => "DSa",
			Rop2::DSxn => "DSxn",
			Rop2::D => "D",
			Rop2::DSno => "DSno",
			Rop2::S => "S",
			Rop2::SDno => "SDno",
			Rop2::DSo => "DSo",
			Rop2::One => "1",
		};
		write!(f, "{name}")
	}
}

/// Unary raster operation, a Boolean function of the destination alone.
///
/// The three unary codes are the source-free subset of [`Rop2`]; the
/// discriminants match the binary indices so the conversion is a plain
/// re-tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rop1 {
	/// `0x00` (blackness)
	Zero = 0,

	/// `!D` (dstInvert)
	Dn = 5,

	/// `0xFF` (whiteness)
	One = 15,
}

impl Rop1 {
	/// Converts a binary operation index to a `Rop1`.
	///
	/// # Errors
	///
	/// Returns an error if the value is not one of the unary codes.
	pub fn from_u8(value: u8) -> Result<Self, RasterError> {
		match value {
			0 => Ok(Self::Zero),
			5 => Ok(Self::Dn),
			15 => Ok(Self::One),
			other => Err(RasterError::InvalidRop(other)),
		}
	}

	/// Converts the operation to its binary index.
	pub fn to_u8(self) -> u8 {
		self as u8
	}

	/// Returns the equivalent binary operation.
	pub fn to_rop2(self) -> Rop2 {
		match self {
			Self::Zero => Rop2::Zero,
			Self::Dn => Rop2::Dn,
			Self::One => Rop2::One,
		}
	}

	/// Applies the operation to all eight bit-lanes of a destination byte.
	pub fn apply(self, dst: u8) -> u8 {
		match self {
			Self::Zero => 0x00,
			Self::Dn => !dst,
			Self::One => 0xFF,
		}
	}
}

impl Default for Rop1 {
	fn default() -> Self {
		Self::Dn
	}
}

impl std::fmt::Display for Rop1 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.to_rop2())
	}
}
