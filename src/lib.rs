//! A lossless, experimental compressor built from a bitwise PPM context
//! model and a byte-oriented range coder.
//!
//! The model is a growing tree of bit contexts linked by suffix pointers.
//! One node is active at a time and predicts the next bit; after each bit
//! the statistics along the suffix chain are updated and at most one new
//! node is grown, inheriting its probability from the node it shadows. The
//! range coder turns the prediction stream into bytes, deferring carry
//! resolution through a cached output segment so encoder and decoder stay
//! symmetrical.
//!
//! A compressed stream is a four-byte big-endian uncompressed length, one
//! zero byte, the arithmetic-coded body and the coder tail (the deferred
//! output segment plus the four remaining low bytes).
//! The stream records neither the memory budget nor the context order: the
//! same `memory_mib` and `order` values must be passed on both sides, and
//! there is no checksum, so a mismatch or a corrupted stream decodes to
//! garbage of the expected length.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//!
//! let data = b"an example payload, repetitive enough to shrink shrink shrink";
//!
//! let mut compressed = Vec::new();
//! ppmb_rust::compress(&mut Cursor::new(&data[..]), &mut compressed, 16, 4).unwrap();
//!
//! let mut restored = Vec::new();
//! ppmb_rust::decompress(&mut compressed.as_slice(), &mut restored, 16, 4).unwrap();
//!
//! assert_eq!(restored, data);
//! ```
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod internal;
mod progress;
mod util;

pub use decoder::PpmbDecoder;
pub use encoder::PpmbEncoder;
pub use error::Error;
pub use progress::Progress;
pub use util::compress::{compress, compress_file, compress_with_progress};
pub use util::decompress::{decompress, decompress_file, decompress_with_progress};

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default model memory budget in MiB.
pub const DEFAULT_MEMORY_MIB: u32 = 128;
/// Default maximum context length in bytes.
pub const DEFAULT_ORDER: u32 = 4;
/// Smallest accepted memory budget in MiB; always holds the bootstrap tree.
pub const MIN_MEMORY_MIB: u32 = 1;
/// Largest accepted memory budget in MiB.
pub const MAX_MEMORY_MIB: u32 = 4096;
/// Largest accepted context length in bytes.
pub const MAX_ORDER: u32 = 1 << 16;
