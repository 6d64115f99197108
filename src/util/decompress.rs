//! Decompression framing helpers.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::{Error, PpmbDecoder, Progress, util::PROGRESS_INTERVAL};

/// Decompresses a stream from `source` to `sink`.
///
/// Reads the four-byte length prefix and decodes exactly that many bytes.
/// `memory_mib` and `order` must match the values used for compression;
/// the stream does not record them and a mismatch silently decodes to
/// garbage. Returns the number of decompressed bytes written.
pub fn decompress<R: Read, W: Write>(
    source: &mut R,
    sink: &mut W,
    memory_mib: u32,
    order: u32,
) -> crate::Result<u64> {
    decompress_with_progress(source, sink, memory_mib, order, &mut |_: u64, _: u64, _: u32| {})
}

/// Decompresses a stream from `source` to `sink`, reporting progress.
///
/// `progress` receives `(bytes_processed, total_bytes, memory_mib)` every
/// 256 KiB of output and once on completion.
pub fn decompress_with_progress<R: Read, W: Write>(
    source: &mut R,
    sink: &mut W,
    memory_mib: u32,
    order: u32,
    progress: &mut dyn Progress,
) -> crate::Result<u64> {
    let text_length = u64::from(source.read_u32::<BigEndian>().map_err(map_eof)?);

    let mut decoder = PpmbDecoder::new(source, order, memory_mib).map_err(|error| match error {
        Error::Io(io) => map_eof(io),
        other => other,
    })?;

    for processed in 0..text_length {
        if processed % PROGRESS_INTERVAL == 0 {
            progress.on_progress(processed, text_length, decoder.used_memory());
        }
        let byte = decoder.decode_byte().map_err(map_eof)?;
        sink.write_u8(byte)?;
    }

    progress.on_progress(text_length, text_length, decoder.used_memory());

    Ok(text_length)
}

/// Decompresses a source file to a destination file.
///
/// A convenience wrapper around [`decompress`] with buffered file IO; the
/// destination is created or truncated. Returns the decompressed size in
/// bytes.
pub fn decompress_file(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    memory_mib: u32,
    order: u32,
) -> crate::Result<u64> {
    let mut source = BufReader::new(File::open(src)?);
    let mut sink = BufWriter::new(File::create(dest)?);
    let written = decompress(&mut source, &mut sink, memory_mib, order)?;
    sink.flush()?;
    Ok(written)
}

/// A stream that runs dry mid-decode is reported as truncated, not as a
/// bare IO error.
fn map_eof(error: std::io::Error) -> Error {
    if error.kind() == std::io::ErrorKind::UnexpectedEof {
        Error::TruncatedStream
    } else {
        Error::Io(error)
    }
}
