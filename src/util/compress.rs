//! Compression framing helpers.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write},
    path::Path,
};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::{Error, PpmbEncoder, Progress, util::PROGRESS_INTERVAL};

/// Compresses the whole of `source` to `sink`.
///
/// The input length is measured by seeking to the end of `source`; the
/// stream format records it up front, so the input has to be measurable
/// before the first coded byte is written. Returns the number of compressed
/// bytes written.
///
/// # Arguments
/// * `source` - Seekable input to compress
/// * `sink` - Writer receiving the compressed stream
/// * `memory_mib` - Model memory budget in MiB; the decoder needs the same value
/// * `order` - Maximum context length in bytes; the decoder needs the same value
pub fn compress<R: Read + Seek, W: Write>(
    source: &mut R,
    sink: &mut W,
    memory_mib: u32,
    order: u32,
) -> crate::Result<u64> {
    compress_with_progress(source, sink, memory_mib, order, &mut |_: u64, _: u64, _: u32| {})
}

/// Compresses the whole of `source` to `sink`, reporting progress.
///
/// `progress` receives `(bytes_processed, total_bytes, memory_mib)` every
/// 256 KiB of input and once after the coder tail is written.
pub fn compress_with_progress<R: Read + Seek, W: Write>(
    source: &mut R,
    sink: &mut W,
    memory_mib: u32,
    order: u32,
    progress: &mut dyn Progress,
) -> crate::Result<u64> {
    let text_length = source.seek(SeekFrom::End(0))?;
    if text_length > u32::MAX as u64 {
        return Err(Error::InputTooLarge(text_length));
    }
    source.seek(SeekFrom::Start(0))?;

    let mut sink = CountingWriter::new(sink);
    sink.write_u32::<BigEndian>(text_length as u32)?;

    let mut encoder = PpmbEncoder::new(&mut sink, order, memory_mib)?;
    for processed in 0..text_length {
        if processed % PROGRESS_INTERVAL == 0 {
            progress.on_progress(processed, text_length, encoder.used_memory());
        }
        encoder.encode_byte(source.read_u8()?)?;
    }

    let memory_used = encoder.used_memory();
    encoder.finish()?;
    progress.on_progress(text_length, text_length, memory_used);

    Ok(sink.written())
}

/// Compresses a source file to a destination file.
///
/// A convenience wrapper around [`compress`] with buffered file IO; the
/// destination is created or truncated. Returns the compressed size in
/// bytes.
pub fn compress_file(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    memory_mib: u32,
    order: u32,
) -> crate::Result<u64> {
    let mut source = BufReader::new(File::open(src)?);
    let mut sink = BufWriter::new(File::create(dest)?);
    let written = compress(&mut source, &mut sink, memory_mib, order)?;
    sink.flush()?;
    Ok(written)
}

pub(crate) struct CountingWriter<W> {
    inner: W,
    written_bytes: u64,
}

impl<W> CountingWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            written_bytes: 0,
        }
    }

    pub(crate) fn written(&self) -> u64 {
        self.written_bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let len = self.inner.write(buf)?;
        self.written_bytes += len as u64;
        Ok(len)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
