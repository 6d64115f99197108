/// Progress reporting for compression and decompression.
///
/// The framing helpers call [`on_progress`](Progress::on_progress) every
/// 256 KiB of payload and once on completion. The core only reports
/// numbers; rendering them is the caller's business.
pub trait Progress {
    /// Receives the payload bytes processed so far, the total payload size,
    /// and the model arena's high-water mark in MiB.
    fn on_progress(&mut self, bytes_processed: u64, total_bytes: u64, memory_mib: u32);
}

impl<F: FnMut(u64, u64, u32)> Progress for F {
    fn on_progress(&mut self, bytes_processed: u64, total_bytes: u64, memory_mib: u32) {
        self(bytes_processed, total_bytes, memory_mib)
    }
}
