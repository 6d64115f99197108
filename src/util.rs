pub(crate) mod compress;
pub(crate) mod decompress;

/// Payload bytes between two progress callbacks.
pub(crate) const PROGRESS_INTERVAL: u64 = 1 << 18;
