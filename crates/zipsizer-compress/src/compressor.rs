//! Compression-ratio measurement over a byte stream.
//!
//! The feed thread reads the input in fixed-size blocks and writes them into
//! the encoder. The encoder's output goes through a [`pipe`] to a drain
//! thread that only counts bytes, so neither side retains data. The caller
//! only joins the two threads and never touches either end of the pipe.

use std::io::{self, Read};
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::debug;
use zipsizer_types::{Codec, DEFAULT_BLOCK_SIZE, Result, SizerError, Stage};

use crate::encoder::Encoder;
use crate::{PipeReader, PipeWriter, pipe};

/// Byte counters for one measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Bytes fed to the encoder.
    pub uncompressed_bytes: u64,
    /// Bytes produced by the encoder, trailer included.
    pub compressed_bytes: u64,
}

impl CompressionStats {
    /// Returns `compressed / uncompressed`.
    ///
    /// # Errors
    ///
    /// Returns [`SizerError::DegenerateRatio`] if no bytes were consumed.
    pub fn ratio(&self) -> Result<f64> {
        if self.uncompressed_bytes == 0 {
            return Err(SizerError::DegenerateRatio { total_size: 0 });
        }
        Ok(self.compressed_bytes as f64 / self.uncompressed_bytes as f64)
    }
}

/// Measures compressed size with a fixed codec and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingCompressor {
    codec: Codec,
    level: u32,
    block_size: usize,
}

impl StreamingCompressor {
    /// Creates a compressor, validating the level for the codec.
    ///
    /// # Errors
    ///
    /// Returns [`SizerError::CodecConstruction`] if the codec rejects `level`.
    pub fn new(codec: Codec, level: u32) -> Result<Self> {
        if !codec.supports_level(level) {
            return Err(SizerError::CodecConstruction { codec, level });
        }
        Ok(Self {
            codec,
            level,
            block_size: DEFAULT_BLOCK_SIZE,
        })
    }

    /// Sets the block size used on both sides.
    #[must_use]
    pub const fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = if block_size == 0 { 1 } else { block_size };
        self
    }

    /// Returns the codec.
    #[must_use]
    pub const fn codec(&self) -> Codec {
        self.codec
    }

    /// Returns the compression level.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Compresses `input` to completion and counts bytes on both sides.
    ///
    /// Blocks the calling thread until both sides finish.
    ///
    /// # Errors
    ///
    /// Returns [`SizerError::StreamIo`] if reading the input or moving
    /// compressed bytes fails, and [`SizerError::StageFailed`] if the feed or
    /// drain thread panics.
    pub fn measure<R: Read + Send>(&self, input: R) -> Result<CompressionStats> {
        let (writer, reader) = pipe();
        let block_size = self.block_size;

        thread::scope(|scope| {
            let feeder = scope.spawn(move || self.feed(input, writer));
            let drainer = scope.spawn(move || drain(reader, block_size));
            let fed = feeder.join().map_err(|_| panicked(Stage::Compress))?;
            let drained = drainer.join().map_err(|_| panicked(Stage::Drain))?;

            let uncompressed_bytes = fed?;
            let compressed_bytes = drained.map_err(|e| SizerError::stream_io(Stage::Drain, e))?;
            let stats = CompressionStats {
                uncompressed_bytes,
                compressed_bytes,
            };
            debug!(
                codec = %self.codec,
                level = self.level,
                uncompressed = stats.uncompressed_bytes,
                compressed = stats.compressed_bytes,
                "compression measured"
            );
            Ok(stats)
        })
    }

    /// Pushes every input block through the encoder, returning bytes consumed.
    fn feed<R: Read>(&self, mut input: R, sink: PipeWriter) -> Result<u64> {
        let mut encoder = Encoder::new(self.codec, self.level, sink)?;
        let mut buf = vec![0u8; self.block_size];
        let mut consumed = 0u64;

        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(SizerError::stream_io(Stage::Compress, e)),
            };
            consumed += n as u64;
            io::Write::write_all(&mut encoder, &buf[..n])
                .map_err(|e| SizerError::stream_io(Stage::Compress, e))?;
        }

        // Dropping the returned writer closes the pipe for the drain side.
        encoder
            .finish()
            .map_err(|e| SizerError::stream_io(Stage::Compress, e))?;
        Ok(consumed)
    }
}

fn panicked(stage: Stage) -> SizerError {
    SizerError::StageFailed {
        stage,
        message: format!("{stage} thread panicked"),
    }
}

/// Reads `reader` to the end, counting and discarding bytes.
fn drain(mut reader: PipeReader, block_size: usize) -> io::Result<u64> {
    let mut buf = vec![0u8; block_size];
    let mut total = 0u64;
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => total += n as u64,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

/// Returns the compressed-to-uncompressed ratio of `input`.
///
/// # Errors
///
/// Returns [`SizerError::DegenerateRatio`] for empty input, and any error
/// from [`StreamingCompressor::new`] or [`StreamingCompressor::measure`].
pub fn compression_ratio<R: Read + Send>(input: R, codec: Codec, level: u32) -> Result<f64> {
    StreamingCompressor::new(codec, level)?.measure(input)?.ratio()
}
