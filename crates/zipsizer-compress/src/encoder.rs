//! Codec-specific streaming encoders behind one type.

use std::io::{self, Write};

use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use zipsizer_types::{Codec, Result, SizerError};

/// A streaming encoder writing compressed bytes into `W`.
pub(crate) enum Encoder<W: Write> {
    Gzip(GzEncoder<W>),
    Bzip2(BzEncoder<W>),
}

impl<W: Write> Encoder<W> {
    /// Builds the encoder for `codec` at `level`.
    pub(crate) fn new(codec: Codec, level: u32, sink: W) -> Result<Self> {
        if !codec.supports_level(level) {
            return Err(SizerError::CodecConstruction { codec, level });
        }
        Ok(match codec {
            Codec::Gzip => Self::Gzip(GzEncoder::new(sink, flate2::Compression::new(level))),
            Codec::Bzip2 => Self::Bzip2(BzEncoder::new(sink, bzip2::Compression::new(level))),
        })
    }

    /// Flushes the trailer and returns the sink.
    pub(crate) fn finish(self) -> io::Result<W> {
        match self {
            Self::Gzip(encoder) => encoder.finish(),
            Self::Bzip2(encoder) => encoder.finish(),
        }
    }
}

impl<W: Write> Write for Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Gzip(encoder) => encoder.write(buf),
            Self::Bzip2(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Gzip(encoder) => encoder.flush(),
            Self::Bzip2(encoder) => encoder.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_gzip_output_decodes() {
        let mut encoder = Encoder::new(Codec::Gzip, 6, Vec::new()).unwrap();
        encoder.write_all(b"hello hello hello").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut decoded = String::new();
        flate2::read::GzDecoder::new(&compressed[..])
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, "hello hello hello");
    }

    #[test]
    fn test_bzip2_output_decodes() {
        let mut encoder = Encoder::new(Codec::Bzip2, 9, Vec::new()).unwrap();
        encoder.write_all(b"abcabcabcabc").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut decoded = Vec::new();
        bzip2::read::BzDecoder::new(&compressed[..])
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, b"abcabcabcabc");
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        for codec in Codec::all() {
            let result = Encoder::new(*codec, 0, Vec::new());
            assert!(matches!(
                result,
                Err(SizerError::CodecConstruction { level: 0, .. })
            ));
        }
    }
}
