//! Bounded byte pipe between blocking pipeline stages.
//!
//! The pipe holds at most one in-flight chunk: a writer blocks until the
//! reader has taken the previous chunk, and a reader blocks until a chunk,
//! end-of-stream or an error arrives. Both ends must be used from threads
//! outside an async context (plain threads or `spawn_blocking`).

use std::io::{self, Read, Write};

use bytes::{Buf, Bytes};
use tokio::sync::mpsc;

/// Number of chunks that may wait between writer and reader.
const SLOTS: usize = 1;

type Chunk = io::Result<Bytes>;

/// Creates a connected writer/reader pair.
#[must_use]
pub fn pipe() -> (PipeWriter, PipeReader) {
    let (tx, rx) = mpsc::channel(SLOTS);
    (
        PipeWriter { tx },
        PipeReader {
            rx,
            pending: Bytes::new(),
            done: false,
        },
    )
}

/// Writing half of a [`pipe`]. Dropping it signals end-of-stream.
#[derive(Debug)]
pub struct PipeWriter {
    tx: mpsc::Sender<Chunk>,
}

impl PipeWriter {
    /// Closes the pipe so the reader fails with `err` instead of seeing EOF.
    pub fn close_with_error(self, err: io::Error) {
        // The reader may already be gone, in which case nobody needs the error.
        let _ = self.tx.blocking_send(Err(err));
    }
}

impl Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.tx
            .blocking_send(Ok(Bytes::copy_from_slice(buf)))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "pipe reader closed"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reading half of a [`pipe`].
#[derive(Debug)]
pub struct PipeReader {
    rx: mpsc::Receiver<Chunk>,
    pending: Bytes,
    done: bool,
}

impl Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.pending.is_empty() {
            if self.done {
                return Ok(0);
            }
            match self.rx.blocking_recv() {
                Some(Ok(chunk)) => self.pending = chunk,
                Some(Err(e)) => {
                    self.done = true;
                    return Err(e);
                }
                None => self.done = true,
            }
        }

        let n = buf.len().min(self.pending.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.advance(n);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_bytes_arrive_in_order() {
        let (mut writer, mut reader) = pipe();
        let producer = thread::spawn(move || {
            for i in 0..100u8 {
                writer.write_all(&[i; 37]).unwrap();
            }
        });

        let mut received = Vec::new();
        reader.read_to_end(&mut received).unwrap();
        producer.join().unwrap();

        let expected: Vec<u8> = (0..100u8).flat_map(|i| [i; 37]).collect();
        assert_eq!(received, expected);
    }

    #[test]
    fn test_small_reads_split_chunks() {
        let (mut writer, mut reader) = pipe();
        let producer = thread::spawn(move || writer.write_all(b"abcdef").unwrap());

        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"abcd");
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ef");
        producer.join().unwrap();
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_close_with_error_reaches_reader() {
        let (mut writer, mut reader) = pipe();
        let producer = thread::spawn(move || {
            writer.write_all(b"partial").unwrap();
            writer.close_with_error(io::Error::new(io::ErrorKind::NotFound, "source vanished"));
        });

        let mut received = Vec::new();
        let err = reader.read_to_end(&mut received).unwrap_err();
        producer.join().unwrap();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(received, b"partial");
    }

    #[test]
    fn test_write_after_reader_dropped_is_broken_pipe() {
        let (mut writer, reader) = pipe();
        drop(reader);
        let err = writer.write(b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_writer_blocks_until_slot_is_free() {
        let (mut writer, mut reader) = pipe();
        let (progress_tx, progress_rx) = std::sync::mpsc::channel();
        let producer = thread::spawn(move || {
            for i in 0..3u8 {
                writer.write_all(&[i]).unwrap();
                progress_tx.send(i).unwrap();
            }
        });

        // One chunk fits in the slot; the second write must wait for a read.
        assert_eq!(progress_rx.recv().unwrap(), 0);
        assert!(
            progress_rx
                .recv_timeout(std::time::Duration::from_millis(100))
                .is_err()
        );

        let mut received = Vec::new();
        reader.read_to_end(&mut received).unwrap();
        producer.join().unwrap();
        assert_eq!(received, vec![0, 1, 2]);
    }
}
