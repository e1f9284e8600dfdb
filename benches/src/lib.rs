//! Benchmark utilities for zipsizer.
//!
//! Builds throwaway directory trees with a controllable mix of compressible
//! and incompressible content.

use std::fs;
use std::io;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

const WORDS: [&str; 12] = [
    "sample", "window", "stride", "block", "stream", "codec", "level", "ratio", "file", "byte",
    "offset", "total",
];

/// Shape of a generated corpus.
#[derive(Debug, Clone, Copy)]
pub struct CorpusConfig {
    /// Number of files to write.
    pub files: usize,
    /// Size of each file in bytes.
    pub file_size: usize,
    /// Files per subdirectory.
    pub fanout: usize,
    /// Fraction of files filled with random bytes instead of text.
    pub random_fraction: f64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            files: 32,
            file_size: 1024 * 1024,
            fanout: 8,
            random_fraction: 0.25,
            seed: 7,
        }
    }
}

impl CorpusConfig {
    /// Total number of bytes the corpus holds.
    pub const fn total_bytes(&self) -> u64 {
        (self.files * self.file_size) as u64
    }
}

/// Write a corpus into a fresh temporary directory.
pub fn write_corpus(config: &CorpusConfig) -> io::Result<TempDir> {
    let dir = TempDir::new()?;
    populate(dir.path(), config)?;
    Ok(dir)
}

/// Write a corpus under `root`.
pub fn populate(root: &Path, config: &CorpusConfig) -> io::Result<()> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let fanout = config.fanout.max(1);

    for index in 0..config.files {
        let subdir = root.join(format!("dir{:03}", index / fanout));
        fs::create_dir_all(&subdir)?;

        let content = if rng.gen_bool(config.random_fraction.clamp(0.0, 1.0)) {
            random_bytes(&mut rng, config.file_size)
        } else {
            text_bytes(&mut rng, config.file_size)
        };
        fs::write(subdir.join(format!("file{index:05}.dat")), content)?;
    }

    Ok(())
}

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill(buf.as_mut_slice());
    buf
}

fn text_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(len + 16);
    while buf.len() < len {
        buf.extend_from_slice(WORDS[rng.gen_range(0..WORDS.len())].as_bytes());
        buf.push(if rng.gen_ratio(1, 10) { b'\n' } else { b' ' });
    }
    buf.truncate(len);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_corpus() {
        let config = CorpusConfig {
            files: 5,
            file_size: 1000,
            fanout: 2,
            random_fraction: 0.5,
            seed: 1,
        };
        let dir = write_corpus(&config).unwrap();

        let mut total = 0;
        for sub in fs::read_dir(dir.path()).unwrap() {
            for file in fs::read_dir(sub.unwrap().path()).unwrap() {
                total += file.unwrap().metadata().unwrap().len();
            }
        }
        assert_eq!(total, config.total_bytes());
        assert!(dir.path().join("dir002").join("file00004.dat").exists());
    }
}
