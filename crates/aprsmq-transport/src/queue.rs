use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::Local;
use tracing::{debug, trace, warn};

use crate::error::{Result, TransportError};

/// Default receive queue directory, filled by the modem bridge.
///
/// Modern Linux has a predefined RAM disk at `/dev/shm`.
pub const DEFAULT_RX_DIR: &str = "/dev/shm/RQ";

/// Default transmit queue directory, drained by the modem bridge.
pub const DEFAULT_TX_DIR: &str = "/dev/shm/TQ";

/// Pause after each send so the next timestamped filename is distinct.
const SEND_SPACING: Duration = Duration::from_millis(2);

/// The pair of directory queues shared with the radio modem utility.
///
/// Each file holds one or more frame lines. Ownership of a file passes
/// with deletion: whoever reads an entry removes it. The bridge may write
/// a file we pick up mid-flush; that race is accepted and left to the
/// bridge's own write discipline.
#[derive(Debug, Clone)]
pub struct QueuePair {
    rx_dir: PathBuf,
    tx_dir: PathBuf,
}

impl Default for QueuePair {
    fn default() -> Self {
        Self::new(DEFAULT_RX_DIR, DEFAULT_TX_DIR)
    }
}

impl QueuePair {
    /// Queue pair over explicit directories.
    pub fn new(rx_dir: impl Into<PathBuf>, tx_dir: impl Into<PathBuf>) -> Self {
        Self {
            rx_dir: rx_dir.into(),
            tx_dir: tx_dir.into(),
        }
    }

    /// The receive queue directory.
    pub fn rx_dir(&self) -> &Path {
        &self.rx_dir
    }

    /// The transmit queue directory.
    pub fn tx_dir(&self) -> &Path {
        &self.tx_dir
    }

    /// Create both queue directories if they do not exist yet.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.tx_dir, &self.rx_dir] {
            if !dir.is_dir() {
                fs::create_dir_all(dir).map_err(|source| TransportError::CreateDir {
                    path: dir.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    /// Queue one frame line for transmission.
    ///
    /// The file lands in the transmit directory under a wall-clock name
    /// (`yymmdd.HHMMSS.mmm`) so the bridge picks frames up in submission
    /// order. A radio channel above zero is recorded as a `[n] ` prefix
    /// on the line for multi-port modems.
    pub fn send(&self, chan: u8, line: &str) -> Result<()> {
        self.ensure_dirs()?;

        let name = Local::now().format("%y%m%d.%H%M%S%.3f").to_string();
        let path = self.tx_dir.join(name);
        let contents = if chan > 0 {
            format!("[{chan}] {line}\n")
        } else {
            format!("{line}\n")
        };

        let written = fs::write(&path, contents).map_err(|source| TransportError::Write {
            path: path.clone(),
            source,
        });
        if written.is_ok() {
            trace!(path = %path.display(), "queued frame for transmit");
        }

        // Millisecond filename resolution; spacing the sends out keeps
        // back-to-back names unique.
        thread::sleep(SEND_SPACING);
        written
    }

    /// Claim and return every line waiting in the receive queue.
    ///
    /// Entries are processed in lexicographic filename order, read fully,
    /// then deleted. Entries that vanish between listing and reading, or
    /// that are not ordinary files, are skipped. Only the listing itself
    /// can fail.
    pub fn drain(&self) -> Result<Vec<String>> {
        let listing = fs::read_dir(&self.rx_dir).map_err(|source| TransportError::List {
            path: self.rx_dir.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in listing {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(source) => {
                    return Err(TransportError::List {
                        path: self.rx_dir.clone(),
                        source,
                    })
                }
            }
        }
        paths.sort();

        let mut lines = Vec::new();
        for path in paths {
            if !path.is_file() {
                trace!(path = %path.display(), "skipping non-ordinary queue entry");
                continue;
            }
            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(error) => {
                    debug!(path = %path.display(), %error, "skipping unreadable queue entry");
                    continue;
                }
            };
            debug!(path = %path.display(), "processing received queue file");
            lines.extend(contents.lines().map(str::to_string));
            if let Err(error) = fs::remove_file(&path) {
                warn!(path = %path.display(), %error, "could not remove claimed queue file");
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_queues(tag: &str) -> (PathBuf, QueuePair) {
        let dir = std::env::temp_dir().join(format!(
            "aprsmq-queue-{}-{}-{}",
            tag,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ));
        let pair = QueuePair::new(dir.join("RQ"), dir.join("TQ"));
        (dir, pair)
    }

    #[test]
    fn send_creates_directories_and_file() {
        let (dir, pair) = temp_queues("send");

        pair.send(0, "WB2OSZ>APMQ01::N2GH     :pub:button1=1")
            .expect("send should succeed");

        assert!(pair.rx_dir().is_dir());
        assert!(pair.tx_dir().is_dir());

        let files: Vec<_> = fs::read_dir(pair.tx_dir())
            .expect("tx dir should list")
            .collect();
        assert_eq!(files.len(), 1);
        let path = files[0].as_ref().expect("entry should read").path();
        let contents = fs::read_to_string(path).expect("file should read");
        assert_eq!(contents, "WB2OSZ>APMQ01::N2GH     :pub:button1=1\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn send_prefixes_nonzero_channel() {
        let (dir, pair) = temp_queues("chan");

        pair.send(5, "abcd").expect("send should succeed");

        let entry = fs::read_dir(pair.tx_dir())
            .expect("tx dir should list")
            .next()
            .expect("one file expected")
            .expect("entry should read");
        let contents = fs::read_to_string(entry.path()).expect("file should read");
        assert_eq!(contents, "[5] abcd\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rapid_sends_get_unique_names() {
        let (dir, pair) = temp_queues("unique");

        for i in 0..4 {
            pair.send(0, &format!("line-{i}")).expect("send should succeed");
        }

        let count = fs::read_dir(pair.tx_dir()).expect("tx dir should list").count();
        assert_eq!(count, 4);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn drain_returns_lines_in_filename_order() {
        let (dir, pair) = temp_queues("order");
        pair.ensure_dirs().expect("dirs should create");

        fs::write(pair.rx_dir().join("2"), "second\n").expect("write should succeed");
        fs::write(pair.rx_dir().join("1"), "first\n").expect("write should succeed");
        fs::write(pair.rx_dir().join("3"), "third\n").expect("write should succeed");

        let lines = pair.drain().expect("drain should succeed");
        assert_eq!(lines, vec!["first", "second", "third"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn drain_claims_each_file_exactly_once() {
        let (dir, pair) = temp_queues("claim");
        pair.ensure_dirs().expect("dirs should create");

        fs::write(pair.rx_dir().join("a"), "one\ntwo\n").expect("write should succeed");

        let first = pair.drain().expect("drain should succeed");
        assert_eq!(first, vec!["one", "two"]);
        assert_eq!(
            fs::read_dir(pair.rx_dir()).expect("rx dir should list").count(),
            0
        );

        let second = pair.drain().expect("drain should succeed");
        assert!(second.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn drain_skips_non_ordinary_entries() {
        let (dir, pair) = temp_queues("skip");
        pair.ensure_dirs().expect("dirs should create");

        fs::create_dir(pair.rx_dir().join("a-subdir")).expect("subdir should create");
        fs::write(pair.rx_dir().join("b"), "kept\n").expect("write should succeed");

        let lines = pair.drain().expect("drain should succeed");
        assert_eq!(lines, vec!["kept"]);
        assert!(pair.rx_dir().join("a-subdir").is_dir());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn drain_of_missing_directory_is_an_error() {
        let (dir, pair) = temp_queues("missing");

        let err = pair.drain().unwrap_err();
        assert!(matches!(err, TransportError::List { .. }));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_queue_pair_uses_ram_disk_paths() {
        let pair = QueuePair::default();
        assert_eq!(pair.rx_dir(), Path::new(DEFAULT_RX_DIR));
        assert_eq!(pair.tx_dir(), Path::new(DEFAULT_TX_DIR));
    }
}
