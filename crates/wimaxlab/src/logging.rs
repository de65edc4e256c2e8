use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (2 MB)
const MAX_LOG_SIZE: u64 = 2 * 1024 * 1024;
/// Size to keep after rotation (256 KB of most recent logs)
const KEEP_SIZE: u64 = 256 * 1024;

/// Rotate the log file if it exceeds the maximum size, keeping only the most
/// recent `KEEP_SIZE` bytes aligned to a line boundary.
fn rotate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let file_size = fs::metadata(log_path)?.len();
    if file_size <= MAX_LOG_SIZE {
        return Ok(());
    }

    let mut file = File::open(log_path)?;
    file.seek(SeekFrom::Start(file_size.saturating_sub(KEEP_SIZE)))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Skip to the first newline to avoid a partial leading line
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(&buffer[skip..])?;

    Ok(())
}

/// A writer factory that produces writers for the shared log file
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

/// A writer that holds a reference to the shared file
struct LogWriter {
    file: Arc<Mutex<File>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self.file.lock().unwrap();
        file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self.file.lock().unwrap();
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Initialize logging to `{data_dir}/wimaxlab.log` with size-based rotation.
///
/// The log level can be set via the `level` parameter or overridden with the
/// `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("wimaxlab.log");

    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let writer_factory = LogWriterFactory {
        file: Arc::new(Mutex::new(file)),
    };

    let default_filter = format!("wimaxlab={level},wimaxlab_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer_factory)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(
        "wimaxlab logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}
