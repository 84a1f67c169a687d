use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue with the remaining inputs
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192, // WHY: 8KB matches common filesystem block sizes
        }
    }
}

/// Statistics for one input file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Async reader that loads each input file as one raw text
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a whole file as UTF-8 with buffered async I/O
    ///
    /// In non-fail-fast mode a failed read yields an empty string and the
    /// error is carried in the returned stats.
    pub async fn read_file<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        match self.read_to_string(path).await {
            Ok(content) => {
                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: content.len() as u64,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                    read_error: None,
                };
                info!(
                    "Successfully read {}: {} bytes in {}ms",
                    path.display(),
                    stats.bytes_read,
                    stats.duration_ms
                );
                Ok((content, stats))
            }
            Err(e) => {
                let error_msg = format!("Failed to read file {}: {}", path.display(), e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }

                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: 0,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                    read_error: Some(error_msg),
                };
                Ok((String::new(), stats))
            }
        }
    }

    async fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        let file = File::open(path).await?;
        // WHY: BufReader with custom buffer size reduces syscalls on large inputs
        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut content = String::new();
        reader.read_to_string(&mut content).await?;
        Ok(content)
    }

    /// Read several inputs in order
    pub async fn read_files_batch<P: AsRef<Path>>(
        &self,
        file_paths: &[P],
    ) -> Result<Vec<(String, ReadStats)>> {
        info!("Starting batch read of {} files", file_paths.len());

        let mut results = Vec::with_capacity(file_paths.len());
        for file_path in file_paths {
            results.push(self.read_file(file_path).await?);
        }

        info!("Completed batch read of {} files", results.len());
        Ok(results)
    }
}

/// Convenience function for reading a single file with default configuration
pub async fn read_file_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = AsyncFileReader::new(ReaderConfig { fail_fast: true, ..Default::default() });
    let (content, _stats) = reader.read_file(file_path).await?;
    Ok(content)
}
