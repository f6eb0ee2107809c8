use crate::error::TrackError;
use crate::utils::base_name;

/// Suffix identifying the compressed side of an input/output pair.
pub const COMPRESSED_SUFFIX: &str = ".gz";

/// Name and size of an input or output file taking part in a test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    pub path: String,
    pub name: String,
    pub size: u64,
}

impl FileStat {
    pub fn from_path(path: &str) -> Result<Self, TrackError> {
        let metadata = std::fs::metadata(path).map_err(|source| TrackError::FileError {
            path: path.to_string(),
            source,
        })?;

        Ok(FileStat {
            path: path.to_string(),
            name: base_name(path),
            size: metadata.len(),
        })
    }

    pub fn is_compressed(&self) -> bool {
        self.path.ends_with(COMPRESSED_SUFFIX)
    }
}

/// Compressed size as a percentage of the uncompressed size, formatted with
/// two decimals.
///
/// Returns `None` unless both files are non-empty and exactly one of them
/// carries [`COMPRESSED_SUFFIX`]; the compressed side is the numerator.
pub fn compression_ratio(input: &FileStat, output: &FileStat) -> Option<String> {
    if input.size == 0 || output.size == 0 {
        return None;
    }

    let (compressed, uncompressed) = match (input.is_compressed(), output.is_compressed()) {
        (false, true) => (output.size, input.size),
        (true, false) => (input.size, output.size),
        _ => return None,
    };

    let ratio = compressed as f64 / uncompressed as f64 * 100.0;
    Some(format!("{:.2}", ratio))
}
