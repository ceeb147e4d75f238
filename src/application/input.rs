use std::io::Read;
use std::path::Path;
use std::string::FromUtf8Error;

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;

/// Reads the whole tree diagram from `path`, or from standard input when no path is given.
pub async fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    let bytes = match path {
        Some(path) => {
            debug!("Reading tree from {}", path.best_effort_path_display());
            fs::read(path).await.context(ReadFileSnafu {
                file_path: path.best_effort_path_display(),
            })?
        }
        None => {
            debug!("Reading tree from standard input");
            // Blocking is fine here: nothing else is scheduled on the runtime until
            // the whole diagram has been read.
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context(ReadStdinSnafu)?;
            bytes
        }
    };

    debug!("Read {} bytes of input", bytes.len());
    String::from_utf8(bytes).context(NotUtf8Snafu)
}

#[derive(Debug, Snafu)]
pub enum InputError {
    #[snafu(display("Failed to read the tree file: {}", file_path))]
    ReadFileError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read the tree from standard input"))]
    ReadStdinError { source: std::io::Error },
    #[snafu(display("Tree input is not valid UTF-8"))]
    NotUtf8 { source: FromUtf8Error },
}
