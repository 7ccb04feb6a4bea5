use crate::args::DocumentSource;
use kpi_core::{AnalysisError, AnalysisResult};
use std::io::{self, Read};
use std::path::Path;

const TEXT_EXTENSIONS: [&str; 3] = ["txt", "text", "md"];

/// Reads a document's text, trimmed. Only plain UTF-8 text is accepted.
pub fn load_text(source: &DocumentSource) -> AnalysisResult<String> {
    let raw = match source {
        DocumentSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| AnalysisError::DocumentError(format!("Failed to read stdin: {}", e)))?;
            buf
        }
        DocumentSource::File(path) => read_file(path)?,
    };

    let text = raw.trim();
    if text.is_empty() {
        return Err(AnalysisError::InvalidData(
            "No readable text extracted from the file.".to_string(),
        ));
    }
    Ok(text.to_string())
}

fn read_file(path: &Path) -> AnalysisResult<String> {
    if !path.is_file() {
        return Err(AnalysisError::DocumentError(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AnalysisError::InvalidData(format!(
            "Unsupported file format: .{}",
            extension
        )));
    }

    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => {
            AnalysisError::InvalidData(format!("{} is not valid UTF-8 text", path.display()))
        }
        _ => AnalysisError::DocumentError(format!("Failed to read {}: {}", path.display(), e)),
    })
}
