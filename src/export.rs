use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::models::EmotionSample;

const HEADER: &str = "timestamp,date,emotion,confidence,notes";

/// Write a flat comma-delimited snapshot of the given samples into `dir`,
/// returning the path of the created file. Row order follows the input.
pub fn write_csv(samples: &[EmotionSample], dir: &Path) -> Result<PathBuf> {
    let filename = format!(
        "emotion_journal_export_{}.csv",
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(filename);

    let mut out = String::with_capacity(64 * (samples.len() + 1));
    out.push_str(HEADER);
    out.push('\n');

    for sample in samples {
        out.push_str(&sample.timestamp.to_rfc3339());
        out.push(',');
        out.push_str(&sample.date.to_string());
        out.push(',');
        out.push_str(sample.emotion.as_str());
        out.push(',');
        out.push_str(&format!("{:.3}", sample.confidence));
        out.push(',');
        if let Some(notes) = &sample.notes {
            out.push_str(&escape_field(notes));
        }
        out.push('\n');
    }

    fs::write(&path, out)
        .with_context(|| format!("failed to write export to {}", path.display()))?;

    Ok(path)
}

/// Quote a field when it contains a delimiter, quote or newline.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
