//! Writing reports to their download file.

use std::path::{Path, PathBuf};

use lore_core::Topic;
use thiserror::Error;

use crate::assembler::Report;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Download file name: spaces (and path separators) become underscores.
///
/// `Neural Networks` -> `Neural_Networks_learning_report.txt`.
#[must_use]
pub fn report_file_name(topic: &Topic) -> String {
    let stem: String = topic
        .as_str()
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("{stem}_learning_report.txt")
}

/// Write `report` into `dir` under [`report_file_name`], creating `dir` if
/// needed. The file holds exactly the report text.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the directory or file cannot be written.
pub fn export_report(dir: &Path, topic: &Topic, report: &Report) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(report_file_name(topic));
    std::fs::write(&path, report.as_str()).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "report saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Osmosis", "Osmosis_learning_report.txt")]
    #[case("Neural Networks", "Neural_Networks_learning_report.txt")]
    #[case("TCP/IP basics", "TCP_IP_basics_learning_report.txt")]
    fn file_name_replaces_spaces(#[case] topic: &str, #[case] expected: &str) {
        assert_eq!(report_file_name(&Topic::new(topic).unwrap()), expected);
    }

    #[test]
    fn write_failure_names_path_once() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let topic = Topic::new("Osmosis").unwrap();
        let report = crate::ReportAssembler::default().assemble(
            &topic,
            &lore_core::LearnerProfile::default(),
            &lore_core::ResearchBundle {
                web: lore_core::SourceResult::unlinked("web"),
                video: lore_core::SourceResult::unlinked("video"),
                academic: lore_core::SourceResult::unlinked("academic"),
            },
            chrono::NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
        );
        let err = export_report(&blocker.join("sub"), &topic, &report).unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("failed to write report to "));
        assert!(message.ends_with("sub"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
