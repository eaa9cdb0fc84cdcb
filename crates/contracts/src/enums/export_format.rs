use serde::{Deserialize, Serialize};

/// Server-rendered export formats of a single artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// Value of the `format` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Xlsx => "EXCEL",
            ExportFormat::Csv => "CSV",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        self.code()
    }

    /// Button order in the list row
    pub fn all() -> Vec<ExportFormat> {
        vec![ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Pdf]
    }

    /// Banner shown once the download has been triggered
    pub fn started_message(&self, full_artifact_no: &str) -> String {
        format!("Export başlatıldı: {}.{}", full_artifact_no, self.file_extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_banner() {
        let labels: Vec<_> = ExportFormat::all().iter().map(|f| f.button_label()).collect();
        assert_eq!(labels, vec!["CSV", "EXCEL", "PDF"]);
        assert_eq!(ExportFormat::Xlsx.started_message("AAB0012"), "Export başlatıldı: AAB0012.xlsx");
    }
}
