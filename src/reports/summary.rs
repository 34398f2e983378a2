//! Summary report generator for shell output.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::audit::AuditReport;
use crate::pipeline::ExtractedSbom;

/// Width of the horizontal rules
const RULE_WIDTH: usize = 60;
/// Width of the package column
const PACKAGE_COLUMN: usize = 40;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_extraction_report(&self, sboms: &[ExtractedSbom]) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        for (index, sbom) in sboms.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            let result = &sbom.result;
            lines.push(self.color(&sbom.source.display().to_string(), "bold"));
            lines.push(format!("{} {}", self.color("Format:", "cyan"), result.format));
            lines.push(format!(
                "{} {}",
                self.color("Operation System:", "cyan"),
                result.os
            ));
            lines.push(format!(
                "{} {}",
                self.color("Packages:", "cyan"),
                result.packages.len()
            ));
            lines.extend(result.packages.iter().map(|package| format!("  {package}")));
        }

        Ok(lines.join("\n"))
    }

    fn generate_audit_report(
        &self,
        sbom: &ExtractedSbom,
        audit: &AuditReport,
    ) -> Result<String, ReportError> {
        let mut lines = vec![format!("Operation System: {}", audit.os)];

        if audit.packages.is_empty() {
            lines.push(format!(
                "No supported packages found in {}, nothing to audit",
                sbom.source.display()
            ));
            return Ok(lines.join("\n"));
        }

        let found = format!("Found {} vulnerabilities", audit.vulnerability_count);
        lines.push(if audit.has_vulnerabilities() {
            self.color(&found, "red")
        } else {
            self.color(&found, "green")
        });

        let rule = "-".repeat(RULE_WIDTH);
        lines.push(rule.clone());
        lines.push(format!("{:<width$} CVEs", "Package", width = PACKAGE_COLUMN));
        lines.push(rule);
        for reason in &audit.reasons {
            lines.push(format!(
                "{:<width$} {}",
                reason.package,
                reason.cvelist.join(", "),
                width = PACKAGE_COLUMN
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
