use crate::model::ExtractionSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Issue severity, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

/// The accessibility rules granska checks.
///
/// The string form of each variant is a contract with downstream grouping
/// and remediation tooling. Do not rename without migrating consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    #[serde(rename = "Missing Document Title")]
    MissingTitle,
    #[serde(rename = "Missing Author")]
    MissingAuthor,
    #[serde(rename = "Image Missing Alt Text")]
    ImageMissingAltText,
    #[serde(rename = "Potential Untagged Headings")]
    UntaggedHeadings,
    #[serde(rename = "Potential Reading Order Issue")]
    ReadingOrder,
    #[serde(rename = "Color Contrast Check Needed")]
    ColorContrast,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MissingTitle => "Missing Document Title",
            IssueKind::MissingAuthor => "Missing Author",
            IssueKind::ImageMissingAltText => "Image Missing Alt Text",
            IssueKind::UntaggedHeadings => "Potential Untagged Headings",
            IssueKind::ReadingOrder => "Potential Reading Order Issue",
            IssueKind::ColorContrast => "Color Contrast Check Needed",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accessibility finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "issue_type")]
    pub kind: IssueKind,
    pub severity: Severity,
    /// 1-based page the issue was found on; 0 for document-level issues.
    pub page: usize,
    pub description: String,
    /// WCAG success criterion the issue maps to, e.g. "2.4.2 Page Titled".
    pub wcag_criterion: String,
    /// Suggested fix for a human or the remediation step.
    pub recommendation: String,
    /// Position on the page, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Whether the remediation step can resolve this without human input.
    pub auto_fixable: bool,
}

/// Accumulated analysis result for one document.
///
/// Issues are appended in detection order. The severity counters only move
/// inside [`Report::add_issue`], so they always partition `issues`. The
/// type is deliberately not deserializable: a report is built by the
/// analyzer, never loaded.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    source: String,
    analyzed_at: String,
    total_pages: usize,
    total_words: usize,
    total_images: usize,
    issues: Vec<Issue>,
    critical_count: usize,
    high_count: usize,
    medium_count: usize,
    low_count: usize,
}

impl Report {
    /// Create an empty report carrying the document stats of `snapshot`.
    pub fn for_snapshot(snapshot: &ExtractionSnapshot) -> Self {
        Report {
            source: snapshot.source.clone(),
            analyzed_at: chrono::Utc::now().to_rfc3339(),
            total_pages: snapshot.num_pages,
            total_words: snapshot.total_words(),
            total_images: snapshot.total_images(),
            issues: Vec::new(),
            critical_count: 0,
            high_count: 0,
            medium_count: 0,
            low_count: 0,
        }
    }

    /// Append an issue and update the matching severity counter.
    pub fn add_issue(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Critical => self.critical_count += 1,
            Severity::High => self.high_count += 1,
            Severity::Medium => self.medium_count += 1,
            Severity::Low => self.low_count += 1,
        }
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn analyzed_at(&self) -> &str {
        &self.analyzed_at
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn total_images(&self) -> usize {
        self.total_images
    }

    pub fn critical_count(&self) -> usize {
        self.critical_count
    }

    pub fn high_count(&self) -> usize {
        self.high_count
    }

    pub fn medium_count(&self) -> usize {
        self.medium_count
    }

    pub fn low_count(&self) -> usize {
        self.low_count
    }

    /// Number of issues the remediation step could resolve automatically.
    pub fn auto_fixable_count(&self) -> usize {
        self.issues.iter().filter(|i| i.auto_fixable).count()
    }

    /// Render the textual summary: header block with document stats,
    /// severity tallies, then issues grouped by type (alphabetical), first
    /// three of each type shown and the rest elided.
    pub fn summary(&self) -> String {
        let rule = "=".repeat(80);
        let mut out = Vec::new();

        out.push(rule.clone());
        out.push("PDF Accessibility Analysis Report".to_string());
        out.push(rule.clone());
        out.push(format!("\nFile: {}", self.source));
        out.push(format!("Date: {}", self.analyzed_at));
        out.push(format!("Pages: {}", self.total_pages));
        out.push(format!("Words: {}", self.total_words));
        out.push(format!("Images: {}", self.total_images));
        out.push(format!("\nTotal Issues Found: {}", self.issues.len()));
        out.push(format!("  Critical: {}", self.critical_count));
        out.push(format!("  High: {}", self.high_count));
        out.push(format!("  Medium: {}", self.medium_count));
        out.push(format!("  Low: {}", self.low_count));
        out.push(format!("\n{rule}"));

        if !self.issues.is_empty() {
            out.push("\nIssues by Type:".to_string());
            out.push("-".repeat(80));

            // BTreeMap keyed on the contract string gives the alphabetical
            // group order directly.
            let mut by_type: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
            for issue in &self.issues {
                by_type.entry(issue.kind.as_str()).or_default().push(issue);
            }

            for (issue_type, issues) in &by_type {
                out.push(format!("\n{} ({} issues):", issue_type, issues.len()));
                for issue in issues.iter().take(3) {
                    out.push(format!("  Page {}: {}", issue.page, issue.description));
                    out.push(format!("    WCAG: {}", issue.wcag_criterion));
                    out.push(format!("    Fix: {}", issue.recommendation));
                }
                if issues.len() > 3 {
                    out.push(format!("  ... and {} more", issues.len() - 3));
                }
            }
        }

        out.join("\n")
    }
}
