use crate::analyze::report::{Issue, IssueKind, Report, Severity};
use crate::heuristics::schema::HeuristicsDef;
use crate::model::{ExtractionSnapshot, ImageSpan};

/// Run every checker against a snapshot and merge the findings into one
/// report.
///
/// The checker order (metadata, images, headings, reading order, contrast)
/// fixes the issue order inside the report; the checkers themselves are
/// independent and never read each other's output.
pub fn analyze(snapshot: &ExtractionSnapshot, heuristics: &HeuristicsDef) -> Report {
    let mut report = Report::for_snapshot(snapshot);

    let findings = check_metadata(snapshot)
        .into_iter()
        .chain(check_images(snapshot, heuristics))
        .chain(check_headings(snapshot, heuristics))
        .chain(check_reading_order(snapshot, heuristics))
        .chain(check_color_contrast(snapshot));

    for issue in findings {
        report.add_issue(issue);
    }

    report
}

/// Document metadata checks (WCAG 2.4.2).
pub fn check_metadata(snapshot: &ExtractionSnapshot) -> Vec<Issue> {
    let mut issues = Vec::new();

    if snapshot.title.trim().is_empty() {
        issues.push(Issue {
            kind: IssueKind::MissingTitle,
            severity: Severity::High,
            page: 0,
            description: "PDF has no title in metadata".into(),
            wcag_criterion: "2.4.2 Page Titled".into(),
            recommendation: "Add a descriptive title to the PDF metadata".into(),
            location: None,
            auto_fixable: true,
        });
    }

    if snapshot.author.is_empty() {
        issues.push(Issue {
            kind: IssueKind::MissingAuthor,
            severity: Severity::Low,
            page: 0,
            description: "PDF has no author in metadata".into(),
            wcag_criterion: "Best Practice".into(),
            recommendation: "Add author information to PDF metadata".into(),
            location: None,
            auto_fixable: false,
        });
    }

    issues
}

/// True if the image is too small or too large to carry content.
///
/// A best-effort proxy: tiny images are bullets and rules, oversized ones
/// are page backgrounds and scan borders. Not a guarantee of true
/// decorativeness.
fn is_likely_decorative(image: &ImageSpan, heuristics: &HeuristicsDef) -> bool {
    let area = u64::from(image.width) * u64::from(image.height);
    image.width < heuristics.decorative_min_dimension
        || image.height < heuristics.decorative_min_dimension
        || area < heuristics.decorative_min_area
        || image.width > heuristics.decorative_max_dimension
        || image.height > heuristics.decorative_max_dimension
}

/// Alt-text checks for content images (WCAG 1.1.1).
pub fn check_images(snapshot: &ExtractionSnapshot, heuristics: &HeuristicsDef) -> Vec<Issue> {
    let mut issues = Vec::new();

    for page in &snapshot.pages {
        for image in &page.images {
            if is_likely_decorative(image, heuristics) {
                continue;
            }

            let has_text = image
                .ocr_text
                .as_deref()
                .map(|t| !t.is_empty())
                .unwrap_or(false);
            if has_text {
                continue;
            }

            issues.push(Issue {
                kind: IssueKind::ImageMissingAltText,
                severity: Severity::Critical,
                page: page.page_number,
                description: format!(
                    "Image '{}' ({}x{}) needs alt text",
                    image.name, image.width, image.height
                ),
                wcag_criterion: "1.1.1 Non-text Content".into(),
                recommendation: "Add descriptive alt text or mark as decorative".into(),
                location: Some(format!(
                    "({:.0}, {:.0})",
                    image.bbox.x_min, image.bbox.y_min
                )),
                auto_fixable: true,
            });
        }
    }

    issues
}

/// Heading structure check (WCAG 1.3.1).
///
/// Large-font words are heading candidates; one aggregate issue covers all
/// of them, anchored to the page of the first candidate in document order.
pub fn check_headings(snapshot: &ExtractionSnapshot, heuristics: &HeuristicsDef) -> Vec<Issue> {
    let mut first_page = None;
    let mut candidate_count = 0usize;

    for page in &snapshot.pages {
        for word in &page.words {
            if word.font_size > heuristics.heading_font_size {
                candidate_count += 1;
                if first_page.is_none() {
                    first_page = Some(page.page_number);
                }
            }
        }
    }

    match first_page {
        None => Vec::new(),
        Some(page) => vec![Issue {
            kind: IssueKind::UntaggedHeadings,
            severity: Severity::High,
            page,
            description: format!(
                "Found {} potential headings with large font sizes",
                candidate_count
            ),
            wcag_criterion: "1.3.1 Info and Relationships".into(),
            recommendation: "Tag text with proper heading levels (H1, H2, etc.)".into(),
            location: None,
            auto_fixable: true,
        }],
    }
}

/// Reading-order risk check (WCAG 1.3.2).
///
/// A dense page whose words spread across most of its width suggests a
/// multi-column layout, which screen readers may traverse in the wrong
/// order. Horizontal spread is a weak proxy; it does no column detection.
pub fn check_reading_order(snapshot: &ExtractionSnapshot, heuristics: &HeuristicsDef) -> Vec<Issue> {
    let mut issues = Vec::new();

    for page in &snapshot.pages {
        if page.words.len() <= heuristics.reading_order_min_words {
            continue;
        }

        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        for word in &page.words {
            min_x = min_x.min(word.bbox.x_min);
            max_x = max_x.max(word.bbox.x_min);
        }

        if max_x - min_x > page.width * heuristics.reading_order_width_ratio {
            issues.push(Issue {
                kind: IssueKind::ReadingOrder,
                severity: Severity::Medium,
                page: page.page_number,
                description: "Page may have complex layout affecting reading order".into(),
                wcag_criterion: "1.3.2 Meaningful Sequence".into(),
                recommendation: "Verify and optimize reading order for screen readers".into(),
                location: None,
                auto_fixable: true,
            });
        }
    }

    issues
}

/// Standing contrast reminder (WCAG 1.4.3).
///
/// Extraction carries no color information, so any document with text gets
/// a single document-level reminder instead of a real contrast check.
pub fn check_color_contrast(snapshot: &ExtractionSnapshot) -> Vec<Issue> {
    if snapshot.total_words() == 0 {
        return Vec::new();
    }

    vec![Issue {
        kind: IssueKind::ColorContrast,
        severity: Severity::Medium,
        page: 0,
        description: "Manual verification of color contrast required".into(),
        wcag_criterion: "1.4.3 Contrast (Minimum)".into(),
        recommendation: "Ensure text has 4.5:1 contrast ratio (3:1 for large text)".into(),
        location: None,
        auto_fixable: false,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, PageSnapshot, WordSpan};

    fn word(text: &str, x_min: f32, font_size: f32) -> WordSpan {
        WordSpan {
            text: text.into(),
            bbox: BBox::new(x_min, 700.0, x_min + 40.0, 712.0),
            font_name: String::new(),
            font_size,
        }
    }

    fn image(name: &str, width: u32, height: u32, ocr_text: Option<&str>) -> ImageSpan {
        ImageSpan {
            name: name.into(),
            bbox: BBox::new(100.0, 200.0, 300.0, 400.0),
            width,
            height,
            ocr_text: ocr_text.map(|t| t.to_string()),
        }
    }

    fn page(page_number: usize, words: Vec<WordSpan>, images: Vec<ImageSpan>) -> PageSnapshot {
        PageSnapshot {
            page_number,
            width: 600.0,
            height: 850.0,
            words,
            images,
        }
    }

    fn snapshot(title: &str, author: &str, pages: Vec<PageSnapshot>) -> ExtractionSnapshot {
        ExtractionSnapshot {
            title: title.into(),
            author: author.into(),
            num_pages: pages.len(),
            pages,
            ..Default::default()
        }
    }

    fn defaults() -> HeuristicsDef {
        HeuristicsDef::default()
    }

    // -- metadata ----------------------------------------------------------

    #[test]
    fn test_empty_title_flagged() {
        let issues = check_metadata(&snapshot("", "Alva", vec![]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingTitle);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].page, 0);
        assert!(issues[0].auto_fixable);
    }

    #[test]
    fn test_whitespace_title_flagged() {
        let issues = check_metadata(&snapshot("   \t", "Alva", vec![]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingTitle);
    }

    #[test]
    fn test_present_title_not_flagged() {
        let issues = check_metadata(&snapshot("Annual Report", "Alva", vec![]));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_missing_author_is_low_and_not_fixable() {
        let issues = check_metadata(&snapshot("Annual Report", "", vec![]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingAuthor);
        assert_eq!(issues[0].severity, Severity::Low);
        assert!(!issues[0].auto_fixable);
    }

    // -- images ------------------------------------------------------------

    #[test]
    fn test_tiny_image_skipped_regardless_of_ocr() {
        let s = snapshot(
            "t",
            "a",
            vec![page(1, vec![], vec![image("page1_img0", 10, 10, None)])],
        );
        assert!(check_images(&s, &defaults()).is_empty());
    }

    #[test]
    fn test_oversized_image_skipped() {
        let s = snapshot(
            "t",
            "a",
            vec![page(1, vec![], vec![image("page1_img0", 1600, 900, None)])],
        );
        assert!(check_images(&s, &defaults()).is_empty());
    }

    #[test]
    fn test_content_image_without_ocr_flagged() {
        let s = snapshot(
            "t",
            "a",
            vec![page(1, vec![], vec![image("page1_img0", 100, 100, None)])],
        );
        let issues = check_images(&s, &defaults());
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.kind, IssueKind::ImageMissingAltText);
        assert_eq!(issue.severity, Severity::Critical);
        assert_eq!(issue.page, 1);
        assert!(issue.description.contains("page1_img0"));
        assert!(issue.description.contains("100x100"));
        assert_eq!(issue.location.as_deref(), Some("(100, 200)"));
    }

    #[test]
    fn test_location_is_rounded_top_left() {
        let mut img = image("page1_img0", 100, 100, None);
        img.bbox = BBox::new(41.7, 99.2, 141.7, 199.2);
        let s = snapshot("t", "a", vec![page(1, vec![], vec![img])]);
        let issues = check_images(&s, &defaults());
        assert_eq!(issues[0].location.as_deref(), Some("(42, 99)"));
    }

    #[test]
    fn test_image_with_ocr_text_not_flagged() {
        let s = snapshot(
            "t",
            "a",
            vec![page(
                1,
                vec![],
                vec![image("page1_img0", 100, 100, Some("Figure 3: flow"))],
            )],
        );
        assert!(check_images(&s, &defaults()).is_empty());
    }

    #[test]
    fn test_empty_ocr_text_still_flagged() {
        let s = snapshot(
            "t",
            "a",
            vec![page(1, vec![], vec![image("page1_img0", 100, 100, Some(""))])],
        );
        assert_eq!(check_images(&s, &defaults()).len(), 1);
    }

    #[test]
    fn test_area_clause_with_custom_heuristics() {
        // Dimensions clear the per-axis minimum but the area does not.
        let mut h = defaults();
        h.decorative_min_dimension = 10;
        let s = snapshot(
            "t",
            "a",
            vec![page(1, vec![], vec![image("page1_img0", 15, 15, None)])],
        );
        assert!(check_images(&s, &h).is_empty());
    }

    #[test]
    fn test_one_issue_per_content_image() {
        let s = snapshot(
            "t",
            "a",
            vec![
                page(
                    1,
                    vec![],
                    vec![
                        image("page1_img0", 100, 100, None),
                        image("page1_img1", 10, 10, None),
                    ],
                ),
                page(2, vec![], vec![image("page2_img0", 300, 200, None)]),
            ],
        );
        let issues = check_images(&s, &defaults());
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].page, 1);
        assert_eq!(issues[1].page, 2);
    }

    // -- headings ----------------------------------------------------------

    #[test]
    fn test_headings_aggregate_to_single_issue() {
        let s = snapshot(
            "t",
            "a",
            vec![
                page(1, vec![word("Intro", 50.0, 11.0)], vec![]),
                page(2, vec![word("Kapitel", 50.0, 24.0)], vec![]),
                page(3, vec![word("Avsnitt", 50.0, 18.0)], vec![]),
            ],
        );
        let issues = check_headings(&s, &defaults());
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.kind, IssueKind::UntaggedHeadings);
        assert_eq!(issue.severity, Severity::High);
        // Anchored to the first candidate's page, not the first page.
        assert_eq!(issue.page, 2);
        assert!(issue.description.contains("2 potential headings"));
    }

    #[test]
    fn test_font_size_at_threshold_is_not_a_heading() {
        let s = snapshot("t", "a", vec![page(1, vec![word("Body", 50.0, 16.0)], vec![])]);
        assert!(check_headings(&s, &defaults()).is_empty());
    }

    #[test]
    fn test_custom_heading_threshold() {
        let mut h = defaults();
        h.heading_font_size = 12.0;
        let s = snapshot("t", "a", vec![page(1, vec![word("Body", 50.0, 13.0)], vec![])]);
        assert_eq!(check_headings(&s, &h).len(), 1);
    }

    // -- reading order -----------------------------------------------------

    fn spread_page(page_number: usize, n: usize, x_span: f32) -> PageSnapshot {
        // n words with x_min evenly spread across [0, x_span].
        let words = (0..n)
            .map(|i| word("w", x_span * i as f32 / (n - 1) as f32, 11.0))
            .collect();
        page(page_number, words, vec![])
    }

    #[test]
    fn test_wide_dense_page_flagged_once() {
        // 60 words spread over 80% of a 600-unit page.
        let s = snapshot("t", "a", vec![spread_page(1, 60, 480.0)]);
        let issues = check_reading_order(&s, &defaults());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::ReadingOrder);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].page, 1);
    }

    #[test]
    fn test_sparse_page_below_word_threshold_not_flagged() {
        // Same spread, only 40 words.
        let s = snapshot("t", "a", vec![spread_page(1, 40, 480.0)]);
        assert!(check_reading_order(&s, &defaults()).is_empty());
    }

    #[test]
    fn test_narrow_dense_page_not_flagged() {
        // 60 words confined to 50% of the width.
        let s = snapshot("t", "a", vec![spread_page(1, 60, 300.0)]);
        assert!(check_reading_order(&s, &defaults()).is_empty());
    }

    #[test]
    fn test_each_qualifying_page_flagged_separately() {
        let s = snapshot(
            "t",
            "a",
            vec![spread_page(1, 60, 480.0), spread_page(3, 80, 500.0)],
        );
        let issues = check_reading_order(&s, &defaults());
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].page, 1);
        assert_eq!(issues[1].page, 3);
    }

    // -- contrast ----------------------------------------------------------

    #[test]
    fn test_no_words_no_contrast_reminder() {
        let s = snapshot("t", "a", vec![page(1, vec![], vec![])]);
        assert!(check_color_contrast(&s).is_empty());
    }

    #[test]
    fn test_any_words_one_contrast_reminder() {
        let s = snapshot(
            "t",
            "a",
            vec![
                page(1, vec![word("hej", 50.0, 11.0)], vec![]),
                page(2, vec![word("då", 50.0, 11.0)], vec![]),
            ],
        );
        let issues = check_color_contrast(&s);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].page, 0);
        assert!(!issues[0].auto_fixable);
    }

    // -- full pass ---------------------------------------------------------

    #[test]
    fn test_analyze_synthetic_document() {
        // Page 1: one content image without OCR, one heading-sized word.
        // Page 2: 60 words spread across 80% of the width.
        let s = snapshot(
            "",
            "",
            vec![
                page(
                    1,
                    vec![word("Rubrik", 50.0, 20.0)],
                    vec![image("page1_img0", 200, 200, None)],
                ),
                spread_page(2, 60, 480.0),
            ],
        );

        let report = analyze(&s, &defaults());

        assert_eq!(report.issues().len(), 6);
        assert_eq!(report.critical_count(), 1);
        assert_eq!(report.high_count(), 2);
        assert_eq!(report.medium_count(), 2);
        assert_eq!(report.low_count(), 1);

        // Checker order fixes issue order.
        let kinds: Vec<IssueKind> = report.issues().iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::MissingTitle,
                IssueKind::MissingAuthor,
                IssueKind::ImageMissingAltText,
                IssueKind::UntaggedHeadings,
                IssueKind::ReadingOrder,
                IssueKind::ColorContrast,
            ]
        );
    }

    #[test]
    fn test_analyze_clean_document_only_contrast_reminder() {
        let s = snapshot(
            "Tillgänglig rapport",
            "Alva Lindqvist",
            vec![page(1, vec![word("Brödtext", 50.0, 11.0)], vec![])],
        );
        let report = analyze(&s, &defaults());
        assert_eq!(report.issues().len(), 1);
        assert_eq!(report.issues()[0].kind, IssueKind::ColorContrast);
    }

    #[test]
    fn test_analyze_document_without_content_has_no_issues() {
        let s = snapshot("Titel", "Alva", vec![]);
        let report = analyze(&s, &defaults());
        assert!(report.issues().is_empty());
    }
}
