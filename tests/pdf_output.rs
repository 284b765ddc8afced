//! Rendering reports to actual PDF files.

use pdf_layout::{
    compose_report, Canvas, Info, LayoutConfig, LayoutError, PdfCanvas, Pt, Record, Report,
    ReportContent, TextMeasure,
};
use std::path::Path;

const SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A config using a font installed on the machine, if there is one
fn system_font_config() -> Option<LayoutConfig> {
    if !Path::new(SYSTEM_FONT).exists() {
        eprintln!("{SYSTEM_FONT} not found, skipping");
        return None;
    }
    Some(
        LayoutConfig::new()
            .font_family("DejaVu Sans")
            .font_path(SYSTEM_FONT)
            .clone(),
    )
}

#[test]
fn missing_font_path_is_a_construction_error() {
    let err = PdfCanvas::from_config(&LayoutConfig::default()).err().unwrap();
    assert!(matches!(err, LayoutError::Construction(_)));

    let config = LayoutConfig::new().font_path("/nonexistent/font.ttf").clone();
    let err = PdfCanvas::from_config(&config).err().unwrap();
    assert!(matches!(err, LayoutError::Construction(_)));
}

#[test]
fn unparseable_font_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ttf");
    std::fs::write(&path, b"not a font at all").unwrap();

    let config = LayoutConfig::new().font_path(&path).clone();
    let err = PdfCanvas::from_config(&config).err().unwrap();
    assert!(matches!(err, LayoutError::FontParsing(_)));
}

#[test]
fn journal_report_renders_to_pdf() {
    init_logging();
    let Some(config) = system_font_config() else {
        return;
    };

    let mut canvas = PdfCanvas::from_config(&config).unwrap();
    let mut info = Info::new();
    info.title("Audit journal").author("pdf-layout tests");
    canvas.set_info(info);

    let rows: Vec<Vec<String>> = (0..120)
        .map(|i| {
            vec![
                i.to_string(),
                "7".to_string(),
                format!("{}", 1000 + i),
                "2024-03-01 12:00:00".to_string(),
                "ok".to_string(),
                lipsum::lipsum_words(4),
                "report.pdf".to_string(),
                "hp-2".to_string(),
                "jürgen".to_string(),
            ]
        })
        .collect();
    let content = ReportContent::journal(
        vec![
            Record::new("printer", "hp-2"),
            Record::new("period", "March 2024"),
        ],
        rows,
    )
    .title("Audit journal")
    .table_font_size(Pt(6.0));

    let mut report = Report::new(canvas, config).unwrap();
    compose_report(&mut report, &content).unwrap();
    let pages = report.page_count();
    assert!(pages > 1);
    assert_eq!(report.canvas().document().page_count(), pages);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.pdf");
    report.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Identity-H"));
    assert!(text.contains("/ToUnicode"));
    assert!(text.contains("/FontFile2"));
    assert!(text.contains("/BaseFont /DejaVuSans"));
    assert!(text.contains(&format!("/Count {pages}")));
    assert!(text.contains("(Audit journal)"));
}

#[test]
fn embedded_font_keeps_its_own_family_name() {
    if !Path::new(SYSTEM_FONT).exists() {
        return;
    }
    // font_family is left at its Times-Roman default
    let config = LayoutConfig::new().font_path(SYSTEM_FONT).clone();
    let mut report = Report::new(PdfCanvas::from_config(&config).unwrap(), config).unwrap();
    report.add_paragraph("hello").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.pdf");
    report.save(&path).unwrap();

    let text = String::from_utf8_lossy(&std::fs::read(&path).unwrap()).into_owned();
    assert!(text.contains("/BaseFont /DejaVuSans"));
    assert!(!text.contains("Times-Roman"));
}

#[test]
fn real_font_metrics_are_proportional() {
    let Some(config) = system_font_config() else {
        return;
    };

    let canvas = PdfCanvas::from_config(&config).unwrap();
    let narrow = canvas.text_width("iiii", Pt(12.0));
    let wide = canvas.text_width("WWWW", Pt(12.0));
    assert!(narrow > Pt(0.0));
    assert!(wide > narrow);
    assert_eq!(canvas.text_width("WWWW", Pt(24.0)), wide * 2.0);
    assert_eq!(canvas.text_width("", Pt(12.0)), Pt(0.0));
}

#[test]
fn text_outside_a_region_is_still_drawn() {
    let Some(config) = system_font_config() else {
        return;
    };

    let mut canvas = PdfCanvas::from_config(&config).unwrap();
    canvas.create_page(config.page_size, config.orientation).unwrap();
    canvas.draw_text_at(Pt(20.0), Pt(20.0), "stray");
    canvas.begin_text();
    canvas.draw_text_at(Pt(20.0), Pt(40.0), "one");
    canvas.draw_text_at(Pt(20.0), Pt(60.0), "two");
    canvas.end_text();

    let document = canvas.document();
    let page = document.pages.get(document.page_order[0]).unwrap();
    assert_eq!(page.contents.len(), 2);
}
