//! CLI output formatting.
//!
//! Each piece of console output has a `format_*` function that returns
//! `Vec<String>` and does no I/O, plus a `print_*` wrapper that writes the
//! lines to stdout. Errors are the exception: `main` sends those to stderr.
//!
//! ```text
//! iOS App Icon Generator
//! ==================================================
//!
//! Input:  icon.png
//! Output: ios/MassageChairControl/Images.xcassets/AppIcon.appiconset
//!
//! Opened source: 1024x1024
//!   ok   icon-20x20@2x.png (40x40)
//!   ...
//!   FAIL icon-1024.png: IO error: permission denied
//!
//! Generated 8/9 icons
//! ```

use crate::generate::{GenerateEvent, GenerateReport};
use crate::icons::RECOMMENDED_SOURCE_SIZE;
use crate::imaging::Dimensions;
use std::path::Path;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

/// Title banner plus the resolved input and output paths.
pub fn format_header(source: &Path, output_dir: &Path) -> Vec<String> {
    vec![
        "iOS App Icon Generator".to_string(),
        rule(),
        String::new(),
        format!("Input:  {}", source.display()),
        format!("Output: {}", output_dir.display()),
        String::new(),
    ]
}

pub fn print_header(source: &Path, output_dir: &Path) {
    print_lines(format_header(source, output_dir));
}

/// Advisory notes about the source. Never fatal.
fn source_notes(dims: Dimensions) -> Vec<String> {
    let mut notes = Vec::new();
    if !dims.is_square() {
        notes.push("  note: source is not square; icons will be stretched to fit".to_string());
    }
    if dims.width.min(dims.height) < RECOMMENDED_SOURCE_SIZE {
        notes.push(format!(
            "  note: source is smaller than {0}x{0}; the App Store icon will be upscaled",
            RECOMMENDED_SOURCE_SIZE
        ));
    }
    notes
}

pub fn format_generate_event(event: &GenerateEvent) -> Vec<String> {
    match event {
        GenerateEvent::SourceOpened { dimensions } => {
            let mut lines = vec![format!(
                "Opened source: {}x{}",
                dimensions.width, dimensions.height
            )];
            lines.extend(source_notes(*dimensions));
            lines
        }
        GenerateEvent::IconWritten { filename, size } => {
            vec![format!("  ok   {filename} ({size}x{size})")]
        }
        GenerateEvent::IconFailed { filename, error } => {
            vec![format!("  FAIL {filename}: {error}")]
        }
    }
}

pub fn print_generate_event(event: &GenerateEvent) {
    print_lines(format_generate_event(event));
}

/// The success/failure tally.
pub fn format_report(report: &GenerateReport) -> Vec<String> {
    vec![
        String::new(),
        format!("Generated {}/{} icons", report.succeeded(), report.total()),
    ]
}

pub fn print_report(report: &GenerateReport) {
    print_lines(format_report(report));
}

pub fn format_manifest_written() -> Vec<String> {
    vec!["Updated Contents.json".to_string()]
}

pub fn print_manifest_written() {
    print_lines(format_manifest_written());
}

/// Closing banner with what to do in Xcode.
pub fn format_success() -> Vec<String> {
    vec![
        rule(),
        "Done. App icons have been generated.".to_string(),
        String::new(),
        "Next steps:".to_string(),
        "  1. Open Xcode".to_string(),
        "  2. Rebuild the app".to_string(),
        "  3. The new icon appears on the Home screen".to_string(),
        rule(),
    ]
}

pub fn print_success() {
    print_lines(format_success());
}

/// Extra guidance appended to the usage message when no source is given.
pub fn usage_tips() -> &'static str {
    "\
Examples:
  generate-icons icon.png
  generate-icons ~/Desktop/app-icon.png

Tips:
  - The source icon should be a 1024x1024 PNG
  - Use a transparent background
  - Do not round the corners (iOS applies the mask)"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::IconFailure;

    fn report(written: usize, failed: &[&str]) -> GenerateReport {
        GenerateReport {
            source: Dimensions {
                width: 1024,
                height: 1024,
            },
            written: (0..written).map(|i| format!("icon-{i}.png")).collect(),
            failed: failed
                .iter()
                .map(|f| IconFailure {
                    filename: f.to_string(),
                    error: "boom".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn header_shows_paths() {
        let lines = format_header(Path::new("icon.png"), Path::new("out/AppIcon.appiconset"));
        assert_eq!(lines[0], "iOS App Icon Generator");
        assert!(lines.contains(&"Input:  icon.png".to_string()));
        assert!(lines.contains(&"Output: out/AppIcon.appiconset".to_string()));
    }

    #[test]
    fn opened_square_full_size_source_has_no_notes() {
        let lines = format_generate_event(&GenerateEvent::SourceOpened {
            dimensions: Dimensions {
                width: 1024,
                height: 1024,
            },
        });
        assert_eq!(lines, vec!["Opened source: 1024x1024"]);
    }

    #[test]
    fn opened_small_non_square_source_gets_both_notes() {
        let lines = format_generate_event(&GenerateEvent::SourceOpened {
            dimensions: Dimensions {
                width: 512,
                height: 256,
            },
        });
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("not square"));
        assert!(lines[2].contains("smaller than 1024x1024"));
    }

    #[test]
    fn icon_lines() {
        let ok = format_generate_event(&GenerateEvent::IconWritten {
            filename: "icon-1024.png".into(),
            size: 1024,
        });
        assert_eq!(ok, vec!["  ok   icon-1024.png (1024x1024)"]);

        let fail = format_generate_event(&GenerateEvent::IconFailed {
            filename: "icon-20x20@2x.png".into(),
            error: "IO error: denied".into(),
        });
        assert_eq!(fail, vec!["  FAIL icon-20x20@2x.png: IO error: denied"]);
    }

    #[test]
    fn report_tally() {
        assert_eq!(format_report(&report(9, &[]))[1], "Generated 9/9 icons");
        assert_eq!(
            format_report(&report(8, &["icon-1024.png"]))[1],
            "Generated 8/9 icons"
        );
    }

    #[test]
    fn success_banner_lists_next_steps() {
        let lines = format_success();
        assert!(lines.iter().any(|l| l.contains("Open Xcode")));
        assert_eq!(lines.first(), lines.last());
    }
}
