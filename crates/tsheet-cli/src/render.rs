use colored::{ColoredString, Colorize};
use tsheet_diff::{HighlightSegment, SegmentKind};
use tsheet_protocol::{ComparisonReport, DiffEntry};
use tsheet_types::{FieldStatus, StatusCounts};

const EMPTY_CELL: &str = "—";

/// Render a report as an aligned table followed by a summary line.
pub fn render_table(report: &ComparisonReport, only_differences: bool) -> String {
    let rows: Vec<(&str, &DiffEntry)> = report
        .differences
        .iter()
        .map(|(field, entry)| (field.as_str(), entry))
        .filter(|(_, entry)| !only_differences || entry.status.is_difference())
        .collect();

    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("No fields to show.\n");
    } else {
        let field_w = column_width("FIELD", rows.iter().map(|(f, _)| *f));
        let ideal_w = column_width("IDEAL", rows.iter().map(|(_, e)| cell(&e.ideal)));
        let input_w = column_width("INPUT", rows.iter().map(|(_, e)| cell(&e.input)));

        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            pad("FIELD", field_w).as_str().bold(),
            pad("IDEAL", ideal_w).as_str().bold(),
            pad("INPUT", input_w).as_str().bold(),
            "STATUS".bold()
        ));
        for (field, entry) in &rows {
            out.push_str(&format!(
                "{}  {}  {}  {}\n",
                pad(field, field_w),
                pad(cell(&entry.ideal), ideal_w),
                pad(cell(&entry.input), input_w),
                paint_status(entry.status)
            ));
            if let Some(segments) = &entry.highlights {
                out.push_str(&format!("  {}\n", render_segments(segments)));
            }
        }
    }
    out.push_str(&summary_line(&report.summary));
    out.push('\n');
    out
}

fn cell(value: &Option<String>) -> &str {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => EMPTY_CELL,
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(len)))
}

fn paint_status(status: FieldStatus) -> ColoredString {
    let label = status.as_str();
    match status {
        FieldStatus::Same => label.green(),
        FieldStatus::Changed => label.red().bold(),
        FieldStatus::MissingInInput => label.yellow(),
        FieldStatus::ExtraInInput => label.blue(),
        FieldStatus::NotFoundInBoth => label.dimmed(),
    }
}

fn render_segments(segments: &[HighlightSegment]) -> String {
    segments
        .iter()
        .map(|s| match s.kind {
            SegmentKind::Equal => s.text.clone(),
            SegmentKind::Removed => format!("[-{}-]", s.text).as_str().red().to_string(),
            SegmentKind::Added => format!("{{+{}+}}", s.text).as_str().green().to_string(),
        })
        .collect()
}

fn summary_line(counts: &StatusCounts) -> String {
    format!(
        concat!(
            "{} fields: {} same, {} changed, ",
            "{} missing in input, {} extra in input, {} not found in both"
        ),
        counts.total,
        counts.same,
        counts.changed,
        counts.missing_in_input,
        counts.extra_in_input,
        counts.not_found_in_both
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsheet_diff::{compare, NormalizationPolicy};
    use tsheet_types::FieldSet;

    fn report() -> ComparisonReport {
        let ideal = FieldSet::from_pairs([
            ("company", Some("Acme")),
            ("valuation", Some("$5M")),
            ("board_seats", Some("2")),
        ])
        .unwrap();
        let input = FieldSet::from_pairs([
            ("company", Some("Acme")),
            ("valuation", Some("$6M")),
            ("investor", Some("XYZ")),
        ])
        .unwrap();
        let result = compare(Some(&ideal), Some(&input)).unwrap();
        ComparisonReport::new(ideal, input, result)
    }

    #[test]
    fn table_lists_every_field_in_order() {
        colored::control::set_override(false);
        let text = render_table(&report(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("FIELD"));
        assert!(lines[1].starts_with("board_seats"));
        assert!(lines[1].contains("missing_in_input"));
        assert!(lines[1].contains(EMPTY_CELL));
        assert!(lines[2].starts_with("company"));
        assert!(lines[3].starts_with("investor"));
        assert!(lines[4].starts_with("valuation"));
        assert_eq!(
            lines[5],
            "4 fields: 1 same, 1 changed, 1 missing in input, 1 extra in input, 0 not found in both"
        );
    }

    #[test]
    fn only_differences_hides_same() {
        colored::control::set_override(false);
        let text = render_table(&report(), true);
        assert!(!text.contains("company"));
        assert!(text.contains("valuation"));
    }

    #[test]
    fn highlights_rendered_under_row() {
        colored::control::set_override(false);
        let report = report().with_highlights(&NormalizationPolicy::default());
        let text = render_table(&report, true);
        assert!(text.contains("[-$5m-]"));
        assert!(text.contains("{+$6m+}"));
    }

    #[test]
    fn empty_report() {
        colored::control::set_override(false);
        let result = compare(Some(&FieldSet::new()), Some(&FieldSet::new())).unwrap();
        let report = ComparisonReport::new(FieldSet::new(), FieldSet::new(), result);
        let text = render_table(&report, false);
        assert!(text.starts_with("No fields to show."));
    }

    #[test]
    fn blank_values_shown_as_empty_cell() {
        assert_eq!(cell(&None), EMPTY_CELL);
        assert_eq!(cell(&Some("  ".into())), EMPTY_CELL);
        assert_eq!(cell(&Some(" Acme ".into())), "Acme");
    }
}
