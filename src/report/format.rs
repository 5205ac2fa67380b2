//! Formatted terminal output for fits, scores and residuals.

use crate::domain::Score;
use crate::fit::FitSelection;
use crate::io::IngestedData;
use crate::math::format_number;
use crate::report::Residual;

/// Format the full run summary (dataset stats + candidate diagnostics + chosen model).
pub fn format_fit_summary(ingest: &IngestedData, selection: &FitSelection, precision: Option<u32>) -> String {
    let mut out = String::new();

    out.push_str("=== fc - closed-form curve fit ===\n");
    out.push_str(&format!(
        "Points: n={} (rows read={}, skipped={}) | x=[{}, {}] | y=[{}, {}]\n",
        ingest.rows_used(),
        ingest.rows_read,
        ingest.row_errors.len(),
        format_number(ingest.stats.x_min, precision),
        format_number(ingest.stats.x_max, precision),
        format_number(ingest.stats.y_min, precision),
        format_number(ingest.stats.y_max, precision),
    ));
    for e in ingest.row_errors.iter().take(5) {
        out.push_str(&format!("  line {}: {}\n", e.line, e.message));
    }

    out.push_str("\nModel diagnostics:\n");
    for fit in &selection.fits {
        let chosen = if fit.model.kind() == selection.best.model.kind() { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<14} r2={} chi2={}\n",
            fit.model.kind().display_name(),
            format_number(fit.score.r2(None), precision),
            format_number(fit.score.chi2(None), precision),
        ));
    }
    for (kind, reason) in &selection.skipped {
        out.push_str(&format!("  (skipped {}) {reason}\n", kind.display_name()));
    }

    out.push_str("\nChosen model:\n");
    out.push_str(&format!(
        "- {} ({})\n",
        selection.best.model.kind().display_name(),
        selection.best.model.name()
    ));
    out.push_str(&format!("- {}\n", selection.best.model.equation(precision)));
    out.push('\n');
    out.push_str(&format_score(&selection.best.score, precision));

    out
}

/// Format the four statistics, one per line.
pub fn format_score(score: &Score, precision: Option<u32>) -> String {
    let mut out = String::new();
    out.push_str(&format!("r    = {}\n", format_number(score.r(None), precision)));
    out.push_str(&format!("r2   = {}\n", format_number(score.r2(None), precision)));
    out.push_str(&format!("chi2 = {}\n", format_number(score.chi2(None), precision)));
    out.push_str(&format!("rmsd = {}\n", format_number(score.rmsd(None), precision)));
    out
}

/// Format a residual table.
pub fn format_residuals(title: &str, rows: &[Residual], precision: Option<u32>) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push_str(":\n");
    out.push_str(format!("{:>14} {:>14} {:>14} {:>14}", "x", "y_obs", "y_fit", "residual").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<14} {:-<14} {:-<14} {:-<14}", "", "", "", "").trim_end());
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:>14} {:>14} {:>14} {:>14}",
                format_number(r.x, precision),
                format_number(r.y_obs, precision),
                format_number(r.y_fit, precision),
                format_number(r.residual, precision),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit_and_select;
    use crate::domain::ModelSpec;
    use crate::io::read_observations;

    #[test]
    fn score_block_respects_precision() {
        let score = Score::new(0.9999933, 0.9999867, 0.0029818, 0.0050047);
        let text = format_score(&score, Some(4));
        assert_eq!(text, "r    = 1\nr2   = 1\nchi2 = 0.003\nrmsd = 0.005\n");
    }

    #[test]
    fn summary_marks_chosen_family() {
        let ingest = read_observations("x,y\n0,10\n1,8\n2,6\n3,4\n4,2\n5,0\n".as_bytes()).unwrap();
        let selection = fit_and_select(&ingest.x, &ingest.y, ModelSpec::Linear).unwrap();
        let text = format_fit_summary(&ingest, &selection, Some(2));
        assert!(text.contains("Points: n=6 (rows read=6, skipped=0)"));
        assert!(text.contains("* Simple linear"));
        assert!(text.contains("- f(x) = -2x + 10\n"));
    }

    #[test]
    fn residual_table_rows() {
        let rows = vec![Residual {
            x: 1.0,
            y_obs: 3.0,
            y_fit: 2.5,
            residual: 0.5,
        }];
        let text = format_residuals("Largest residuals", &rows, Some(2));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Largest residuals:");
        assert_eq!(lines.len(), 4);
        assert!(lines[3].ends_with("0.5"));
    }
}
