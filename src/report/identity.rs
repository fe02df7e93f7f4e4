//! Identity and summary page.

use crate::format::{format_currency, or_placeholder};
use crate::labels::Labels;
use crate::model::{Currency, ExportOptions};
use crate::report::table::{LEFT_MARGIN, TITLE_Y};
use crate::totals::Totals;
use crate::writer::PageCanvas;

const TITLE_SIZE: f32 = 20.0;
const FIRST_LINE_Y: f64 = 728.0;
const LINE_STEP: f64 = 18.0;
const LINE_SIZE: f32 = 11.0;
const SUMMARY_X: f64 = 360.0;
const SUMMARY_Y: f64 = 680.0;
const DISCLAIMER_GAP: f64 = 22.0;
const DISCLAIMER_SIZE: f32 = 9.0;

/// Build the single identity page: business details on the left, totals on
/// the right, and the estimate disclaimer below them.
pub fn build_identity_page(
    options: &ExportOptions,
    totals: &Totals,
    currency: Currency,
    labels: &Labels,
) -> PageCanvas {
    let legal_name = [&options.legal_name, &options.business_name]
        .into_iter()
        .find(|name| !name.is_empty())
        .map_or("", String::as_str);

    let details = [
        format!("{}: {}", labels.legal_name, or_placeholder(legal_name)),
        format!("{}: {}", labels.business_name, or_placeholder(&options.operating_name)),
        format!("{}: {}", labels.tax_id, or_placeholder(&options.tax_id)),
        format!("{}: {}", labels.business_activity_code, or_placeholder(&options.naics)),
        format!(
            "{}: {} – {}",
            labels.reporting_period, options.start_date, options.end_date
        ),
        format!("{}: {}", labels.currency, currency.code()),
    ];

    let summary = [
        (labels.total_income, totals.income),
        (labels.total_expenses, totals.expenses),
        (labels.net_profit, totals.net_profit),
        (labels.estimated_tax, totals.estimated_tax),
    ];

    let canvas = PageCanvas::new().text(LEFT_MARGIN, TITLE_Y, labels.report_title, TITLE_SIZE);
    let canvas = details.iter().enumerate().fold(canvas, |canvas, (i, line)| {
        canvas.text(LEFT_MARGIN, FIRST_LINE_Y - LINE_STEP * i as f64, line, LINE_SIZE)
    });
    let canvas = summary.iter().enumerate().fold(canvas, |canvas, (i, (label, amount))| {
        let line = format!("{}: {}", label, format_currency(*amount, currency));
        canvas.text(SUMMARY_X, SUMMARY_Y - LINE_STEP * i as f64, &line, LINE_SIZE)
    });

    let disclaimer_y = SUMMARY_Y - LINE_STEP * (summary.len() - 1) as f64 - DISCLAIMER_GAP;
    canvas.text(SUMMARY_X, disclaimer_y, labels.estimated_tax_disclaimer, DISCLAIMER_SIZE)
}
