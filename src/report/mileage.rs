//! Mileage summary section.

use crate::format::format_distance;
use crate::labels::Labels;
use crate::model::{DistanceUnit, MileageRecord};
use crate::report::table::{LEFT_MARGIN, MESSAGE_Y, TITLE_SIZE, TITLE_Y};
use crate::writer::PageCanvas;

const LINE_STEP: f64 = 18.0;
const LINE_SIZE: f32 = 11.0;
const NOTE_GAP: f64 = 12.0;
const NOTE_SIZE: f32 = 10.0;

/// Distance totals across all mileage records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MileageSummary {
    /// Sum of `|miles|` over records logged in miles
    pub total_miles: f64,
    /// Sum of `|kilometers|` over records logged in kilometers
    pub total_kilometers: f64,
    /// Sum of odometer deltas over records with both readings, in any unit
    pub odometer_distance: f64,
}

impl MileageSummary {
    /// Total the given records.
    pub fn from_records(records: &[MileageRecord]) -> Self {
        let magnitude = |value: Option<f64>| value.filter(|v| v.is_finite()).map_or(0.0, f64::abs);

        records.iter().fold(Self::default(), |mut summary, record| {
            match record.unit {
                Some(DistanceUnit::Miles) => summary.total_miles += magnitude(record.miles),
                Some(DistanceUnit::Kilometers) => {
                    summary.total_kilometers += magnitude(record.kilometers)
                },
                None => {},
            }
            summary.odometer_distance += record.odometer_distance().unwrap_or(0.0);
            summary
        })
    }

    /// Kilometer total as a share of the odometer distance.
    ///
    /// The odometer distance mixes units when records do, and the ratio is
    /// reported as-is.
    pub fn business_percent(&self) -> Option<f64> {
        (self.odometer_distance > 0.0)
            .then(|| self.total_kilometers / self.odometer_distance * 100.0)
    }
}

/// Build the mileage page, or nothing when there are no records.
pub fn build_mileage_pages(records: &[MileageRecord], labels: &Labels) -> Vec<PageCanvas> {
    if records.is_empty() {
        return Vec::new();
    }

    let summary = MileageSummary::from_records(records);
    let mut lines = Vec::new();
    if summary.total_miles > 0.0 {
        lines.push(format!("Total business miles: {} mi", format_distance(summary.total_miles)));
    }
    if summary.total_kilometers > 0.0 {
        lines.push(format!(
            "Total business kilometers: {} km",
            format_distance(summary.total_kilometers)
        ));
    }
    if let Some(percent) = summary.business_percent() {
        lines.push(format!("Business %: {:.1}%", percent));
    }

    let title = PageCanvas::new().text(LEFT_MARGIN, TITLE_Y, labels.mileage_summary_title, TITLE_SIZE);
    let canvas = lines.iter().enumerate().fold(title, |canvas, (i, line)| {
        canvas.text(LEFT_MARGIN, MESSAGE_Y - LINE_STEP * i as f64, line, LINE_SIZE)
    });
    let note_y = MESSAGE_Y - LINE_STEP * lines.len() as f64 - NOTE_GAP;
    vec![canvas.text(LEFT_MARGIN, note_y, labels.mileage_note_csv, NOTE_SIZE)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{labels, ExportLang};
    use crate::writer::pdf_hex;

    fn record(unit: Option<DistanceUnit>, miles: Option<f64>, km: Option<f64>) -> MileageRecord {
        MileageRecord {
            unit,
            miles,
            kilometers: km,
            ..MileageRecord::default()
        }
    }

    #[test]
    fn test_empty_no_pages() {
        assert!(build_mileage_pages(&[], labels(ExportLang::En)).is_empty());
    }

    #[test]
    fn test_summary_per_unit() {
        let summary = MileageSummary::from_records(&[
            record(Some(DistanceUnit::Miles), Some(-10.0), Some(99.0)),
            record(Some(DistanceUnit::Kilometers), None, Some(25.5)),
            record(None, Some(5.0), Some(5.0)),
        ]);
        assert_eq!(summary.total_miles, 10.0);
        assert_eq!(summary.total_kilometers, 25.5);
        assert_eq!(summary.business_percent(), None);
    }

    #[test]
    fn test_business_percent_mixes_units() {
        let mut miles = record(Some(DistanceUnit::Miles), Some(30.0), None);
        miles.odo_start = Some(0.0);
        miles.odo_end = Some(30.0);
        let mut km = record(Some(DistanceUnit::Kilometers), None, Some(10.0));
        km.odo_start = Some(100.0);
        km.odo_end = Some(110.0);
        let summary = MileageSummary::from_records(&[miles, km]);
        assert_eq!(summary.odometer_distance, 40.0);
        assert_eq!(summary.business_percent(), Some(25.0));
    }

    #[test]
    fn test_page_lines() {
        let mut km = record(Some(DistanceUnit::Kilometers), None, Some(12.0));
        km.odo_start = Some(0.0);
        km.odo_end = Some(48.0);
        let pages = build_mileage_pages(&[km], labels(ExportLang::En));
        assert_eq!(pages.len(), 1);
        let content = pages[0].build().unwrap();
        assert!(!content.contains(&pdf_hex("Total business miles")));
        assert!(content.contains(&pdf_hex("Total business kilometers: 12.00 km")));
        assert!(content.contains(&pdf_hex("Business %: 25.0%")));
        // km at 720, percent at 702, note at 702 - 18 - 12.
        assert!(content.contains("1 0 0 1 40.00 672.00 Tm"));
    }

    #[test]
    fn test_note_only() {
        let pages = build_mileage_pages(&[record(None, None, None)], labels(ExportLang::Es));
        assert_eq!(pages[0].text_count(), 2);
        let content = pages[0].build().unwrap();
        assert!(content.contains("1 0 0 1 40.00 708.00 Tm"));
        assert!(content.contains(&pdf_hex(labels(ExportLang::Es).mileage_note_csv)));
    }
}
