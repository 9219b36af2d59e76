use crate::{
    detection::Detection,
    grading::{Grade, PriceList},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedDetection {
    #[serde(flatten)]
    pub detection: Detection,
    pub grade: Grade,
    pub price: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GradingSummary {
    pub total: usize,
    pub grade_a: usize,
    pub grade_b: usize,
    pub grade_c: usize,
    pub grade_x: usize,
    pub total_price: u64,
}

#[instrument(skip_all, fields(count = detections.len()))]
pub fn grade_detections(price_list: &PriceList, detections: Vec<Detection>) -> Vec<GradedDetection> {
    detections
        .into_iter()
        .enumerate()
        .map(|(i, detection)| {
            if detection.bbox.is_degenerate() {
                tracing::warn!(
                    "Detection {} ({}) has a non-positive area {}: bbox=({}, {}, {}, {})",
                    i,
                    detection.label,
                    detection.bbox.area(),
                    detection.bbox.xmin,
                    detection.bbox.ymin,
                    detection.bbox.xmax,
                    detection.bbox.ymax
                );
            }

            let result = price_list.grade(&detection.label, &detection.bbox);
            tracing::debug!(
                "Detection {}: label={}, area={}, grade={}, price={}",
                i,
                detection.label,
                detection.bbox.area(),
                result.grade,
                result.price
            );

            GradedDetection {
                detection,
                grade: result.grade,
                price: result.price,
            }
        })
        .collect()
}

pub fn summarize(graded: &[GradedDetection]) -> GradingSummary {
    graded
        .iter()
        .fold(GradingSummary::default(), |mut summary, item| {
            summary.total += 1;
            match item.grade {
                Grade::A => summary.grade_a += 1,
                Grade::B => summary.grade_b += 1,
                Grade::C => summary.grade_c += 1,
                Grade::X => summary.grade_x += 1,
            }
            summary.total_price = summary.total_price.saturating_add(item.price);
            summary
        })
}
