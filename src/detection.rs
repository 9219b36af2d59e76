use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl BoundingBox {
    pub fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// `(xmax - xmin) * (ymax - ymin)` in 64-bit arithmetic, saturating at
    /// the `i64` bounds.
    ///
    /// Inverted boxes are not normalized: a box with `xmax < xmin` (or the
    /// same on the y axis) yields a negative area, and a flat box yields zero.
    pub fn area(&self) -> i64 {
        let width = i64::from(self.xmax) - i64::from(self.xmin);
        let height = i64::from(self.ymax) - i64::from(self.ymin);
        width.saturating_mul(height)
    }

    pub fn is_degenerate(&self) -> bool {
        self.area() <= 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(flatten)]
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn new(label: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            confidence: None,
            bbox,
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        assert_eq!(BoundingBox::new(0, 0, 300, 300).area(), 90_000);
        assert_eq!(BoundingBox::new(10, 20, 110, 70).area(), 5_000);
    }

    #[test]
    fn test_area_of_flat_and_inverted_boxes() {
        let flat = BoundingBox::new(5, 5, 5, 100);
        assert_eq!(flat.area(), 0);
        assert!(flat.is_degenerate());

        let inverted = BoundingBox::new(100, 0, 0, 50);
        assert_eq!(inverted.area(), -5_000);
        assert!(inverted.is_degenerate());

        // Both axes inverted: the signs cancel out.
        let double_inverted = BoundingBox::new(100, 100, 0, 0);
        assert_eq!(double_inverted.area(), 10_000);
        assert!(!double_inverted.is_degenerate());
    }

    #[test]
    fn test_area_does_not_overflow() {
        let wide = BoundingBox::new(i32::MIN, 0, i32::MAX, 1);
        assert_eq!(wide.area(), i64::from(u32::MAX));

        let huge = BoundingBox::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(huge.area(), i64::MAX);
    }

    #[test]
    fn test_detection_deserializes_flat_record() {
        let json = r#"{"label":"monthong","confidence":0.5,"xmin":12,"ymin":8,"xmax":250,"ymax":240,"harga":90000}"#;
        let detection: Detection = serde_json::from_str(json).unwrap();

        assert_eq!(detection.label, "monthong");
        assert_eq!(detection.confidence, Some(0.5));
        assert_eq!(detection.bbox, BoundingBox::new(12, 8, 250, 240));

        // Unknown fields are dropped, not carried to the output.
        let value = serde_json::to_value(&detection).unwrap();
        assert!(value.get("harga").is_none());
    }

    #[test]
    fn test_detection_without_confidence() {
        let json = r#"{"label":"bawor","xmin":0,"ymin":0,"xmax":10,"ymax":10}"#;
        let detection: Detection = serde_json::from_str(json).unwrap();
        assert_eq!(detection.confidence, None);

        let value = serde_json::to_value(&detection).unwrap();
        assert!(value.get("confidence").is_none());
        assert_eq!(value["xmax"], 10);
    }
}
