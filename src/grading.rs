use crate::detection::BoundingBox;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PREMIUM_LABELS: [&str; 4] = ["musang king", "black thorn", "monthong", "kanyao"];
pub const BAWOR_LABEL: &str = "bawor";
pub const NOT_DURIAN_LABEL: &str = "not durian";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    X,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::X => "X",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    pub grade: Grade,
    pub price: u64,
}

impl GradeResult {
    pub fn new(grade: Grade, price: u64) -> Self {
        Self { grade, price }
    }
}

// Labels are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variety {
    Premium,
    Bawor,
    NotDurian,
    Other,
}

impl Variety {
    pub fn from_label(label: &str) -> Self {
        if label == NOT_DURIAN_LABEL {
            Variety::NotDurian
        } else if PREMIUM_LABELS.contains(&label) {
            Variety::Premium
        } else if label == BAWOR_LABEL {
            Variety::Bawor
        } else {
            Variety::Other
        }
    }
}

/// Area thresholds and amounts used to price a detection.
///
/// Both thresholds are exclusive lower bounds: an area must be strictly
/// greater than `large_area` to reach the top tier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PriceList {
    pub large_area: i64,
    pub medium_area: i64,
    pub grade_a_price: u64,
    pub grade_b_price: u64,
    pub grade_c_price: u64,
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            large_area: 50_000,
            medium_area: 30_000,
            grade_a_price: 100_000,
            grade_b_price: 70_000,
            grade_c_price: 50_000,
        }
    }
}

impl PriceList {
    // A flat or inverted box (area <= 0) never clears a threshold.
    pub fn grade(&self, label: &str, bbox: &BoundingBox) -> GradeResult {
        let area = bbox.area();

        match Variety::from_label(label) {
            Variety::NotDurian => GradeResult::new(Grade::X, 0),
            Variety::Premium if area > self.large_area => self.priced(Grade::A),
            Variety::Premium if area > self.medium_area => self.priced(Grade::B),
            Variety::Bawor if area > self.large_area => self.priced(Grade::B),
            Variety::Premium | Variety::Bawor | Variety::Other => self.priced(Grade::C),
        }
    }

    pub fn price_of(&self, grade: Grade) -> u64 {
        match grade {
            Grade::A => self.grade_a_price,
            Grade::B => self.grade_b_price,
            Grade::C => self.grade_c_price,
            Grade::X => 0,
        }
    }

    fn priced(&self, grade: Grade) -> GradeResult {
        GradeResult::new(grade, self.price_of(grade))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.medium_area >= self.large_area {
            return Err(format!(
                "medium_area ({}) must be lower than large_area ({})",
                self.medium_area, self.large_area
            ));
        }
        if self.grade_a_price < self.grade_b_price || self.grade_b_price < self.grade_c_price {
            return Err(format!(
                "grade prices must not increase from A to C, got A={} B={} C={}",
                self.grade_a_price, self.grade_b_price, self.grade_c_price
            ));
        }
        Ok(())
    }
}

pub fn grade_and_price(label: &str, bbox: &BoundingBox) -> GradeResult {
    PriceList::default().grade(label, bbox)
}
