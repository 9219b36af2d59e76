mod report;

pub mod app;
pub mod cli;
pub mod config;
pub mod detection;
pub mod grading;

pub use app::start_app;
pub use detection::{BoundingBox, Detection};
pub use grading::{grade_and_price, Grade, GradeResult, PriceList};
pub use report::{grade_detections, summarize, GradedDetection, GradingSummary};
