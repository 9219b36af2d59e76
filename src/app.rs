use crate::{
    cli::Args,
    config::Config,
    detection::Detection,
    grading::PriceList,
    report::{grade_detections, summarize, GradedDetection, GradingSummary},
};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::PathBuf,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to open input {path:?}: {source}")]
    OpenInput { path: PathBuf, source: io::Error },
    #[error("Failed to create output {path:?}: {source}")]
    CreateOutput { path: PathBuf, source: io::Error },
    #[error("Failed to decode detections: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Failed to encode graded detections: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}

pub fn read_detections<R: Read>(reader: R) -> Result<Vec<Detection>, AppError> {
    serde_json::from_reader(reader).map_err(AppError::Decode)
}

pub fn write_graded<W: Write>(
    mut writer: W,
    graded: &[GradedDetection],
    pretty: bool,
) -> Result<(), AppError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, graded).map_err(AppError::Encode)?;
    } else {
        serde_json::to_writer(&mut writer, graded).map_err(AppError::Encode)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn run<R: Read, W: Write>(
    price_list: &PriceList,
    reader: R,
    writer: W,
    pretty: bool,
) -> Result<GradingSummary, AppError> {
    let detections = read_detections(reader)?;
    tracing::debug!("Read {} detections", detections.len());

    let graded = grade_detections(price_list, detections);
    write_graded(writer, &graded, pretty)?;

    Ok(summarize(&graded))
}

pub fn start_app(config: Config, args: &Args) -> Result<(), AppError> {
    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(|source| {
            AppError::OpenInput {
                path: path.clone(),
                source,
            }
        })?)),
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|source| {
            AppError::CreateOutput {
                path: path.clone(),
                source,
            }
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    let summary = run(&config.pricing, reader, writer, args.pretty)?;
    tracing::info!(
        total = summary.total,
        grade_a = summary.grade_a,
        grade_b = summary.grade_b,
        grade_c = summary.grade_c,
        grade_x = summary.grade_x,
        total_price = summary.total_price,
        "Graded {} detections",
        summary.total
    );

    Ok(())
}
