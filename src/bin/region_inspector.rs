use region_detector::config::regions;
use region_detector::diagnostics::{BlobDescriptor, DetectionReport};
use region_detector::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use region_detector::image::Image;
use region_detector::{Detection, RegionDetector, Rejected};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = regions::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let mut detector = RegionDetector::new(config.detector.clone());
    let detection = if config.parallel {
        detector.detect_parallel(&gray.as_ref())
    } else {
        detector.detect(&gray.as_ref())
    }
    .map_err(|e| format!("Detection failed on {}: {e}", config.input.display()))?;

    let summary = InspectorReport {
        blobs: detection.blobs.iter().map(BlobDescriptor::from_blob).collect(),
        rejected: detection.rejected,
        report: detection.report.clone(),
    };
    write_json_file(&config.output.report_json, &summary)?;

    if let Some(label_path) = &config.output.label_image {
        let labels = render_labels(&detection, gray.w, gray.h);
        save_grayscale_u8(&labels, label_path)?;
        println!("Saved label image to {}", label_path.display());
    }

    println!("{}", detection.report.summary());
    println!("Saved blob report to {}", config.output.report_json.display());
    Ok(())
}

/// Paint accepted blobs with gray levels spread over 1..=255; 0 is background.
fn render_labels(detection: &Detection, w: usize, h: usize) -> Image<u8> {
    let mut labels = Image::new(w, h, 0u8);
    let n = detection.blobs.len().max(1);
    for (i, blob) in detection.blobs.iter().enumerate() {
        let level = 1 + (i * 254) / n;
        blob.draw_to(&mut labels, level as u8);
    }
    labels
}

fn usage() -> String {
    "Usage: region_inspector <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectorReport {
    blobs: Vec<BlobDescriptor>,
    rejected: Rejected,
    report: DetectionReport,
}
