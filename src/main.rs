use region_detector::image::Image;
use region_detector::{DetectorOptions, PixelPredicate, RegionDetector, Restrictions};

fn main() {
    env_logger::init();

    // Demo: a few synthetic shapes on a dark background
    let (w, h) = (160usize, 120usize);
    let mut img = Image::new(w, h, 0u8);
    img.fill_rect(10, 10, 40, 30, 200);
    img.fill_rect(60, 20, 64, 100, 220);
    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = (x as f32 - 115.0, y as f32 - 70.0);
            if dx * dx + dy * dy <= 400.0 {
                img.set(x, y, 255);
            }
        }
    }
    img.set(5, 110, 255);

    let options = DetectorOptions::default()
        .with_predicate(PixelPredicate::ValueBand { min: 128, max: 255 })
        .with_restrictions(Restrictions {
            min_size: 4,
            ..Restrictions::default()
        });
    let mut detector = RegionDetector::new(options);
    let detection = match detector.detect(&img.as_ref()) {
        Ok(d) => d,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    for blob in &detection.blobs {
        let cog = blob.cog();
        let pca = blob.pca();
        println!(
            "blob {:>3} size={:>5} cog=({:.2}, {:.2}) axes=({:.2}, {:.2}) angle={:.1}deg ff={:.3}",
            blob.id().0,
            blob.size(),
            cog.x,
            cog.y,
            pca.major_axis,
            pca.minor_axis,
            pca.angle.to_degrees(),
            blob.form_factor()
        );
    }
    println!(
        "rejected={} ({} px) latency_ms={:.3}",
        detection.rejected.count, detection.rejected.pixels, detection.report.timings.total_ms
    );
}
