use super::*;
use crate::image::Image;
use crate::scanline::{Connectivity, PixelPredicate};

fn regions_of(img: &Image<u8>, predicate: PixelPredicate) -> Accumulated {
    let mut rle = RunLengthEncoder::new();
    rle.encode(&img.as_ref(), &predicate);
    let mut linker = RegionLinker::new(Connectivity::Four);
    linker.link(&rle);
    accumulate(&rle, &mut linker)
}

fn single_blob(n: usize) -> Region {
    // n pixels in one row of an otherwise empty image
    let mut img = Image::new(n + 2, 1, 0u8);
    img.fill_rect(1, 0, n + 1, 1, 255);
    let acc = regions_of(&img, PixelPredicate::ValueBand { min: 255, max: 255 });
    assert_eq!(acc.regions.len(), 1);
    acc.regions.into_iter().next().unwrap()
}

#[test]
fn square_on_background_yields_two_regions_in_raster_order() {
    let mut img = Image::new(10, 10, 0u8);
    img.fill_rect(2, 2, 5, 5, 255);
    let acc = regions_of(&img, PixelPredicate::EqualRun);
    assert_eq!(acc.regions.len(), 2);

    let background = &acc.regions[0];
    assert_eq!(background.id(), RegionId(0));
    assert_eq!(background.value(), 0);
    assert_eq!(background.size(), 91);

    let square = &acc.regions[1];
    assert_eq!(square.value(), 255);
    assert_eq!(square.size(), 9);
    assert_eq!(square.bounding_box(), Rect::new(2, 2, 5, 5));
    let c = square.centroid();
    assert!((c.x - 3.5).abs() < 1e-12 && (c.y - 3.5).abs() < 1e-12);
    assert_eq!(square.boundary_len(), 12);
    // the background sees the outer image border plus the hole edges
    assert_eq!(background.boundary_len(), 40 + 12);
}

#[test]
fn bounding_box_matches_member_scanlines() {
    let mut img = Image::new(12, 8, 0u8);
    img.fill_rect(1, 1, 4, 2, 9);
    img.fill_rect(3, 2, 4, 6, 9);
    img.fill_rect(3, 6, 11, 7, 9);
    let acc = regions_of(&img, PixelPredicate::ValueBand { min: 9, max: 9 });
    assert_eq!(acc.regions.len(), 1);
    let region = &acc.regions[0];
    let runs = region.scanlines();
    let x0 = runs.iter().map(|s| s.x).min().unwrap();
    let x1 = runs.iter().map(|s| s.xend).max().unwrap();
    let y0 = runs.iter().map(|s| s.y).min().unwrap();
    let y1 = runs.iter().map(|s| s.y).max().unwrap() + 1;
    assert_eq!(region.bounding_box(), Rect::new(x0, y0, x1, y1));
    assert_eq!(region.bounding_box(), Rect::new(1, 1, 11, 7));
    assert_eq!(region.size(), 3 + 4 + 8);
}

#[test]
fn every_run_is_mapped_to_the_region_owning_it() {
    let mut img = Image::new(6, 4, 1u8);
    img.fill_rect(0, 0, 3, 2, 2);
    let mut rle = RunLengthEncoder::new();
    rle.encode(&img.as_ref(), &PixelPredicate::EqualRun);
    let mut linker = RegionLinker::new(Connectivity::Four);
    linker.link(&rle);
    let acc = accumulate(&rle, &mut linker);
    for (i, s) in rle.runs().iter().enumerate() {
        let region = &acc.regions[acc.region_of_run[i] as usize];
        assert!(region.scanlines().contains(s));
    }
}

#[test]
fn restriction_bounds_are_inclusive() {
    let r = Restrictions::new(10, 100, 0, 255).unwrap();
    assert!(!r.accepts(&single_blob(5)));
    assert!(r.accepts(&single_blob(50)));
    assert!(r.accepts(&single_blob(10)));
    assert!(r.accepts(&single_blob(100)));
    assert!(!r.accepts(&single_blob(101)));
}

#[test]
fn restriction_value_window_applies() {
    let blob = single_blob(20);
    assert!(accept(&blob, &Restrictions::new(0, 1000, 255, 255).unwrap()));
    assert!(!accept(&blob, &Restrictions::new(0, 1000, 0, 254).unwrap()));
}

#[test]
fn inverted_restrictions_are_rejected() {
    assert!(Restrictions::new(10, 5, 0, 255).is_err());
    assert!(Restrictions::new(0, 5, 9, 3).is_err());
}

#[test]
fn covariance_of_a_horizontal_bar() {
    let blob = single_blob(5);
    let cov = blob.covariance();
    // variance of 5 consecutive integers is 2
    assert!((cov[(0, 0)] - 2.0).abs() < 1e-9);
    assert!(cov[(1, 1)].abs() < 1e-9);
    assert!(cov[(0, 1)].abs() < 1e-9);
}
