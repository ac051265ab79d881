use super::*;
use crate::image::ImageRef;
use crate::scanline::PixelPredicate;

fn link_mask(rows: &[&str], connectivity: Connectivity) -> (RunLengthEncoder, RegionLinker) {
    let w = rows[0].len();
    let data: Vec<u8> = rows
        .iter()
        .flat_map(|r| r.bytes().map(|b| if b == b'#' { 1 } else { 0 }))
        .collect();
    let img = ImageRef::new(w, rows.len(), &data);
    let mut rle = RunLengthEncoder::new();
    rle.encode(&img, &PixelPredicate::ValueBand { min: 1, max: 1 });
    let mut linker = RegionLinker::new(connectivity);
    linker.link(&rle);
    (rle, linker)
}

fn distinct_roots(rle: &RunLengthEncoder, linker: &mut RegionLinker) -> usize {
    let mut roots: Vec<u32> = (0..rle.len()).map(|i| linker.root_of(i)).collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

#[test]
fn u_shape_bottom_stroke_merges_both_arms() {
    let (rle, mut linker) = link_mask(
        &[
            "#...#", //
            "#...#", //
            "#...#", //
            "#####", //
        ],
        Connectivity::Four,
    );
    // both arms open their own part before the bottom row joins them
    assert_eq!(linker.part_count(), 2);
    assert_eq!(linker.merge_count(), 1);
    assert_eq!(distinct_roots(&rle, &mut linker), 1);
}

#[test]
fn separate_blobs_keep_separate_roots() {
    let (rle, mut linker) = link_mask(
        &[
            "##..##", //
            "##..##", //
            "......", //
            "..##..", //
        ],
        Connectivity::Four,
    );
    assert_eq!(distinct_roots(&rle, &mut linker), 3);
}

#[test]
fn diagonal_contact_requires_eight_connectivity() {
    let rows = ["#..", ".#.", "..#"];
    let (rle, mut four) = link_mask(&rows, Connectivity::Four);
    assert_eq!(distinct_roots(&rle, &mut four), 3);
    let (rle, mut eight) = link_mask(&rows, Connectivity::Eight);
    assert_eq!(distinct_roots(&rle, &mut eight), 1);
}

#[test]
fn exposed_edges_sum_to_crack_perimeter() {
    let (rle, linker) = link_mask(&["###", "###", "###"], Connectivity::Four);
    let total: u32 = (0..rle.len()).map(|i| linker.exposed(i)).sum();
    assert_eq!(total, 12);
}

#[test]
fn appended_bands_join_at_the_seam() {
    let data: Vec<u8> = vec![
        1, 0, 1, //
        1, 0, 1, //
        1, 1, 1, //
        0, 0, 1, //
    ];
    let img = ImageRef::new(3, 4, &data);
    let predicate = PixelPredicate::ValueBand { min: 1, max: 1 };

    let mut top = RunLengthEncoder::new();
    top.encode_rows(&img, &predicate, 0..2);
    let mut bottom = RunLengthEncoder::new();
    bottom.encode_rows(&img, &predicate, 2..4);

    let mut top_linker = RegionLinker::new(Connectivity::Four);
    top_linker.link(&top);
    let mut bottom_linker = RegionLinker::new(Connectivity::Four);
    bottom_linker.link(&bottom);

    let mut rle = top.clone();
    rle.append(&bottom);
    let mut linker = top_linker;
    linker.append(&bottom_linker);
    assert_eq!(distinct_roots(&rle, &mut linker), 3);

    linker.merge_boundary(&rle, 2);
    assert_eq!(distinct_roots(&rle, &mut linker), 1);

    let mut whole = RunLengthEncoder::new();
    whole.encode(&img, &predicate);
    assert_eq!(whole.runs(), rle.runs());
    let mut sequential = RegionLinker::new(Connectivity::Four);
    sequential.link(&whole);
    for i in 0..rle.len() {
        assert_eq!(linker.exposed(i), sequential.exposed(i));
    }
}
