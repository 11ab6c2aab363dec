//! Tests for the cover module

use super::*;

#[test]
fn test_cover_creation() {
    let cover = Cover::new(CoverType::F);
    assert_eq!(cover.num_inputs(), 0);
    assert_eq!(cover.num_cubes(), 0);
    assert!(cover.input_labels().is_empty());
}

#[test]
fn test_cover_with_labels() {
    let cover = Cover::with_labels(CoverType::F, &["a", "b", "c"]);
    assert_eq!(cover.num_inputs(), 3);
    assert_eq!(cover.input_labels()[0].as_ref(), "a");
    assert_eq!(cover.input_labels()[2].as_ref(), "c");
}

#[test]
fn test_dynamic_growth() {
    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&[Some(true), Some(false)], true);
    assert_eq!(cover.num_inputs(), 2);

    cover.add_cube(&[Some(true), Some(false), Some(true)], true);
    assert_eq!(cover.num_inputs(), 3);
    let first = cover.cubes().next().unwrap();
    assert_eq!(first.inputs(), &[Some(true), Some(false), None]);

    // Unlabeled covers stay unlabeled
    assert_eq!(cover.input_labels().len(), 0);
}

#[test]
fn test_growth_backfills_labels() {
    let mut cover = Cover::with_labels(CoverType::F, &["a"]);
    cover.add_cube(&[Some(true), None, Some(false)], true);
    let labels: Vec<&str> = cover.input_labels().iter().map(|l| l.as_ref()).collect();
    assert_eq!(labels, vec!["a", "x1", "x2"]);
}

#[test]
fn test_f_cover_drops_offset_cubes() {
    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&[Some(true)], true);
    cover.add_cube(&[Some(false)], false);
    assert_eq!(cover.num_cubes(), 1);
    assert_eq!(cover.offset().count(), 0);
}

#[test]
fn test_cube_literals() {
    let cube = Cube::new(&[Some(true), None, Some(false)], CubeType::F);
    assert_eq!(cube.num_literals(), 2);
    assert_eq!(cube.literal(0), Some(true));
    assert_eq!(cube.literal(1), None);
    assert_eq!(cube.literal(2), Some(false));
    assert_eq!(cube.literal(7), None);

    let reduced = cube.without_literal(0);
    assert_eq!(reduced.num_literals(), 1);
    assert_eq!(reduced.to_string(), "--0");
    // Removing an absent literal leaves the cube unchanged
    assert_eq!(cube.without_literal(1), cube);
}

#[test]
fn test_cube_truth_table() {
    let cube = Cube::new(&[Some(true), None, Some(false)], CubeType::F);
    // x0 = 1, x2 = 0: assignments 1 and 3
    let tt = cube.to_truth_table();
    assert_eq!(tt.to_binary(), "00001010");
    assert_eq!(tt.count_ones(), 2);
}

#[test]
fn test_to_truth_table_f_cover() {
    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&[Some(true), Some(true)], true);
    let tt = cover.to_truth_table().unwrap();
    assert_eq!(tt, TruthTable::from_hex(2, "8").unwrap());
}

#[test]
fn test_to_truth_table_fr_cover() {
    let mut cover = Cover::new(CoverType::FR);
    cover.add_cube(&[Some(true), Some(true)], true);
    cover.add_cube(&[Some(false), None], false);
    cover.add_cube(&[None, Some(false)], false);
    let tt = cover.to_truth_table().unwrap();
    assert_eq!(tt.to_hex(), "8");
}

#[test]
fn test_to_truth_table_rejects_overlap() {
    let mut cover = Cover::new(CoverType::FR);
    cover.add_cube(&[Some(true), None], true);
    cover.add_cube(&[None, Some(true)], false);
    cover.add_cube(&[Some(false), Some(false)], false);
    assert_eq!(
        cover.to_truth_table(),
        Err(CoverError::OverlappingSets { assignment: 3 })
    );
}

#[test]
fn test_to_truth_table_rejects_gaps() {
    let mut cover = Cover::new(CoverType::FR);
    cover.add_cube(&[Some(true), Some(true)], true);
    cover.add_cube(&[Some(false), Some(false)], false);
    assert_eq!(
        cover.to_truth_table(),
        Err(CoverError::IncompleteFunction { assignment: 1 })
    );
}

#[test]
fn test_from_sets() {
    let mut on = Cover::new(CoverType::F);
    on.add_cube(&[Some(true), Some(true)], true);
    let mut off = Cover::new(CoverType::F);
    off.add_cube(&[Some(false), None], true);
    off.add_cube(&[None, Some(false)], true);

    let combined = Cover::from_sets(&on, &off);
    assert_eq!(combined.cover_type(), CoverType::FR);
    assert_eq!(combined.onset().count(), 1);
    assert_eq!(combined.offset().count(), 2);
    assert_eq!(combined.to_truth_table().unwrap().to_hex(), "8");
    assert!(combined
        .offset()
        .all(|c| c.cube_type() == CubeType::R && c.num_literals() == 1));
}
