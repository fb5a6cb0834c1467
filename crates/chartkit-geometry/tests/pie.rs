//! Pie chart layout tests.

use std::f32::consts::PI;

use chartkit_geometry::Color;
use chartkit_geometry::chart::*;
use glam::Vec2;

fn halves() -> Vec<PieSlice> {
    vec![
        PieSlice::new("Apples", 3.0, Color::from_rgb_u8(255, 0, 0)),
        PieSlice::new("Pears", 3.0, Color::from_rgb_u8(0, 255, 0)),
    ]
}

#[test]
fn test_half_sector_svg_data() {
    let layout = PieChartLayout::compute(&halves(), 400.0, 250.0, &PieChartConfig::default()).unwrap();

    assert_eq!(layout.center, Vec2::new(100.0, 125.0));
    assert_eq!(layout.radius, 100.0);
    assert_eq!(
        layout.sectors[0].path.to_svg_data(),
        "M100,25 A100,100 0 0 1 100,225 L100,125 Z"
    );
    assert!((layout.sectors[1].end_angle - 2.0 * PI).abs() < 1e-4);
}

#[test]
fn test_legend_rows_and_labels() {
    let layout = PieChartLayout::compute(&halves(), 400.0, 250.0, &PieChartConfig::default()).unwrap();

    assert_eq!(layout.legend.len(), 2);
    assert_eq!(layout.legend[0].swatch.x, 240.0);
    assert_eq!(layout.legend[0].swatch.y, 102.0);
    assert_eq!(layout.legend[1].swatch.y, 132.0);
    assert_eq!(layout.legend[0].label.text, "50% Apples");
    assert_eq!(layout.legend[1].label.text, "50% Pears");
}

#[test]
fn test_absolute_values_and_padding() {
    let config = PieChartConfig::default()
        .with_absolute(true)
        .with_padding_left(20.0)
        .with_legend(false);
    let layout = PieChartLayout::compute(&halves(), 400.0, 250.0, &config).unwrap();

    assert_eq!(layout.center.x, 120.0);
    assert!(layout.legend.is_empty());
    assert_eq!(layout.sectors[0].value_text, "3");
}

#[test]
fn test_small_share_avoids_false_zero() {
    let slices = vec![
        PieSlice::new("Big", 999.0, Color::BLACK),
        PieSlice::new("Tiny", 1.0, Color::WHITE),
    ];
    let plain = PieChartLayout::compute(&slices, 300.0, 200.0, &PieChartConfig::default()).unwrap();
    assert_eq!(plain.sectors[1].value_text, "0%");

    let config = PieChartConfig::default().with_avoid_false_zero(true);
    let layout = PieChartLayout::compute(&slices, 300.0, 200.0, &config).unwrap();
    assert_eq!(layout.sectors[1].value_text, "<1%");
    assert_eq!(layout.sectors[0].value_text, "100%");
}

#[test]
fn test_animation_converges_to_final_layout() {
    let config = PieChartConfig::default();
    let done = PieChartLayout::compute(&halves(), 400.0, 250.0, &config).unwrap();
    let start = PieChartLayout::compute_animated(&halves(), 400.0, 250.0, &config, 0.0).unwrap();
    let end = PieChartLayout::compute_animated(&halves(), 400.0, 250.0, &config, 1.0).unwrap();

    assert_eq!(end, done);
    let total_start: f32 = start.sectors.iter().map(Sector::sweep).sum();
    assert!(total_start < 2.0 * PI / 10.0);
    assert_eq!(start.legend[0].label.text, "50% Apples");
}
