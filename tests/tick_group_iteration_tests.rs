use std::sync::Arc;

use approx::assert_relative_eq;
use fast_axis::core::{AxesBox, BoundingBox, FixedLocator, TickWhich, TransformAnchor};
use fast_axis::render::NullRenderer;
use fast_axis::{StyleSheet, XAxis, YAxis};

fn axes() -> Arc<AxesBox> {
    Arc::new(
        AxesBox::new(BoundingBox::from_origin_size(50.0, 20.0, 200.0, 100.0))
            .expect("valid bounds"),
    )
}

fn x_axis(major: &[f64]) -> XAxis {
    let mut axis = XAxis::new(axes(), Arc::new(StyleSheet::default()));
    axis.set_major_locator(FixedLocator::new(major.to_vec()));
    axis
}

fn collect_positions(axis: &mut XAxis) -> Vec<(TickWhich, Vec<f64>)> {
    axis.iter_tick_groups()
        .map(|group| (group.which, group.positions))
        .collect()
}

#[test]
fn view_interval_filters_locator_output() {
    let mut axis = x_axis(&[1.0, 2.0, 3.0]);

    axis.set_view_interval(0.0, 10.0).expect("view");
    assert_eq!(
        collect_positions(&mut axis),
        vec![(TickWhich::Major, vec![1.0, 2.0, 3.0])]
    );

    axis.set_view_interval(1.5, 2.5).expect("view");
    assert_eq!(
        collect_positions(&mut axis),
        vec![(TickWhich::Major, vec![2.0])]
    );
}

#[test]
fn inverted_view_filters_like_sorted_view() {
    let mut axis = x_axis(&[1.0, 2.0, 3.0]);
    axis.set_view_interval(2.5, 1.5).expect("inverted view");
    assert_eq!(
        collect_positions(&mut axis),
        vec![(TickWhich::Major, vec![2.0])]
    );
}

#[test]
fn empty_minor_class_is_skipped_without_building_artists() {
    let mut axis = x_axis(&[1.0, 2.0]);
    axis.set_view_interval(0.0, 10.0).expect("view");
    axis.set_minor_locator(FixedLocator::new(vec![20.0, 30.0]));

    let whiches: Vec<TickWhich> = axis.iter_tick_groups().map(|group| group.which).collect();
    assert_eq!(whiches, vec![TickWhich::Major]);
    assert!(axis.marker_ids(TickWhich::Minor).is_none());
    assert!(axis.marker_ids(TickWhich::Major).is_some());
}

#[test]
fn no_visible_ticks_yields_nothing() {
    let mut axis = x_axis(&[100.0]);
    axis.set_view_interval(0.0, 10.0).expect("view");
    assert_eq!(axis.iter_tick_groups().count(), 0);
}

#[test]
fn minor_group_precedes_major_and_sits_below_it() {
    let mut axis = x_axis(&[0.0, 5.0, 10.0]);
    axis.set_view_interval(0.0, 10.0).expect("view");
    axis.set_minor_locator(FixedLocator::new(vec![1.0, 2.0, 3.0]));

    let layers: Vec<(TickWhich, f64)> = axis
        .iter_tick_groups()
        .map(|group| (group.which, group.style.z_order))
        .collect();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].0, TickWhich::Minor);
    assert_eq!(layers[1].0, TickWhich::Major);
    assert_relative_eq!(layers[1].1 - layers[0].1, 0.01, epsilon = 1e-12);
}

#[test]
fn markers_hold_near_and_far_coordinates() {
    let mut axis = x_axis(&[0.0, 5.0, 10.0]);
    axis.set_view_interval(0.0, 10.0).expect("view");

    let group = axis.iter_tick_groups().next().expect("major group");
    let [near, far] = group.markers;
    assert_eq!(near.anchor(), TransformAnchor::Tick1);
    assert_eq!(far.anchor(), TransformAnchor::Tick2);
    assert_eq!(near.xdata(), &[0.0, 5.0, 10.0]);
    assert_eq!(near.ydata(), &[0.0, 0.0, 0.0]);
    assert_eq!(far.ydata(), &[1.0, 1.0, 1.0]);

    let near_points = &near.primitive().points;
    let far_points = &far.primitive().points;
    assert_relative_eq!(near_points[1].x, 150.0);
    assert_relative_eq!(near_points[1].y, 120.0);
    assert_relative_eq!(far_points[1].y, 20.0);
    assert_relative_eq!(far_points[2].x, 250.0);
}

#[test]
fn vertical_axis_swaps_primary_coordinate() {
    let mut axis = YAxis::new(axes(), Arc::new(StyleSheet::default()));
    axis.set_view_interval(0.0, 1.0).expect("view");
    axis.set_major_locator(FixedLocator::new(vec![0.25, 0.75]));

    let group = axis.iter_tick_groups().next().expect("major group");
    let [near, far] = group.markers;
    assert_eq!(near.ydata(), &[0.25, 0.75]);
    assert_eq!(near.xdata(), &[0.0, 0.0]);
    assert_eq!(far.xdata(), &[1.0, 1.0]);
    assert_relative_eq!(near.primitive().points[0].x, 50.0);
    assert_relative_eq!(near.primitive().points[0].y, 95.0);
    assert_relative_eq!(far.primitive().points[1].x, 250.0);
}

#[test]
fn markers_are_reused_across_redraws_and_pans() {
    let mut axis = x_axis(&[1.0, 2.0, 3.0, 4.0]);
    axis.set_view_interval(0.0, 10.0).expect("view");
    let mut renderer = NullRenderer::default();

    axis.draw(&mut renderer).expect("first draw");
    let before = axis.marker_ids(TickWhich::Major).expect("built");

    axis.set_view_interval(2.0, 12.0).expect("pan");
    axis.draw(&mut renderer).expect("second draw");
    assert_eq!(axis.marker_ids(TickWhich::Major), Some(before));

    let group = axis.iter_tick_groups().next().expect("major group");
    assert_eq!(group.positions, vec![2.0, 3.0, 4.0]);
    assert_eq!(group.markers[0].xdata(), &[2.0, 3.0, 4.0]);
}

#[test]
fn reset_ticks_builds_fresh_artists() {
    let mut axis = x_axis(&[1.0, 2.0]);
    axis.set_view_interval(0.0, 10.0).expect("view");
    let mut renderer = NullRenderer::default();

    axis.draw(&mut renderer).expect("draw");
    let markers = axis.marker_ids(TickWhich::Major).expect("built");
    let labels: Vec<_> = axis
        .label_cache(TickWhich::Major)
        .expect("labels")
        .iter()
        .map(|label| label.id())
        .collect();

    axis.reset_ticks();
    assert_eq!(axis.label_cache_len(TickWhich::Major), 0);
    axis.draw(&mut renderer).expect("draw");

    let rebuilt = axis.marker_ids(TickWhich::Major).expect("rebuilt");
    assert_ne!(rebuilt[0], markers[0]);
    assert_ne!(rebuilt[1], markers[1]);
    let relabeled: Vec<_> = axis
        .label_cache(TickWhich::Major)
        .expect("labels")
        .iter()
        .map(|label| label.id())
        .collect();
    assert_eq!(relabeled.len(), labels.len());
    assert!(relabeled.iter().all(|id| !labels.contains(id)));
}
