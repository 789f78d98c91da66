use std::sync::Arc;

use approx::assert_relative_eq;
use fast_axis::core::{
    AxesBox, BoundingBox, FixedLocator, FuncFormatter, NullLocator, TickWhich,
};
use fast_axis::render::{FrameRecorder, NullRenderer, Renderer, approximate_text_extent};
use fast_axis::{StyleSheet, XAxis, YAxis};

fn axes() -> Arc<AxesBox> {
    Arc::new(
        AxesBox::new(BoundingBox::from_origin_size(50.0, 20.0, 200.0, 100.0))
            .expect("valid bounds"),
    )
}

fn x_axis(major: &[f64]) -> XAxis {
    let mut axis = XAxis::new(axes(), Arc::new(StyleSheet::default()));
    axis.set_view_interval(0.0, 10.0).expect("view");
    axis.set_major_locator(FixedLocator::new(major.to_vec()));
    axis
}

#[test]
fn repeated_queries_return_equal_boxes() {
    let mut axis = x_axis(&[1.0, 2.5, 9.0]);
    axis.set_label_text("distance");
    let mut renderer = NullRenderer::default();

    let first = axis.tight_bbox(&mut renderer).expect("first");
    let second = axis.tight_bbox(&mut renderer).expect("second");
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn query_draws_nothing_and_matches_a_later_draw() {
    let mut axis = x_axis(&[1.0, 5.0, 9.0]);
    let mut renderer = NullRenderer::default();
    let bbox = axis
        .tight_bbox(&mut renderer)
        .expect("bbox")
        .expect("labels visible");
    assert_eq!(renderer.marker_batches, 0);
    assert_eq!(renderer.text_count, 0);
    assert_eq!(renderer.line_count, 0);

    let mut recorder = FrameRecorder::new();
    axis.draw(&mut recorder).expect("draw");
    let drawn = recorder
        .frame()
        .texts
        .iter()
        .map(approximate_text_extent)
        .reduce(BoundingBox::union)
        .expect("texts drawn");
    assert_eq!(bbox, drawn);
}

#[test]
fn box_covers_labels_title_and_offset_text() {
    let mut axis = XAxis::new(axes(), Arc::new(StyleSheet::default()));
    axis.set_view_interval(100_000.0, 100_010.0).expect("view");
    axis.set_major_locator(FixedLocator::new(vec![100_002.0, 100_008.0]));
    axis.set_label_text("offset axis");

    let mut renderer = NullRenderer::default();
    let bbox = axis
        .tight_bbox(&mut renderer)
        .expect("bbox")
        .expect("visible");

    let mut extents = Vec::new();
    for text in [axis.title(), axis.offset_text()] {
        assert!(text.is_drawable());
        extents.push(renderer.text_extent(text.primitive()).expect("extent"));
    }
    for label in axis.label_cache(TickWhich::Major).expect("labels").iter() {
        extents.push(renderer.text_extent(label.primitive()).expect("extent"));
    }
    let expected = BoundingBox::union_all(extents).expect("non-empty");
    assert_relative_eq!(bbox.x0, expected.x0);
    assert_relative_eq!(bbox.y0, expected.y0);
    assert_relative_eq!(bbox.x1, expected.x1);
    assert_relative_eq!(bbox.y1, expected.y1);
}

#[test]
fn nothing_visible_yields_none() {
    let mut axis = x_axis(&[]);
    axis.set_major_locator(NullLocator);
    let mut renderer = NullRenderer::default();
    assert!(axis.tight_bbox(&mut renderer).expect("bbox").is_none());

    let mut silent = x_axis(&[1.0, 2.0]);
    silent.set_major_formatter(Some(Box::new(FuncFormatter::new(|_, _| String::new()))));
    assert!(silent.tight_bbox(&mut renderer).expect("bbox").is_none());
    assert_eq!(silent.label_cache_len(TickWhich::Major), 0);
}

#[test]
fn hidden_axis_yields_none() {
    let mut axis = x_axis(&[1.0, 2.0]);
    axis.set_visible(false);
    let mut renderer = NullRenderer::default();
    assert!(axis.tight_bbox(&mut renderer).expect("bbox").is_none());
    assert_eq!(renderer.extent_queries, 0);
}

#[test]
fn y_box_extends_left_of_the_axes() {
    let mut axis = YAxis::new(axes(), Arc::new(StyleSheet::default()));
    axis.set_view_interval(0.0, 100.0).expect("view");
    axis.set_major_locator(FixedLocator::new(vec![0.0, 50.0, 100.0]));
    let mut renderer = NullRenderer::default();
    let bbox = axis
        .tight_bbox(&mut renderer)
        .expect("bbox")
        .expect("visible");
    assert!(bbox.x1 <= 50.0);
    assert_relative_eq!(bbox.x1, 43.0);
}
