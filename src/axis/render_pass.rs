use smallvec::SmallVec;
use tracing::trace;

use crate::core::{BoundingBox, TickWhich};
use crate::error::AxisResult;
use crate::render::{LinePrimitive, Renderer};

use super::Axis;
use super::orientation::Orientation;
use super::tick_group::{TickGroup, TickGroups};

type Extents = SmallVec<[BoundingBox; 16]>;

/// What one pass over the tick groups left for the decorations.
#[derive(Debug, Default)]
struct TickPassOutput {
    extents: Extents,
    /// The major class had visible ticks, so its formatter saw this view.
    major_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Draw,
    Measure,
}

impl<O: Orientation> Axis<O> {
    /// Draws tick marks, grid lines, tick labels, the title and the offset text.
    ///
    /// Does nothing for an invisible axis. Renderer errors abort the pass.
    pub fn draw(&mut self, renderer: &mut dyn Renderer) -> AxisResult<()> {
        if !self.visible {
            return Ok(());
        }

        renderer.open_group(O::GROUP_NAME);
        let output = self.tick_pass(renderer, Pass::Draw)?;
        self.layout_decorations(&output);
        for text in [&self.title, &self.offset_text] {
            if text.is_drawable() {
                renderer.draw_text(text.primitive())?;
            }
        }
        renderer.close_group(O::GROUP_NAME);
        Ok(())
    }

    /// Device box covering the tick labels, title and offset text.
    ///
    /// Runs the label layout of [`Axis::draw`] without drawing. Degenerate
    /// extents are ignored; `None` when nothing remains or the axis is hidden.
    pub fn tight_bbox(&mut self, renderer: &mut dyn Renderer) -> AxisResult<Option<BoundingBox>> {
        if !self.visible {
            return Ok(None);
        }

        let output = self.tick_pass(renderer, Pass::Measure)?;
        self.layout_decorations(&output);
        let mut extents = output.extents;
        for text in [&self.title, &self.offset_text] {
            if text.is_drawable() {
                extents.push(renderer.text_extent(text.primitive())?);
            }
        }
        Ok(BoundingBox::union_all(extents))
    }

    fn tick_pass(
        &mut self,
        renderer: &mut dyn Renderer,
        pass: Pass,
    ) -> AxisResult<TickPassOutput> {
        let geometry = &self.geometry;
        let grid_style = self.grid_style;
        let groups = TickGroups::<O>::new(geometry, &self.sheet, &mut self.minor, &mut self.major);

        let mut output = TickPassOutput::default();
        for group in groups {
            let TickGroup {
                which,
                positions,
                markers,
                style,
                labels,
                formatter,
            } = group;
            output.major_visible |= which == TickWhich::Major;

            if pass == Pass::Draw {
                for side in markers {
                    renderer.draw_markers(side.primitive())?;
                }
                if style.grid_on {
                    for value in &positions {
                        let (from, to) = geometry.gridline::<O>(*value);
                        let line = LinePrimitive::between(
                            from,
                            to,
                            grid_style.line_width,
                            grid_style.color,
                        )
                        .with_stroke_style(grid_style.line_style);
                        renderer.draw_line(&line)?;
                    }
                }
            }

            let Some(formatter) = formatter else {
                trace!(
                    axis = ?O::KIND,
                    which = ?which,
                    ticks = positions.len(),
                    "tick group without labels"
                );
                continue;
            };
            formatter.set_locs(&positions);

            let (dx, dy) = O::label_offset(style.pad);
            let mut slot = 0;
            for (index, value) in positions.iter().copied().enumerate() {
                let text = formatter.format(value, index);
                if text.is_empty() {
                    continue;
                }

                let label = labels.get_label(slot, O::LABEL_V_ALIGN, O::LABEL_H_ALIGN);
                slot += 1;
                label.place(value, geometry.to_device::<O>(value, 0.0).offset(dx, dy));
                label.set_text(&text);
                if pass == Pass::Draw {
                    renderer.draw_text(label.primitive())?;
                }
                output.extents.push(renderer.text_extent(label.primitive())?);
            }
            trace!(
                axis = ?O::KIND,
                which = ?which,
                ticks = positions.len(),
                labels = slot,
                "tick group"
            );
        }
        Ok(output)
    }

    fn layout_decorations(&mut self, output: &TickPassOutput) {
        let labels = BoundingBox::union_all(output.extents.iter().copied());
        let axes = self.geometry.axes_bounds();

        self.title
            .apply_placement(O::title_placement(axes, labels, self.title_style.pad));

        // a formatter keeps the offset of the last view it was given ticks for
        let offset = match &self.major.formatter {
            Some(formatter) if output.major_visible => formatter.offset_text(),
            _ => String::new(),
        };
        self.offset_text.set_text(&offset);
        self.offset_text
            .apply_placement(O::offset_text_placement(axes, labels));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::axis::{XAxis, YAxis};
    use crate::core::{AxesBox, BoundingBox, FixedFormatter, FixedLocator, TickWhich};
    use crate::render::{FrameRecorder, NullRenderer, TextHAlign, TextVAlign};
    use crate::style::StyleSheet;

    fn axes() -> Arc<AxesBox> {
        Arc::new(
            AxesBox::new(BoundingBox::from_origin_size(50.0, 20.0, 200.0, 100.0))
                .expect("valid bounds"),
        )
    }

    #[test]
    fn x_labels_hang_below_the_axis() {
        let mut axis = XAxis::new(axes(), Arc::new(StyleSheet::default()));
        axis.set_view_interval(0.0, 10.0).expect("view");
        axis.set_major_locator(FixedLocator::new(vec![0.0, 5.0, 10.0]));
        axis.set_major_formatter(Some(Box::new(FixedFormatter::new(["a", "b", "c"]))));

        let mut recorder = FrameRecorder::new();
        axis.draw(&mut recorder).expect("draw");
        let frame = recorder.frame();
        assert_eq!(frame.text_contents(), vec!["a", "b", "c"]);
        assert_eq!(frame.groups, vec!["xaxis".to_owned()]);

        let middle = &frame.texts[1];
        assert_eq!(middle.x, 150.0);
        // bottom edge + default outward pad (3.5 + 3.5)
        assert_eq!(middle.y, 127.0);
        assert_eq!(middle.v_align, TextVAlign::Top);
        assert_eq!(middle.h_align, TextHAlign::Center);
    }

    #[test]
    fn y_labels_sit_left_of_the_axis() {
        let mut axis = YAxis::new(axes(), Arc::new(StyleSheet::default()));
        axis.set_view_interval(0.0, 1.0).expect("view");
        axis.set_major_locator(FixedLocator::new(vec![0.5]));

        let mut recorder = FrameRecorder::new();
        axis.draw(&mut recorder).expect("draw");
        let label = &recorder.frame().texts[0];
        assert_eq!((label.x, label.y), (43.0, 70.0));
        assert_eq!(label.h_align, TextHAlign::Right);
        assert_eq!(label.v_align, TextVAlign::Center);
    }

    #[test]
    fn hidden_axis_is_silent() {
        let mut axis = XAxis::new(axes(), Arc::new(StyleSheet::default()));
        axis.set_visible(false);

        let mut renderer = NullRenderer::default();
        axis.draw(&mut renderer).expect("draw");
        assert_eq!(renderer.marker_batches, 0);
        assert_eq!(renderer.text_count, 0);
        assert!(axis.tight_bbox(&mut renderer).expect("bbox").is_none());
        assert!(axis.marker_ids(TickWhich::Major).is_none());
    }
}
