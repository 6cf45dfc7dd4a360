//! Place the panel of a menu next to its trigger.
use crate::alignment::{Align, Axis, Direction};
use crate::config::Config;
use crate::{Rectangle, Size, Vector};

/// The position of a panel relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The offset of the top-left corner of the panel from the top-left
    /// corner of the trigger.
    pub offset: Vector,

    /// The width the panel is forced to, if any.
    pub width: Option<f32>,
}

impl Placement {
    /// Computes the [`Placement`] of a panel of the given [`Size`] for a
    /// trigger of the given [`Size`].
    ///
    /// The panel is offset by the extent of the trigger plus the gap along
    /// the axis of the [`Direction`], and aligned along the other axis.
    #[must_use]
    pub fn compute(config: &Config, trigger: Size, panel: Size) -> Self {
        let gap = config.gap;
        let align = config.effective_align();

        let width = (align == Align::Stretch).then_some(trigger.width);
        let panel = Size::new(width.unwrap_or(panel.width), panel.height);

        let main = match config.direction {
            Direction::Bottom => trigger.height + gap,
            Direction::Top => -(gap + panel.height),
            Direction::Right => trigger.width + gap,
            Direction::Left => -(gap + panel.width),
        };

        let offset = match config.direction.axis() {
            Axis::Vertical => {
                let cross = match align {
                    Align::Start | Align::Stretch => 0.0,
                    Align::Center => trigger.width / 2.0 - panel.width / 2.0,
                    Align::End => trigger.width - panel.width,
                };

                Vector::new(cross, main)
            }
            Axis::Horizontal => {
                let cross = match align {
                    Align::Start => 0.0,
                    Align::Center | Align::Stretch => trigger.height / 2.0 - panel.height / 2.0,
                    Align::End => trigger.height - panel.height,
                };

                Vector::new(main, cross)
            }
        };

        log::trace!(
            "placed {}x{} panel at {:?} of {}x{} trigger",
            panel.width,
            panel.height,
            offset,
            trigger.width,
            trigger.height
        );

        Self { offset, width }
    }

    /// Returns the absolute bounds of a panel of the given [`Size`], next to
    /// the given trigger bounds.
    #[must_use]
    pub fn bounds(&self, trigger: Rectangle, panel: Size) -> Rectangle {
        Rectangle::new(
            trigger.position() + self.offset,
            Size::new(self.width.unwrap_or(panel.width), panel.height),
        )
    }
}
