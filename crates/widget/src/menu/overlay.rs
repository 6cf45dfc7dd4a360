//! The panel of a menu, displayed above the rest of the interface.
use super::State;
use super::list::MenuList;
use super::style::{Catalog, Status};

use crate::core::keyboard;
use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay;
use crate::core::renderer;
use crate::core::touch;
use crate::core::widget::{Id, Operation, Tree};
use crate::core::{Border, Clipboard, Event, Layout, Rectangle, Shadow, Shell, Size, Vector};

use icy_dropdown_core::{Align, ClickTarget, Config, Placement};

/// The panel of an open [`Menu`](super::Menu).
pub(super) struct Panel<'a, 'b, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    pub(super) state: &'b mut State,
    pub(super) trees: &'b mut [Tree],
    pub(super) list: &'b mut MenuList<'a, Message, Theme, Renderer>,
    pub(super) trigger: Rectangle,
    pub(super) config: Config,
    pub(super) class: &'b Theme::Class<'a>,
    pub(super) on_toggle: Option<&'b dyn Fn(bool) -> Message>,
    pub(super) id: Option<&'b Id>,
}

impl<Message, Theme, Renderer> Panel<'_, '_, Message, Theme, Renderer>
where
    Message: Clone,
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    /// Activates the item at `index`, if any, and applies the close policy
    /// to a click inside the panel.
    fn activate(&mut self, index: Option<usize>, shell: &mut Shell<'_, Message>) {
        if let Some(message) = index
            .and_then(|index| self.list.items.get(index))
            .and_then(|item| item.on_press.clone())
        {
            shell.publish(message);
        }

        if let Some(transition) = self.state.menu.click(&self.config, ClickTarget::Panel) {
            self.state.apply(transition, self.on_toggle, self.id, shell);
        }
    }

    /// Returns the translation of a panel of the given [`Size`] at the
    /// current point of its transition.
    fn translation(&self, panel: Size) -> Vector {
        self.config
            .animation
            .translation(self.config.direction, panel, self.state.progress())
    }

    /// Moves the focus to the next item and returns true if the key press
    /// was consumed.
    ///
    /// Tab only enters the panel while the cursor is over it. Once an item
    /// has focus, it keeps cycling through the items.
    pub(super) fn cycle_focus(&mut self, backwards: bool, is_over: bool) -> bool {
        if !self.state.menu.markers().item_tab_index.is_reachable()
            || (self.state.focused.is_none() && !is_over)
        {
            return false;
        }

        self.state.focused = next_focus(self.state.focused, self.list.len(), backwards);
        self.state.focused.is_some()
    }
}

impl<Message, Theme, Renderer> overlay::Overlay<Message, Theme, Renderer>
    for Panel<'_, '_, Message, Theme, Renderer>
where
    Message: Clone,
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, bounds: Size) -> layout::Node {
        let width = (self.config.effective_align() == Align::Stretch).then_some(self.trigger.width);

        let node = self.list.layout(self.trees, renderer, bounds, width);

        let placement = Placement::compute(&self.config, self.trigger.size(), node.size());
        let position = placement.bounds(self.trigger, node.size()).position();

        node.move_to(position)
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        let bounds = layout.bounds();
        let progress = self.state.progress();

        let translation = self.translation(bounds.size());
        let cursor = translate(cursor, translation);

        let opacity = if self.config.animation.is_animated() {
            progress
        } else {
            1.0
        };

        let appearance = theme.style(self.class, Status::Opened);
        let is_interactive = !self.state.menu.markers().hidden;

        renderer.with_translation(translation, |renderer| {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border: Border {
                        color: appearance.panel_border.color.scale_alpha(opacity),
                        ..appearance.panel_border
                    },
                    shadow: Shadow {
                        color: appearance.panel_shadow.color.scale_alpha(opacity),
                        ..appearance.panel_shadow
                    },
                    ..renderer::Quad::default()
                },
                appearance.panel_background.scale_alpha(opacity),
            );

            let item_style = renderer::Style {
                text_color: appearance.item_text_color.scale_alpha(opacity),
            };

            for (index, ((item, tree), item_layout)) in self
                .list
                .items
                .iter()
                .zip(self.trees.iter())
                .zip(layout.children())
                .enumerate()
            {
                let item_bounds = item_layout.bounds();

                let is_highlighted = is_interactive
                    && (self.state.focused == Some(index)
                        || (item.on_press.is_some() && cursor.is_over(item_bounds)));

                if is_highlighted {
                    renderer.fill_quad(
                        renderer::Quad {
                            bounds: item_bounds,
                            border: appearance.item_border,
                            ..renderer::Quad::default()
                        },
                        appearance.item_highlight.scale_alpha(opacity),
                    );
                }

                let Some(content_layout) = item_layout.children().next() else {
                    continue;
                };

                item.content.as_widget().draw(
                    tree,
                    renderer,
                    theme,
                    &item_style,
                    content_layout,
                    cursor,
                    &bounds,
                );
            }
        });
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) {
        // A closing panel is still drawn, but no longer takes input.
        if self.state.menu.markers().hidden {
            return;
        }

        let bounds = layout.bounds();
        let cursor = translate(cursor, self.translation(bounds.size()));

        for ((item, tree), item_layout) in self
            .list
            .items
            .iter_mut()
            .zip(self.trees.iter_mut())
            .zip(layout.children())
        {
            let Some(content_layout) = item_layout.children().next() else {
                continue;
            };

            item.content.as_widget_mut().update(
                tree,
                event,
                content_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                &bounds,
            );
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                // Presses outside of the panel are handled by the trigger.
                if !cursor.is_over(bounds) {
                    return;
                }

                let pressed = layout
                    .children()
                    .position(|item| cursor.is_over(item.bounds()));

                self.activate(pressed, shell);
                shell.capture_event();
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match key {
                keyboard::Key::Named(keyboard::key::Named::Tab) => {
                    if self.cycle_focus(modifiers.shift(), cursor.is_over(bounds)) {
                        shell.capture_event();
                        shell.request_redraw();
                    }
                }
                keyboard::Key::Named(
                    keyboard::key::Named::Enter | keyboard::key::Named::Space,
                )
                    if self.state.focused.is_some() =>
                {
                    self.activate(self.state.focused, shell);
                    shell.capture_event();
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();
        let cursor = translate(cursor, self.translation(bounds.size()));

        if !cursor.is_over(bounds) {
            return mouse::Interaction::None;
        }

        for ((item, tree), item_layout) in self
            .list
            .items
            .iter()
            .zip(self.trees.iter())
            .zip(layout.children())
        {
            if !cursor.is_over(item_layout.bounds()) {
                continue;
            }

            if item.on_press.is_some() {
                return mouse::Interaction::Pointer;
            }

            if let Some(content_layout) = item_layout.children().next() {
                return item
                    .content
                    .as_widget()
                    .mouse_interaction(tree, content_layout, cursor, &bounds, renderer)
                    .max(mouse::Interaction::Idle);
            }
        }

        mouse::Interaction::Idle
    }

    fn operate(
        &mut self,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        operation.container(self.id, layout.bounds());

        operation.traverse(&mut |operation| {
            for ((item, tree), item_layout) in self
                .list
                .items
                .iter_mut()
                .zip(self.trees.iter_mut())
                .zip(layout.children())
            {
                let Some(content_layout) = item_layout.children().next() else {
                    continue;
                };

                item.content
                    .as_widget_mut()
                    .operate(tree, content_layout, renderer, operation);
            }
        });
    }
}

/// Moves the cursor into the untranslated space of a sliding panel.
fn translate(cursor: mouse::Cursor, translation: Vector) -> mouse::Cursor {
    match cursor.position() {
        Some(position) => mouse::Cursor::Available(position - translation),
        None => cursor,
    }
}

/// Returns the item that receives focus after `current` when tabbing
/// through `count` items.
fn next_focus(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }

    Some(match (current, backwards) {
        (None, false) => 0,
        (None, true) => count - 1,
        (Some(index), false) => (index + 1) % count,
        (Some(index), true) => (index + count - 1) % count,
    })
}

#[cfg(test)]
mod tests {
    use super::next_focus;

    #[test]
    fn tab_cycles_forward() {
        assert_eq!(next_focus(None, 3, false), Some(0));
        assert_eq!(next_focus(Some(0), 3, false), Some(1));
        assert_eq!(next_focus(Some(2), 3, false), Some(0));
    }

    #[test]
    fn shift_tab_cycles_backward() {
        assert_eq!(next_focus(None, 3, true), Some(2));
        assert_eq!(next_focus(Some(0), 3, true), Some(2));
        assert_eq!(next_focus(Some(2), 3, true), Some(1));
    }

    #[test]
    fn empty_lists_take_no_focus() {
        assert_eq!(next_focus(None, 0, false), None);
        assert_eq!(next_focus(Some(1), 0, true), None);
    }
}
