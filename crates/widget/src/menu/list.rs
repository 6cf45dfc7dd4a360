//! Lay out the items of a menu.
use crate::core::layout;
use crate::core::widget::Tree;
use crate::core::{Element, Padding, Pixels, Point, Size};

/// The default [`Padding`] of a [`MenuItem`].
pub const DEFAULT_ITEM_PADDING: Padding = Padding {
    top: 6.0,
    bottom: 6.0,
    right: 12.0,
    left: 12.0,
};

/// The list of items shown in the panel of a [`Menu`](super::Menu).
pub struct MenuList<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer> {
    pub(super) items: Vec<MenuItem<'a, Message, Theme, Renderer>>,
    padding: Padding,
    spacing: f32,
}

impl<'a, Message, Theme, Renderer> MenuList<'a, Message, Theme, Renderer> {
    /// Creates an empty [`MenuList`].
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a [`MenuList`] with the given items.
    pub fn with_items(items: impl IntoIterator<Item = MenuItem<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            items: items.into_iter().collect(),
            padding: Padding::new(4.0),
            spacing: 0.0,
        }
    }

    /// Adds a [`MenuItem`] to the [`MenuList`].
    #[must_use]
    pub fn push(mut self, item: MenuItem<'a, Message, Theme, Renderer>) -> Self {
        self.items.push(item);
        self
    }

    /// Sets the [`Padding`] around the items.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the vertical spacing between the items.
    #[must_use]
    pub fn spacing(mut self, spacing: impl Into<Pixels>) -> Self {
        self.spacing = spacing.into().0;
        self
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the [`MenuList`] has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lays out the items in a column.
    ///
    /// Every item is as wide as the widest one; `width` forces the width of
    /// the whole list.
    pub(super) fn layout(
        &mut self,
        trees: &mut [Tree],
        renderer: &Renderer,
        max: Size,
        width: Option<f32>,
    ) -> layout::Node
    where
        Renderer: crate::core::Renderer,
    {
        let padding = self.padding;
        let max_width = width.unwrap_or(max.width) - padding.x();

        let mut contents = Vec::with_capacity(self.items.len());
        let mut widest = 0.0_f32;

        for (item, tree) in self.items.iter_mut().zip(trees.iter_mut()) {
            let limits = layout::Limits::new(
                Size::ZERO,
                Size::new(
                    (max_width - item.padding.x()).max(0.0),
                    f32::INFINITY,
                ),
            );

            let node = item
                .content
                .as_widget_mut()
                .layout(tree, renderer, &limits);

            widest = widest.max(node.size().width + item.padding.x());
            contents.push(node);
        }

        let inner_width = width.map_or(widest, |width| (width - padding.x()).max(0.0));

        let mut children = Vec::with_capacity(contents.len());
        let mut y = padding.top;

        for (node, item) in contents.into_iter().zip(&self.items) {
            if !children.is_empty() {
                y += self.spacing;
            }

            let height = node.size().height + item.padding.y();

            children.push(
                layout::Node::with_children(
                    Size::new(inner_width, height),
                    vec![node.move_to(Point::new(item.padding.left, item.padding.top))],
                )
                .move_to(Point::new(padding.left, y)),
            );

            y += height;
        }

        layout::Node::with_children(
            Size::new(inner_width + padding.x(), y + padding.bottom),
            children,
        )
    }
}

impl<Message, Theme, Renderer> Default for MenuList<'_, Message, Theme, Renderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Message, Theme, Renderer> FromIterator<MenuItem<'a, Message, Theme, Renderer>>
    for MenuList<'a, Message, Theme, Renderer>
{
    fn from_iter<T: IntoIterator<Item = MenuItem<'a, Message, Theme, Renderer>>>(iter: T) -> Self {
        Self::with_items(iter)
    }
}

/// An entry of a [`MenuList`].
///
/// Its keyboard reachability is managed by the [`Menu`](super::Menu) that
/// displays it: items can only be focused while the menu is open.
pub struct MenuItem<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer> {
    pub(super) content: Element<'a, Message, Theme, Renderer>,
    pub(super) on_press: Option<Message>,
    padding: Padding,
}

impl<'a, Message, Theme, Renderer> MenuItem<'a, Message, Theme, Renderer> {
    /// Creates a new [`MenuItem`] with the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_press: None,
            padding: DEFAULT_ITEM_PADDING,
        }
    }

    /// Sets the message produced when the [`MenuItem`] is pressed.
    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Sets the message produced when the [`MenuItem`] is pressed, if
    /// `Some`.
    #[must_use]
    pub fn on_press_maybe(mut self, message: Option<Message>) -> Self {
        self.on_press = message;
        self
    }

    /// Sets the [`Padding`] of the [`MenuItem`].
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Returns true if pressing the [`MenuItem`] produces a message.
    pub fn is_interactive(&self) -> bool {
        self.on_press.is_some()
    }
}
