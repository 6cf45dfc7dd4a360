//! Menus reveal a panel of items next to a trigger.
//!
//! # Example
//! ```ignore
//! use iced_widget::text;
//! use icy_dropdown_widget::{Element, menu, menu_item, menu_list};
//! use icy_dropdown_widget::menu::{Align, Animation, Direction};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Open,
//!     Save,
//! }
//!
//! fn view<'a>() -> Element<'a, Message> {
//!     menu(
//!         text("File"),
//!         menu_list([
//!             menu_item(text("Open")).on_press(Message::Open),
//!             menu_item(text("Save")).on_press(Message::Save),
//!         ]),
//!     )
//!     .direction(Direction::Bottom)
//!     .align(Align::Start)
//!     .animation(Animation::Slide)
//!     .into()
//! }
//! ```
mod list;
mod overlay;
mod style;

pub use list::{DEFAULT_ITEM_PADDING, MenuItem, MenuList};
pub use style::{Catalog, Status, Style, StyleFn, default, plain};

pub use icy_dropdown_core::{
    Align, Animation, ClosePolicy, Config, Direction, Error, Options, Ownership, Placement,
    StatePriority,
};

use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay as core_overlay;
use crate::core::renderer;
use crate::core::time::Instant;
use crate::core::touch;
use crate::core::widget::{Id, Operation};
use crate::core::widget::tree::{self, Tree};
use crate::core::window;
use crate::core::{
    Clipboard, Element, Event, Layout, Length, Padding, Pixels, Rectangle, Shell, Size, Vector,
    Widget,
};

use icy_dropdown_core::{ClickTarget, MenuState, Transition};

use overlay::Panel;

/// The default [`Padding`] of the trigger of a [`Menu`].
pub const DEFAULT_PADDING: Padding = Padding {
    top: 5.0,
    bottom: 5.0,
    right: 10.0,
    left: 10.0,
};

/// A trigger that reveals a panel of [`MenuItem`]s.
///
/// By default, the [`Menu`] owns its open state. Use [`Menu::outer`] to own
/// it yourself.
pub struct Menu<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    trigger: Element<'a, Message, Theme, Renderer>,
    list: MenuList<'a, Message, Theme, Renderer>,
    config: Config,
    ownership: Ownership,
    on_toggle: Option<Box<dyn Fn(bool) -> Message + 'a>>,
    id: Option<Id>,
    width: Length,
    height: Length,
    padding: Padding,
    class: Theme::Class<'a>,
}

impl<'a, Message, Theme, Renderer> Menu<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    /// Creates a new [`Menu`] that owns its open state.
    pub fn new(
        trigger: impl Into<Element<'a, Message, Theme, Renderer>>,
        list: MenuList<'a, Message, Theme, Renderer>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            list,
            config: Config::default(),
            ownership: Ownership::default(),
            on_toggle: None,
            id: None,
            width: Length::Shrink,
            height: Length::Shrink,
            padding: DEFAULT_PADDING,
            class: <Theme as Catalog>::default(),
        }
    }

    /// Creates a new [`Menu`] whose open state is owned by the caller.
    ///
    /// The [`Menu`] always shows `state`; activating it produces the
    /// message returned by `on_toggle` with the requested state.
    pub fn outer(
        trigger: impl Into<Element<'a, Message, Theme, Renderer>>,
        list: MenuList<'a, Message, Theme, Renderer>,
        state: bool,
        on_toggle: impl Fn(bool) -> Message + 'a,
    ) -> Self {
        let mut menu = Self::new(trigger, list).on_toggle(on_toggle);
        menu.ownership = Ownership::Outer { state };
        menu
    }

    /// Creates a new [`Menu`] from loosely typed [`Options`].
    ///
    /// Fails if the options ask for outer ownership without both a state
    /// and an `on_toggle` setter.
    pub fn from_options<F>(
        trigger: impl Into<Element<'a, Message, Theme, Renderer>>,
        list: MenuList<'a, Message, Theme, Renderer>,
        options: &Options,
        on_toggle: Option<F>,
    ) -> Result<Self, Error>
    where
        F: Fn(bool) -> Message + 'a,
    {
        let (config, ownership) = options.resolve(on_toggle.is_some())?;

        let mut menu = Self::new(trigger, list);
        menu.config = config;
        menu.ownership = ownership;
        menu.id = options.id.clone().map(Id::from);

        if let Some(on_toggle) = on_toggle {
            menu = menu.on_toggle(on_toggle);
        }

        Ok(menu)
    }

    /// Sets the [`Direction`] the panel opens in.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Sets the [`Align`]ment of the panel with the trigger.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.config.align = align;
        self
    }

    /// Sets the [`Animation`] of the panel.
    #[must_use]
    pub fn animation(mut self, animation: Animation) -> Self {
        self.config.animation = animation;
        self
    }

    /// Sets the distance between the trigger and the panel.
    #[must_use]
    pub fn gap(mut self, gap: impl Into<Pixels>) -> Self {
        self.config.gap = gap.into().0;
        self
    }

    /// Sets the [`ClosePolicy`] of the [`Menu`].
    #[must_use]
    pub fn close_policy(mut self, close_policy: ClosePolicy) -> Self {
        self.config.close_policy = close_policy;
        self
    }

    /// Sets whether the trigger ignores activation.
    ///
    /// An open [`Menu`] stays open when disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Sets the state a [`Menu`] that owns its state starts with.
    ///
    /// For a [`Menu::outer`], this sets the state owned by the caller.
    #[must_use]
    pub fn state(mut self, is_open: bool) -> Self {
        self.ownership = match self.ownership {
            Ownership::Inner { .. } => Ownership::Inner { initial: is_open },
            Ownership::Outer { .. } => Ownership::Outer { state: is_open },
        };
        self
    }

    /// Sets the message produced every time the [`Menu`] opens or closes.
    #[must_use]
    pub fn on_toggle(mut self, on_toggle: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_toggle = Some(Box::new(on_toggle));
        self
    }

    /// Sets the [`Id`] of the panel.
    ///
    /// Operations see the open panel as a container with this [`Id`].
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the width of the trigger.
    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height of the trigger.
    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the [`Padding`] of the trigger.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the style of the [`Menu`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`Menu`].
    #[cfg(feature = "advanced")]
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }

    /// Returns the [`Config`] of the [`Menu`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Ownership`] of the open state of the [`Menu`].
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Returns the [`Id`] of the panel, if any.
    pub fn panel_id(&self) -> Option<&Id> {
        self.id.as_ref()
    }
}

/// The state of a mounted [`Menu`].
struct State {
    menu: MenuState,
    transition: crate::core::Animation<bool>,
    now: Instant,
    focused: Option<usize>,
}

impl State {
    fn new(config: &Config, ownership: Ownership) -> Self {
        let menu = MenuState::mount(config, ownership);

        Self {
            transition: crate::core::Animation::new(menu.is_open()).quick(),
            now: Instant::now(),
            focused: None,
            menu,
        }
    }

    /// Applies a [`Transition`] and notifies the caller.
    fn apply<Message>(
        &mut self,
        transition: Transition,
        on_toggle: Option<&dyn Fn(bool) -> Message>,
        id: Option<&Id>,
        shell: &mut Shell<'_, Message>,
    ) {
        self.now = Instant::now();
        self.transition.go_mut(transition.is_open, self.now);

        if !transition.markers.item_tab_index.is_reachable() {
            self.focused = None;
        }

        log::debug!(
            "menu {id:?} {}",
            if transition.is_open { "opened" } else { "closed" }
        );

        if let Some(on_toggle) = on_toggle {
            shell.publish(on_toggle(transition.is_open));
        }

        shell.request_redraw();
    }

    /// Forces the state owned by the caller, without echoing it back.
    fn sync(&mut self, ownership: Ownership) {
        if let Some(transition) = self.menu.sync(ownership) {
            self.now = Instant::now();
            self.transition.go_mut(transition.is_open, self.now);

            if !transition.markers.item_tab_index.is_reachable() {
                self.focused = None;
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.transition.is_animating(self.now)
    }

    /// Returns true if the panel has to be displayed.
    fn is_visible(&self, animation: Animation) -> bool {
        !self.menu.markers().hidden || (animation.is_animated() && self.is_animating())
    }

    /// Returns how far the panel is in its transition, from `0.0` (closed)
    /// to `1.0` (open).
    fn progress(&self) -> f32 {
        self.transition.interpolate(0.0, 1.0, self.now)
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Menu<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new(&self.config, self.ownership))
    }

    fn children(&self) -> Vec<Tree> {
        std::iter::once(Tree::new(&self.trigger))
            .chain(self.list.items.iter().map(|item| Tree::new(&item.content)))
            .collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.state.downcast_mut::<State>().sync(self.ownership);

        let children: Vec<_> = std::iter::once(&self.trigger)
            .chain(self.list.items.iter().map(|item| &item.content))
            .collect();

        tree.diff_children(&children);
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::padded(limits, self.width, self.height, self.padding, |limits| {
            self.trigger
                .as_widget_mut()
                .layout(&mut tree.children[0], renderer, limits)
        })
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.trigger.as_widget_mut().operate(
            &mut tree.children[0],
            content_layout,
            renderer,
            operation,
        );
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();

        match event {
            Event::Window(window::Event::RedrawRequested(now)) => {
                state.now = *now;

                if state.is_animating() {
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                let transition = if cursor.is_over(layout.bounds()) {
                    if self.config.disabled {
                        None
                    } else {
                        shell.capture_event();
                        state.menu.activate_trigger(&self.config)
                    }
                } else {
                    state.menu.click(&self.config, ClickTarget::Outside)
                };

                if let Some(transition) = transition {
                    state.apply(
                        transition,
                        self.on_toggle.as_deref(),
                        self.id.as_ref(),
                        shell,
                    );
                }
            }
            _ => {}
        }

        if shell.is_event_captured() {
            return;
        }

        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.trigger.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        let status = if self.config.disabled {
            Status::Disabled
        } else if state.menu.markers().active {
            Status::Opened
        } else if cursor.is_over(bounds) {
            Status::Hovered
        } else {
            Status::Active
        };

        let appearance = theme.style(&self.class, status);

        if appearance.trigger_background.is_some()
            || appearance.trigger_border.width > 0.0
        {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border: appearance.trigger_border,
                    ..renderer::Quad::default()
                },
                appearance
                    .trigger_background
                    .unwrap_or(crate::core::Color::TRANSPARENT.into()),
            );
        }

        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.trigger.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            &renderer::Style {
                text_color: appearance.trigger_text_color,
            },
            content_layout,
            cursor,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            return if self.config.disabled {
                mouse::Interaction::NotAllowed
            } else {
                mouse::Interaction::Pointer
            };
        }

        let Some(content_layout) = layout.children().next() else {
            return mouse::Interaction::None;
        };

        self.trigger.as_widget().mouse_interaction(
            &tree.children[0],
            content_layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<core_overlay::Element<'b, Message, Theme, Renderer>> {
        let is_visible = tree
            .state
            .downcast_ref::<State>()
            .is_visible(self.config.animation);

        if !is_visible {
            return self.trigger.as_widget_mut().overlay(
                &mut tree.children[0],
                layout.children().next()?,
                renderer,
                viewport,
                translation,
            );
        }

        let Tree {
            state, children, ..
        } = tree;

        Some(core_overlay::Element::new(Box::new(Panel {
            state: state.downcast_mut::<State>(),
            trees: &mut children[1..],
            list: &mut self.list,
            trigger: layout.bounds() + translation,
            config: self.config,
            class: &self.class,
            on_toggle: self.on_toggle.as_deref(),
            id: self.id.as_ref(),
        })))
    }
}

impl<'a, Message, Theme, Renderer> From<Menu<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(menu: Menu<'a, Message, Theme, Renderer>) -> Self {
        Self::new(menu)
    }
}

#[cfg(test)]
mod tests;
