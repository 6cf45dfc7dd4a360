use super::*;

use crate::Theme;
use crate::core::clipboard;
use crate::core::overlay::Overlay;
use crate::core::{Point, widget};

use iced_widget::text;

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Toggled(bool),
    Picked,
}

type TestMenu<'a> = Menu<'a, Message, Theme, ()>;

const BOUNDS: Size = Size::new(800.0, 600.0);

/// The trigger of a [`TestMenu`]: its text takes no space, so it is made
/// of [`DEFAULT_PADDING`] only.
const TRIGGER: Rectangle = Rectangle {
    x: 0.0,
    y: 0.0,
    width: 20.0,
    height: 10.0,
};

fn list<'a>() -> MenuList<'a, Message, Theme, ()> {
    MenuList::with_items([
        MenuItem::new(text("Open")).on_press(Message::Picked),
        MenuItem::new(text("Recent")),
    ])
}

fn inner<'a>() -> TestMenu<'a> {
    Menu::new(text("File"), list())
}

fn press() -> Event {
    Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
}

/// A mounted [`Menu`] and its laid out trigger.
struct Mounted<'a> {
    element: Element<'a, Message, Theme, ()>,
    tree: Tree,
    node: layout::Node,
}

impl<'a> Mounted<'a> {
    fn new(menu: TestMenu<'a>) -> Self {
        let mut element: Element<'a, Message, Theme, ()> = menu.into();
        let mut tree = Tree::new(&element);

        let node = element.as_widget_mut().layout(
            &mut tree,
            &(),
            &layout::Limits::new(Size::ZERO, BOUNDS),
        );

        Self {
            element,
            tree,
            node,
        }
    }

    /// Presses at `position`, returning the published messages and whether
    /// the press was captured.
    fn press_at(&mut self, position: Point) -> (Vec<Message>, bool) {
        let mut messages = Vec::new();

        let captured = {
            let mut shell = Shell::new(&mut messages);

            self.element.as_widget_mut().update(
                &mut self.tree,
                &press(),
                Layout::new(&self.node),
                mouse::Cursor::Available(position),
                &(),
                &mut clipboard::Null,
                &mut shell,
                &Rectangle::with_size(BOUNDS),
            );

            shell.is_event_captured()
        };

        (messages, captured)
    }

    fn has_panel(&mut self) -> bool {
        self.element
            .as_widget_mut()
            .overlay(
                &mut self.tree,
                Layout::new(&self.node),
                &(),
                &Rectangle::with_size(BOUNDS),
                Vector::ZERO,
            )
            .is_some()
    }
}

/// The widget state and item list a [`Panel`] borrows.
struct Opened<'a> {
    state: State,
    trees: Vec<Tree>,
    list: MenuList<'a, Message, Theme, ()>,
    config: Config,
    class: StyleFn<'a, Theme>,
}

impl<'a> Opened<'a> {
    fn new(config: Config) -> Self {
        let list = list();
        let trees = list
            .items
            .iter()
            .map(|item| Tree::new(&item.content))
            .collect();

        Self {
            state: State::new(&config, Ownership::Inner { initial: true }),
            trees,
            list,
            config,
            class: <Theme as Catalog>::default(),
        }
    }

    fn panel<'b>(
        &'b mut self,
        on_toggle: &'b dyn Fn(bool) -> Message,
        id: Option<&'b widget::Id>,
    ) -> Panel<'a, 'b, Message, Theme, ()> {
        Panel {
            state: &mut self.state,
            trees: &mut self.trees,
            list: &mut self.list,
            trigger: TRIGGER,
            config: self.config,
            class: &self.class,
            on_toggle: Some(on_toggle),
            id,
        }
    }
}

fn press_panel(
    panel: &mut Panel<'_, '_, Message, Theme, ()>,
    node: &layout::Node,
    position: Point,
) -> (Vec<Message>, bool) {
    let mut messages = Vec::new();

    let captured = {
        let mut shell = Shell::new(&mut messages);

        panel.update(
            &press(),
            Layout::new(node),
            mouse::Cursor::Available(position),
            &(),
            &mut clipboard::Null,
            &mut shell,
        );

        shell.is_event_captured()
    };

    (messages, captured)
}

#[test]
fn test_builder_sets_config() {
    let menu = inner()
        .direction(Direction::Right)
        .align(Align::End)
        .animation(Animation::Slide)
        .gap(8.0)
        .close_policy(ClosePolicy::AnyClick)
        .disabled(true)
        .id("file");

    let config = menu.config();

    assert_eq!(config.direction, Direction::Right);
    assert_eq!(config.align, Align::End);
    assert_eq!(config.animation, Animation::Slide);
    assert_eq!(config.gap, 8.0);
    assert_eq!(config.close_policy, ClosePolicy::AnyClick);
    assert!(config.disabled);
    assert_eq!(menu.panel_id(), Some(&widget::Id::from("file")));
}

#[test]
fn test_new_menu_owns_closed_state() {
    let menu = inner();

    assert_eq!(menu.ownership(), Ownership::Inner { initial: false });
    assert_eq!(menu.panel_id(), None);
    assert_eq!(*menu.config(), Config::default());
}

#[test]
fn test_state_sets_initial_or_outer_state() {
    assert_eq!(
        inner().state(true).ownership(),
        Ownership::Inner { initial: true }
    );

    let outer = TestMenu::outer(text("File"), list(), false, Message::Toggled);
    assert_eq!(outer.ownership(), Ownership::Outer { state: false });
    assert_eq!(
        outer.state(true).ownership(),
        Ownership::Outer { state: true }
    );
}

#[test]
fn test_from_options_without_setter_fails() {
    let mut options = Options::default();
    options.set("statePriority", "outer").unwrap();
    options.set("state", "true").unwrap();

    let result = TestMenu::from_options(
        text("File"),
        list(),
        &options,
        None::<fn(bool) -> Message>,
    );

    assert!(matches!(result, Err(Error::MissingSetter)));
}

#[test]
fn test_from_options_without_state_fails() {
    let mut options = Options::default();
    options.set("statePriority", "outer").unwrap();

    let result = TestMenu::from_options(
        text("File"),
        list(),
        &options,
        Some(Message::Toggled),
    );

    assert!(matches!(result, Err(Error::MissingState)));
}

#[test]
fn test_from_options_outer() {
    let mut options = Options::default();
    options.set("statePriority", "outer").unwrap();
    options.set("state", "true").unwrap();
    options.set("direction", "top").unwrap();
    options.set("id", "tools").unwrap();

    let Ok(menu) = TestMenu::from_options(
        text("Tools"),
        list(),
        &options,
        Some(Message::Toggled),
    ) else {
        panic!("outer options with state and setter are valid");
    };

    assert_eq!(menu.ownership(), Ownership::Outer { state: true });
    assert_eq!(menu.config().direction, Direction::Top);
    assert_eq!(
        menu.panel_id(),
        Some(&widget::Id::from(String::from("tools")))
    );
}

#[test]
fn test_state_starts_settled() {
    let config = Config::default();

    let closed = State::new(&config, Ownership::default());
    assert!(!closed.is_visible(Animation::None));
    assert_eq!(closed.progress(), 0.0);

    let open = State::new(&config, Ownership::Outer { state: true });
    assert!(open.is_visible(Animation::None));
    assert_eq!(open.progress(), 1.0);
    assert_eq!(open.focused, None);
}

#[test]
fn test_state_sync_follows_outer_state() {
    let config = Config::default();
    let mut state = State::new(&config, Ownership::Outer { state: true });
    state.focused = Some(1);

    state.sync(Ownership::Outer { state: false });

    assert!(!state.menu.is_open());
    assert!(!state.is_visible(Animation::None));
    assert_eq!(state.focused, None);
}

#[test]
fn test_state_sync_ignores_inner_ownership() {
    let config = Config::default();
    let mut state = State::new(&config, Ownership::Inner { initial: true });

    state.sync(Ownership::Inner { initial: false });

    assert!(state.menu.is_open());
    assert!(state.is_visible(Animation::Slide));
}

#[test]
fn test_items_report_interactivity() {
    let list = list();

    assert_eq!(list.len(), 2);
    assert!(list.items[0].is_interactive());
    assert!(!list.items[1].is_interactive());
}

#[test]
fn test_trigger_press_toggles_and_is_captured() {
    let mut menu = Mounted::new(inner().on_toggle(Message::Toggled));
    assert!(!menu.has_panel());

    let (messages, captured) = menu.press_at(Point::new(5.0, 5.0));
    assert_eq!(messages, vec![Message::Toggled(true)]);
    assert!(captured);
    assert!(menu.has_panel());

    let (messages, captured) = menu.press_at(Point::new(5.0, 5.0));
    assert_eq!(messages, vec![Message::Toggled(false)]);
    assert!(captured);
    assert!(!menu.has_panel());
}

#[test]
fn test_outside_press_closes_without_capture() {
    let mut menu = Mounted::new(inner().state(true).on_toggle(Message::Toggled));
    assert!(menu.has_panel());

    let (messages, captured) = menu.press_at(Point::new(300.0, 300.0));
    assert_eq!(messages, vec![Message::Toggled(false)]);
    assert!(!captured);
    assert!(!menu.has_panel());

    let (messages, captured) = menu.press_at(Point::new(300.0, 300.0));
    assert!(messages.is_empty());
    assert!(!captured);
}

#[test]
fn test_disabled_trigger_does_not_open() {
    let mut menu = Mounted::new(inner().disabled(true).on_toggle(Message::Toggled));

    let (messages, captured) = menu.press_at(Point::new(5.0, 5.0));
    assert!(messages.is_empty());
    assert!(!captured);
    assert!(!menu.has_panel());
}

#[test]
fn test_outer_menu_follows_caller_state() {
    let mut menu = Mounted::new(TestMenu::outer(
        text("File"),
        list(),
        false,
        Message::Toggled,
    ));

    let (messages, _) = menu.press_at(Point::new(5.0, 5.0));
    assert_eq!(messages, vec![Message::Toggled(true)]);

    // The caller ignored the request and still says closed.
    menu.element.as_widget().diff(&mut menu.tree);
    assert!(!menu.has_panel());
}

#[test]
fn test_panel_is_placed_below_trigger() {
    let mut opened = Opened::new(Config::default());
    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, None);

    let node = panel.layout(&(), BOUNDS);

    assert_eq!(
        node.bounds(),
        Rectangle {
            x: -6.0,
            y: 26.0,
            width: 32.0,
            height: 32.0,
        }
    );
}

#[test]
fn test_stretched_panel_takes_trigger_width() {
    let mut opened = Opened::new(Config {
        align: Align::Stretch,
        ..Config::default()
    });
    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, None);

    let node = panel.layout(&(), BOUNDS);

    assert_eq!(
        node.bounds(),
        Rectangle {
            x: 0.0,
            y: 26.0,
            width: 20.0,
            height: 32.0,
        }
    );
}

#[test]
fn test_panel_press_keeps_outside_only_menu_open() {
    let mut opened = Opened::new(Config::default());
    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, None);
    let node = panel.layout(&(), BOUNDS);

    // First item
    let (messages, captured) = press_panel(&mut panel, &node, Point::new(0.0, 34.0));
    assert_eq!(messages, vec![Message::Picked]);
    assert!(captured);

    // Panel padding
    let (messages, captured) = press_panel(&mut panel, &node, Point::new(-5.0, 27.0));
    assert!(messages.is_empty());
    assert!(captured);

    assert!(opened.state.menu.is_open());
}

#[test]
fn test_panel_press_closes_any_click_menu() {
    let mut opened = Opened::new(Config {
        close_policy: ClosePolicy::AnyClick,
        ..Config::default()
    });
    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, None);
    let node = panel.layout(&(), BOUNDS);

    let (messages, captured) = press_panel(&mut panel, &node, Point::new(0.0, 34.0));
    assert_eq!(messages, vec![Message::Picked, Message::Toggled(false)]);
    assert!(captured);

    assert!(!opened.state.menu.is_open());
}

#[test]
fn test_press_outside_panel_is_left_to_trigger() {
    let mut opened = Opened::new(Config::default());
    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, None);
    let node = panel.layout(&(), BOUNDS);

    let (messages, captured) = press_panel(&mut panel, &node, Point::new(300.0, 300.0));
    assert!(messages.is_empty());
    assert!(!captured);
}

#[test]
fn test_sliding_panel_is_pressed_where_drawn() {
    let mut opened = Opened::new(Config {
        animation: Animation::Slide,
        ..Config::default()
    });

    let start = Instant::now();
    opened.state.transition = crate::core::Animation::new(false).quick();
    opened.state.transition.go_mut(true, start);
    opened.state.now = start;

    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, None);
    let node = panel.layout(&(), BOUNDS);

    // The panel starts 12.8 above its resting place, so its first item
    // is drawn between y = 17.2 and y = 29.2.
    let (messages, captured) = press_panel(&mut panel, &node, Point::new(0.0, 20.0));
    assert_eq!(messages, vec![Message::Picked]);
    assert!(captured);
}

#[test]
fn test_tab_enters_panel_only_under_cursor() {
    let mut opened = Opened::new(Config::default());
    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, None);

    assert!(!panel.cycle_focus(false, false));
    assert_eq!(panel.state.focused, None);

    assert!(panel.cycle_focus(false, true));
    assert_eq!(panel.state.focused, Some(0));

    // Focus stays in the panel when the cursor leaves it.
    assert!(panel.cycle_focus(false, false));
    assert_eq!(panel.state.focused, Some(1));

    assert!(panel.cycle_focus(true, false));
    assert_eq!(panel.state.focused, Some(0));
}

#[test]
fn test_tab_ignores_closed_panel() {
    let mut opened = Opened::new(Config::default());
    let _ = opened.state.menu.set(false);

    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, None);

    assert!(!panel.cycle_focus(false, true));
    assert_eq!(panel.state.focused, None);
}

/// Collects the ids of the containers it visits.
#[derive(Default)]
struct Containers(Vec<widget::Id>);

impl widget::Operation for Containers {
    fn traverse(&mut self, operate: &mut dyn FnMut(&mut dyn widget::Operation)) {
        operate(self);
    }

    fn container(&mut self, id: Option<&widget::Id>, _bounds: Rectangle) {
        if let Some(id) = id {
            self.0.push(id.clone());
        }
    }
}

#[test]
fn test_panel_reports_its_id() {
    let id = widget::Id::from("file-panel");

    let mut opened = Opened::new(Config::default());
    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, Some(&id));
    let node = panel.layout(&(), BOUNDS);

    let mut containers = Containers::default();
    panel.operate(Layout::new(&node), &(), &mut containers);

    assert_eq!(containers.0, vec![id.clone()]);
}

#[test]
fn test_menu_and_panel_draw_with_their_own_text_colors() {
    let style = renderer::Style {
        text_color: crate::core::Color::BLACK,
    };
    let cursor = mouse::Cursor::Available(Point::new(0.0, 34.0));

    let menu = Mounted::new(inner().state(true));
    menu.element.as_widget().draw(
        &menu.tree,
        &mut (),
        &Theme::Light,
        &style,
        Layout::new(&menu.node),
        cursor,
        &Rectangle::with_size(BOUNDS),
    );

    let mut opened = Opened::new(Config {
        animation: Animation::Slide,
        ..Config::default()
    });
    let on_toggle = Message::Toggled;
    let mut panel = opened.panel(&on_toggle, None);
    let node = panel.layout(&(), BOUNDS);

    panel.draw(&mut (), &Theme::Light, &style, Layout::new(&node), cursor);
}
