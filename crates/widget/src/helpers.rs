//! Helper functions to create menus.
use crate::core::Element;
use crate::menu::{self, Menu, MenuItem, MenuList};

/// Creates a new [`Menu`] with the given trigger and list of items.
///
/// [`Menu`]: crate::Menu
pub fn menu<'a, Message, Theme, Renderer>(
    trigger: impl Into<Element<'a, Message, Theme, Renderer>>,
    list: MenuList<'a, Message, Theme, Renderer>,
) -> Menu<'a, Message, Theme, Renderer>
where
    Theme: menu::Catalog,
    Renderer: crate::core::Renderer,
{
    Menu::new(trigger, list)
}

/// Creates a new [`MenuList`] with the given items.
pub fn menu_list<'a, Message, Theme, Renderer>(
    items: impl IntoIterator<Item = MenuItem<'a, Message, Theme, Renderer>>,
) -> MenuList<'a, Message, Theme, Renderer> {
    MenuList::with_items(items)
}

/// Creates a new [`MenuItem`] with the given content.
pub fn menu_item<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> MenuItem<'a, Message, Theme, Renderer> {
    MenuItem::new(content)
}
