use iced::widget::{button, center, column, pick_list, row, text, toggler};
use iced::{Center, Element};
use icy_dropdown::{
    Align, Animation, ClosePolicy, Direction, Error, Menu, MenuList, Options, menu, menu_item,
    menu_list,
};

pub fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view).run()
}

#[derive(Default)]
struct App {
    align: Align,
    slide: bool,
    close_on_any_click: bool,
    outer_open: bool,
    last_pick: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    AlignSelected(Align),
    SlideToggled(bool),
    AnyClickToggled(bool),
    OuterToggled(bool),
    Picked(String),
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Top,
    Direction::Bottom,
    Direction::Left,
    Direction::Right,
];

const ALIGNS: [Align; 4] = [Align::Start, Align::Center, Align::End, Align::Stretch];

impl App {
    fn update(&mut self, message: Message) {
        match message {
            Message::AlignSelected(align) => self.align = align,
            Message::SlideToggled(slide) => self.slide = slide,
            Message::AnyClickToggled(any) => self.close_on_any_click = any,
            Message::OuterToggled(is_open) => self.outer_open = is_open,
            Message::Picked(label) => self.last_pick = Some(label),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let animation = if self.slide {
            Animation::Slide
        } else {
            Animation::None
        };

        let close_policy = if self.close_on_any_click {
            ClosePolicy::AnyClick
        } else {
            ClosePolicy::OutsideOnly
        };

        let controls = row![
            pick_list(ALIGNS, Some(self.align), Message::AlignSelected),
            toggler(self.slide)
                .label("Slide")
                .on_toggle(Message::SlideToggled),
            toggler(self.close_on_any_click)
                .label("Close on any click")
                .on_toggle(Message::AnyClickToggled),
        ]
        .spacing(20)
        .align_y(Center);

        let menus = row(DIRECTIONS.into_iter().map(|direction| -> Element<'_, Message> {
            menu(text(format!("Open {direction}")), items(direction))
                .direction(direction)
                .align(self.align)
                .animation(animation)
                .close_policy(close_policy)
                .into()
        }))
        .spacing(40)
        .align_y(Center);

        let outer = row![
            Menu::outer(
                text(if self.outer_open { "Opened" } else { "Closed" }),
                items(Direction::Bottom),
                self.outer_open,
                Message::OuterToggled,
            )
            .animation(animation)
            .id("outer-menu"),
            button("Toggle from outside").on_press(Message::OuterToggled(!self.outer_open)),
        ]
        .spacing(20)
        .align_y(Center);

        let configured: Element<'_, Message> = match markup_options().and_then(|options| {
            Menu::from_options(
                text("From options"),
                items(Direction::Top),
                &options,
                None::<fn(bool) -> Message>,
            )
        }) {
            Ok(menu) => menu.into(),
            Err(error) => text(error.to_string()).into(),
        };

        let status = text(
            self.last_pick
                .as_deref()
                .map_or_else(|| "Nothing picked yet".to_owned(), |pick| format!("Picked {pick}")),
        );

        center(
            column![controls, menus, outer, configured, status]
                .spacing(60)
                .align_x(Center),
        )
        .into()
    }
}

fn items<'a>(direction: Direction) -> MenuList<'a, Message> {
    menu_list(["Cut", "Copy", "Paste"].into_iter().map(move |label| {
        menu_item(text(label)).on_press(Message::Picked(format!("{label} ({direction})")))
    }))
}

/// Options written the way a markup attribute list would carry them.
fn markup_options() -> Result<Options, Error> {
    let mut options = Options::default();

    for (name, value) in [
        ("direction", "top"),
        ("align", "stretch"),
        ("animation", "slide"),
        ("closeAfter", "any"),
        ("gap", "8px"),
    ] {
        options.set(name, value)?;
    }

    Ok(options)
}
