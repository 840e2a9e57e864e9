//! # Petal GUI Application
//!
//! Keypad calculator built with the Iced framework (Windows, macOS, Linux,
//! WASM). The window holds a header, the display, the keypad grid and a
//! status bar. Every button press becomes a [`Message::KeyPressed`] that is
//! forwarded to the [`Calculator`] engine; the display is re-rendered from
//! the engine after each update.

mod ui;

use iced::widget::{column, container};
use iced::{Element, Length, Size, Task, Theme};
#[cfg(not(target_arch = "wasm32"))]
use tracing::{info, warn};

use calc_core::{AppConfig, Calculator, Key};

/// Application state
pub struct App {
    pub calculator: Calculator,
    pub dark_mode: bool,
    /// Shown in the status bar when the config file could not be read
    pub status: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A keypad button was pressed
    KeyPressed(Key),
    ToggleDarkMode,
}

impl App {
    fn new(config: &AppConfig, config_error: Option<String>) -> Self {
        Self {
            calculator: Calculator::new(),
            dark_mode: config.appearance.dark_mode,
            status: config_error.unwrap_or_default(),
        }
    }

    fn title(&self) -> String {
        "Petal Calculator".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyPressed(key) => {
                self.calculator.press(key);
                self.status.clear();
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::toolbar::view_header(self.dark_mode),
            ui::display::view_display(self.calculator.display(), self.dark_mode),
            ui::keypad::view_keypad(self.dark_mode),
            ui::status_bar::view_status_bar(&self.calculator, &self.status),
        ]
        .spacing(16)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Load configuration, keeping defaults (and the error text) on failure
fn load_config() -> (AppConfig, Option<String>) {
    match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e.to_string())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> iced::Result {
    let (config, config_error) = load_config();
    calc_core::logging::init_with_config(&config.logging);
    if let Some(ref e) = config_error {
        warn!(error = %e, "using default configuration");
    }
    info!(dark_mode = config.appearance.dark_mode, "starting Petal GUI");

    iced::application(
        move || App::new(&config, config_error.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .window_size(Size::new(360.0, 600.0))
    .run()
}

#[cfg(target_arch = "wasm32")]
fn main() -> iced::Result {
    console_error_panic_hook::set_once();

    let (config, config_error) = load_config();
    iced::application(
        move || App::new(&config, config_error.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&AppConfig::default(), None)
    }

    #[test]
    fn test_key_messages_drive_engine() {
        let mut app = app();
        for key in Key::parse_sequence("5 + 3 =").unwrap() {
            let _ = app.update(Message::KeyPressed(key));
        }
        assert_eq!(app.calculator.display(), "8");
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::Light);
        let _ = app.update(Message::ToggleDarkMode);
        assert!(app.dark_mode);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_config_error_shown_until_first_press() {
        let mut app = App::new(&AppConfig::default(), Some("bad config".to_string()));
        assert_eq!(app.status, "bad config");
        let _ = app.update(Message::KeyPressed(Key::Clear));
        assert!(app.status.is_empty());
    }
}
