//! Calculator display
//!
//! Right-aligned display text in a rounded panel. Long entries wrap rather
//! than truncate, since digit entry is unbounded.

use iced::widget::{container, text};
use iced::{Border, Element, Length};

use super::palette::KeyPalette;
use crate::Message;

/// Font size of the display text
const DISPLAY_TEXT_SIZE: f32 = 44.0;

pub fn view_display(value: &str, dark_mode: bool) -> Element<'_, Message> {
    let colors = KeyPalette::for_mode(dark_mode);

    container(text(value).size(DISPLAY_TEXT_SIZE).color(colors.display_text))
        .width(Length::Fill)
        .padding(16)
        .align_x(iced::alignment::Horizontal::Right)
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(colors.display_background.into()),
            border: Border::default().rounded(16.0),
            ..container::Style::default()
        })
        .into()
}
