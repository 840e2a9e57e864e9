//! Keypad grid
//!
//! Builds one row per entry in [`KEYPAD_LAYOUT`]. Each row is split into
//! groups of [`GROUP_COLUMNS`] columns, laid out as nested rows with the same
//! spacing, so a key spanning a whole group (the wide `0`) covers exactly the
//! keys above it, including the gap between them.

use iced::widget::{button, container, text, Column, Row};
use iced::{Border, Element, Length};

use calc_core::{KeySlot, KEYPAD_COLUMNS, KEYPAD_LAYOUT};

use super::palette::KeyPalette;
use crate::Message;

/// Height of every key
const KEY_HEIGHT: f32 = 64.0;

/// Gap between keys
const KEY_SPACING: f32 = 12.0;

/// Columns per nested group; wide keys never straddle a group boundary
const GROUP_COLUMNS: u16 = KEYPAD_COLUMNS / 2;

/// Render the keypad
pub fn view_keypad(dark_mode: bool) -> Element<'static, Message> {
    let palette = KeyPalette::for_mode(dark_mode);

    let rows = KEYPAD_LAYOUT.iter().map(|slots| -> Element<'static, Message> {
        let groups = column_groups(slots, GROUP_COLUMNS).into_iter().map(
            |group| -> Element<'static, Message> {
                Row::with_children(group.into_iter().map(|slot| view_key(slot, palette)))
                    .spacing(KEY_SPACING)
                    .width(Length::FillPortion(1))
                    .into()
            },
        );
        Row::with_children(groups).spacing(KEY_SPACING).into()
    });

    Column::with_children(rows).spacing(KEY_SPACING).into()
}

/// Split a row into consecutive groups spanning `columns` grid columns each
fn column_groups(slots: &[KeySlot], columns: u16) -> Vec<Vec<KeySlot>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    let mut filled = 0;
    for slot in slots {
        current.push(*slot);
        filled += slot.span;
        if filled >= columns {
            groups.push(std::mem::take(&mut current));
            filled = 0;
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

fn view_key(slot: KeySlot, palette: KeyPalette) -> Element<'static, Message> {
    let colors = palette.for_role(slot.key.role());

    let label = container(text(slot.key.label()).size(26)).center(Length::Fill);

    button(label)
        .on_press(Message::KeyPressed(slot.key))
        .width(Length::FillPortion(slot.span))
        .height(Length::Fixed(KEY_HEIGHT))
        .padding(0)
        .style(move |_theme: &iced::Theme, status| {
            let background = match status {
                button::Status::Hovered => colors.hovered,
                button::Status::Pressed => colors.pressed,
                _ => colors.background,
            };
            button::Style {
                background: Some(background.into()),
                text_color: colors.text,
                border: Border::default().rounded(KEY_HEIGHT / 2.0),
                ..button::Style::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::Key;

    #[test]
    fn test_every_row_splits_into_full_groups() {
        for row in KEYPAD_LAYOUT {
            let groups = column_groups(row, GROUP_COLUMNS);
            assert_eq!(groups.len() as u16, KEYPAD_COLUMNS / GROUP_COLUMNS);
            for group in groups {
                let span: u16 = group.iter().map(|s| s.span).sum();
                assert_eq!(span, GROUP_COLUMNS);
            }
        }
    }

    #[test]
    fn test_wide_zero_fills_its_own_group() {
        let last_row = KEYPAD_LAYOUT[KEYPAD_LAYOUT.len() - 1];
        let groups = column_groups(last_row, GROUP_COLUMNS);
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[0][0].key.label(), "0");
        let right: Vec<Key> = groups[1].iter().map(|s| s.key).collect();
        assert_eq!(right, vec![Key::Decimal, Key::Equals]);
    }
}
