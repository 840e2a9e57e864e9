//! Key and display colors
//!
//! Light mode uses the pink keypad scheme; dark mode keeps the same hues on
//! darker backgrounds.

use iced::Color;

use calc_core::KeyRole;

/// Background/text pair for one key role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyColors {
    pub background: Color,
    pub hovered: Color,
    pub pressed: Color,
    pub text: Color,
}

/// Full color set for one appearance mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPalette {
    pub function: KeyColors,
    pub entry: KeyColors,
    pub operator: KeyColors,
    pub equals: KeyColors,
    pub display_background: Color,
    pub display_text: Color,
}

/// Color from a `0xRRGGBB` literal
const fn rgb(hex: u32) -> Color {
    Color {
        r: ((hex >> 16) & 0xff) as f32 / 255.0,
        g: ((hex >> 8) & 0xff) as f32 / 255.0,
        b: (hex & 0xff) as f32 / 255.0,
        a: 1.0,
    }
}

const PINK_50: Color = rgb(0xfdf2f8);
const PINK_100: Color = rgb(0xfce7f3);
const PINK_200: Color = rgb(0xfbcfe8);
const PINK_300: Color = rgb(0xf9a8d4);
const PINK_400: Color = rgb(0xf472b6);
const PINK_500: Color = rgb(0xec4899);
const PINK_600: Color = rgb(0xdb2777);
const PINK_700: Color = rgb(0xbe185d);
const PINK_800: Color = rgb(0x9d174d);
const PINK_900: Color = rgb(0x831843);
const SLATE_700: Color = rgb(0x334155);
const SLATE_800: Color = rgb(0x1e293b);
const SLATE_900: Color = rgb(0x0f172a);

const LIGHT: KeyPalette = KeyPalette {
    function: KeyColors {
        background: PINK_200,
        hovered: PINK_300,
        pressed: PINK_400,
        text: PINK_700,
    },
    entry: KeyColors {
        background: Color::WHITE,
        hovered: PINK_100,
        pressed: PINK_200,
        text: PINK_500,
    },
    operator: KeyColors {
        background: PINK_400,
        hovered: PINK_500,
        pressed: PINK_600,
        text: Color::WHITE,
    },
    equals: KeyColors {
        background: PINK_500,
        hovered: PINK_600,
        pressed: PINK_700,
        text: Color::WHITE,
    },
    display_background: PINK_100,
    display_text: PINK_800,
};

const DARK: KeyPalette = KeyPalette {
    function: KeyColors {
        background: PINK_900,
        hovered: PINK_800,
        pressed: PINK_700,
        text: PINK_100,
    },
    entry: KeyColors {
        background: SLATE_800,
        hovered: SLATE_700,
        pressed: PINK_900,
        text: PINK_300,
    },
    operator: KeyColors {
        background: PINK_600,
        hovered: PINK_500,
        pressed: PINK_400,
        text: Color::WHITE,
    },
    equals: KeyColors {
        background: PINK_500,
        hovered: PINK_400,
        pressed: PINK_300,
        text: Color::WHITE,
    },
    display_background: SLATE_900,
    display_text: PINK_50,
};

impl KeyPalette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            DARK
        } else {
            LIGHT
        }
    }

    pub fn for_role(&self, role: KeyRole) -> KeyColors {
        match role {
            KeyRole::Function => self.function,
            KeyRole::Entry => self.entry,
            KeyRole::Operator => self.operator,
            KeyRole::Equals => self.equals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_have_distinct_colors() {
        for palette in [LIGHT, DARK] {
            let roles = [KeyRole::Function, KeyRole::Entry, KeyRole::Operator, KeyRole::Equals];
            for (i, a) in roles.iter().enumerate() {
                for b in &roles[i + 1..] {
                    assert_ne!(palette.for_role(*a), palette.for_role(*b));
                }
            }
        }
    }
}
