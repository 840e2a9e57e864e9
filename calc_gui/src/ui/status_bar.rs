//! Status Bar (Bottom)
//!
//! Displays:
//! - Pending operation (e.g. `12 ÷`)
//! - Status messages (config load problems)

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::{Calculator, Phase};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(calculator: &Calculator, status: &'a str) -> Element<'a, Message> {
    let pending = calculator.pending().unwrap_or_default();
    let phase = match calculator.phase() {
        Phase::Idle => "",
        Phase::AwaitingOperand => "awaiting operand",
        Phase::EnteringOperand => "entering operand",
    };

    row![
        text(pending).size(12),
        Space::new().width(8),
        text(phase).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status).size(10).color([0.6, 0.3, 0.0]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
