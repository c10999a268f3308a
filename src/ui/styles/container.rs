// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Border, Theme};

/// Card background used for feature cards and the demo lanes.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Card variant with a brand-colored outline, used while a card is hovered.
pub fn card_highlighted(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::BRAND_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..card(theme)
    }
}
