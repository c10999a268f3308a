// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the showcase page.
//!
//! Organized the usual way: palette, opacity, spacing (8px grid), sizing,
//! typography, border, radius, shadow. Tokens are meant to stay consistent;
//! keep the ratios when adjusting (e.g. MD = XS * 2).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.35);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.9);

    // Brand colors (indigo scale)
    pub const BRAND_200: Color = Color::from_rgb(0.8, 0.79, 1.0);
    pub const BRAND_400: Color = Color::from_rgb(0.55, 0.52, 1.0);
    pub const BRAND_500: Color = Color::from_rgb(0.42, 0.39, 1.0);
    pub const BRAND_600: Color = Color::from_rgb(0.33, 0.3, 0.85);

    /// Accent teal used by the "parallel"/"tomorrow" state of the
    /// visualizations (`#4ECDC4`).
    pub const ACCENT_TEAL: Color = Color::from_rgb(0.306, 0.804, 0.769);

    /// Hero particle tint (`rgba(184, 184, 255, 0.5)`).
    pub const PARTICLE: Color = Color::from_rgba(0.722, 0.722, 1.0, 0.5);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    pub const MEDIUM: f32 = 0.5;
    pub const STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Side of a demo transaction block.
    pub const TX_BLOCK: f32 = 34.0;

    /// Side of a block inside the morphing chart.
    pub const MORPH_BLOCK: f32 = 26.0;

    /// Height of the demo progress bars.
    pub const PROGRESS_BAR_HEIGHT: f32 = 10.0;

    /// Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of a feature card.
    pub const FEATURE_CARD_WIDTH: f32 = 240.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 42.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Card titles, lane headings
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Taglines, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Elapsed readouts, footer
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::MEDIUM > 0.0 && opacity::MEDIUM < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::BRAND_500.r >= 0.0 && palette::BRAND_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_and_accent_are_distinct() {
        assert_ne!(palette::BRAND_500, palette::ACCENT_TEAL);
    }
}
