// Design token system for MongoLens
// Theme colors come from gpui-component's theme system; access them with
// `cx.theme().background`, `cx.theme().primary`, etc. This file only holds
// tokens with no gpui-component equivalent.

pub mod colors {
    use gpui::{App, Hsla};
    use gpui_component::ActiveTheme as _;

    // Fully transparent (for invisible default borders/backgrounds)
    pub fn transparent() -> Hsla {
        gpui::hsla(0.0, 0.0, 0.0, 0.0)
    }

    // Error background with alpha
    pub fn bg_error(cx: &App) -> Hsla {
        let mut c = cx.theme().danger;
        c.a = 0.1;
        c
    }
}

// =============================================================================
// Spacing
// =============================================================================

pub mod spacing {
    use gpui::{Pixels, px};

    pub fn xs() -> Pixels {
        px(4.0)
    }
    pub fn sm() -> Pixels {
        px(8.0)
    }
    pub fn md() -> Pixels {
        px(12.0)
    }
    pub fn lg() -> Pixels {
        px(16.0)
    }
}

// =============================================================================
// Sizing
// =============================================================================

pub mod sizing {
    use gpui::{Pixels, px};

    pub fn status_bar_height() -> Pixels {
        px(22.0)
    }
    pub fn toolbar_height() -> Pixels {
        px(40.0)
    }
    pub fn button_height() -> Pixels {
        px(26.0)
    }
    pub fn status_dot() -> Pixels {
        px(7.0)
    }
    pub fn sidebar_width() -> Pixels {
        px(240.0)
    }
}

// =============================================================================
// Fonts
// =============================================================================

pub mod fonts {
    use gpui::relative;

    pub fn ui() -> &'static str {
        "JetBrains Mono"
    }
    pub fn mono() -> &'static str {
        "JetBrains Mono"
    }
    pub fn ui_line_height() -> gpui::DefiniteLength {
        relative(1.45)
    }
}

// =============================================================================
// Borders
// =============================================================================

pub mod borders {
    use gpui::{Pixels, px};

    pub fn radius_sm() -> Pixels {
        px(3.0)
    }
}
