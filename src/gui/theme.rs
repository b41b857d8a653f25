use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

use crate::carousel::Rgb;

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::prism()
    }
}

impl Theme {
    pub fn prism() -> Self {
        Theme { dark: ThemeDetails::prism_dark(), light: ThemeDetails::prism_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).strong().color(self.details(ctx).heading)
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).small().color(self.details(ctx).muted)
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    pub fn accent_soft(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent_soft
    }

    pub fn canvas(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).canvas
    }

    pub fn card_text(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).card_text
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    canvas: Color32,
    panel: Color32,
    surface: Color32,
    surface_raised: Color32,
    border: Color32,
    text: Color32,
    heading: Color32,
    muted: Color32,
    card_text: Color32,
    accent: Color32,
    accent_soft: Color32,
    accent_hover: Color32,
    danger: Color32,
    warning: Color32,
}

impl ThemeDetails {
    // Tailwind slate + indigo
    fn prism_light() -> Self {
        Self {
            canvas: Color32::from_rgb(248, 250, 252),    // slate-50
            panel: Color32::from_rgb(255, 255, 255),
            surface: Color32::from_rgb(241, 245, 249),   // slate-100
            surface_raised: Color32::from_rgb(255, 255, 255),
            border: Color32::from_rgb(226, 232, 240),    // slate-200
            text: Color32::from_rgb(51, 65, 85),         // slate-700
            heading: Color32::from_rgb(15, 23, 42),      // slate-900
            muted: Color32::from_rgb(148, 163, 184),     // slate-400
            card_text: Color32::from_rgb(71, 85, 105),   // slate-600
            accent: Color32::from_rgb(79, 70, 229),      // indigo-600
            accent_soft: Color32::from_rgb(238, 242, 255), // indigo-50
            accent_hover: Color32::from_rgb(67, 56, 202), // indigo-700
            danger: Color32::from_rgb(220, 38, 38),
            warning: Color32::from_rgb(217, 119, 6),
        }
    }

    fn prism_dark() -> Self {
        Self {
            canvas: Color32::from_rgb(15, 23, 42),
            panel: Color32::from_rgb(30, 41, 59),
            surface: Color32::from_rgb(51, 65, 85),
            surface_raised: Color32::from_rgb(71, 85, 105),
            border: Color32::from_rgb(51, 65, 85),
            text: Color32::from_rgb(226, 232, 240),
            heading: Color32::from_rgb(248, 250, 252),
            muted: Color32::from_rgb(100, 116, 139),
            card_text: Color32::from_rgb(30, 41, 59),
            accent: Color32::from_rgb(129, 140, 248),
            accent_soft: Color32::from_rgb(49, 46, 129),
            accent_hover: Color32::from_rgb(165, 180, 252),
            danger: Color32::from_rgb(248, 113, 113),
            warning: Color32::from_rgb(251, 191, 36),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

/// Card color with an alpha channel, `rgba(R, G, B, alpha)`.
pub fn card_color(color: Rgb, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, a)
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn widget(
    base: WidgetVisuals,
    bg: Color32,
    weak_bg: Color32,
    border: Color32,
    fg: Color32,
) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: weak_bg,
        bg_stroke: Stroke { color: border, ..base.bg_stroke },
        fg_stroke: Stroke { color: fg, ..base.fg_stroke },
        ..base
    }
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };
    let w = default.widgets.clone();

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    w.noninteractive,
                    theme.panel,
                    theme.surface_raised,
                    theme.border,
                    theme.text,
                ),
                inactive: widget(
                    w.inactive,
                    theme.surface,
                    theme.surface,
                    theme.border,
                    theme.text,
                ),
                hovered: widget(
                    w.hovered,
                    theme.accent_soft,
                    theme.accent_soft,
                    theme.accent,
                    theme.accent_hover,
                ),
                active: widget(
                    w.active,
                    theme.accent_soft,
                    theme.accent_soft,
                    theme.accent_hover,
                    theme.accent_hover,
                ),
                open: widget(w.open, theme.surface, theme.surface_raised, theme.accent, theme.text),
            },
            selection: Selection {
                bg_fill: theme.accent,
                stroke: Stroke { color: theme.surface_raised, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            faint_bg_color: theme.surface,
            extreme_bg_color: theme.surface,
            code_bg_color: theme.surface,
            error_fg_color: theme.danger,
            warn_fg_color: theme.warning,
            window_shadow: Shadow { color: theme.border, ..default.window_shadow },
            window_fill: theme.panel,
            window_stroke: Stroke { color: theme.border, ..default.window_stroke },
            panel_fill: theme.panel,
            popup_shadow: Shadow { color: theme.border, ..default.popup_shadow },
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
