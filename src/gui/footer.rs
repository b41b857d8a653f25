use eframe::egui;

use super::theme::Theme;
use crate::carousel::CarouselState;

pub fn status_line(state: &CarouselState) -> String {
    let mut line = format!("{} Cards active", state.cards().len());
    if let Some(outcome) = state.last_outcome() {
        line.push_str("  ·  ");
        line.push_str(&outcome.summary());
    }
    line
}

pub fn footer(ctx: &egui::Context, state: &CarouselState, model: &str, theme: &Theme) {
    egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(theme.muted(ctx, &status_line(state)));
            ui.label(theme.muted(ctx, "·"));
            ui.label(theme.muted(ctx, &format!("{} themes", model)));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mode = if ctx.style().visuals.dark_mode { "Dark" } else { "Light" };
                ui.label(
                    egui::RichText::new(format!("{} Mode Visualization", mode))
                        .small()
                        .color(theme.accent(ctx)),
                );
            });
        });
    });
}
