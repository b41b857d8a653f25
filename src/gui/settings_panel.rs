use eframe::egui::{
    self,
    Slider,
    SliderClamping,
};

use super::theme::Theme;
use crate::carousel::{
    Action,
    CarouselConfig,
    ConfigField,
};

pub struct SettingsPanel;

impl SettingsPanel {
    /// Right-hand panel with one slider per configuration field. Returns the
    /// field updates made this frame.
    pub fn show(ctx: &egui::Context, config: &CarouselConfig, theme: &Theme) -> Vec<Action> {
        let mut actions = Vec::new();

        egui::SidePanel::right("settings_panel").resizable(false).exact_width(290.0).show(
            ctx,
            |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚙").color(theme.accent(ctx)));
                    ui.label(theme.heading(ctx, "Settings"));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").on_hover_text("Close").clicked() {
                            actions.push(Action::TogglePanel);
                        }
                    });
                });
                ui.add_space(12.0);

                for field in ConfigField::SLIDERS {
                    if let Some(value) = control_group(ui, field, config.get(field), theme) {
                        actions.push(Action::UpdateField(field, value));
                    }
                    ui.add_space(10.0);
                }

                ui.add_space(8.0);
                egui::Frame::new()
                    .fill(theme.accent_soft(ctx))
                    .corner_radius(10.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("TIP").small().strong().color(theme.accent(ctx)),
                        );
                        ui.label(
                            egui::RichText::new(
                                "Hover over the carousel to pause the rotation and focus on \
                                 specific cards.",
                            )
                            .small(),
                        );
                    });
            },
        );

        actions
    }
}

/// Label, current value and slider. Returns the new value when it changed.
fn control_group(
    ui: &mut egui::Ui,
    field: ConfigField,
    current: f32,
    theme: &Theme,
) -> Option<f32> {
    let mut value = current;

    ui.horizontal(|ui| {
        ui.label(theme.muted(ui.ctx(), &field.label().to_uppercase()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{}", value.round() as i32))
                    .monospace()
                    .color(theme.accent(ui.ctx())),
            );
        });
    });

    let slider = Slider::new(&mut value, field.bounds())
        .step_by(1.0)
        .clamping(SliderClamping::Always)
        .show_value(false);
    let width = ui.available_width();
    let changed = ui.add_sized([width, 18.0], slider).changed();

    (changed && value != current).then_some(value)
}
