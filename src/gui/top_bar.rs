use eframe::egui::{
    self,
    containers,
};

use super::theme::Theme;
use crate::carousel::{
    Action,
    CarouselState,
    Theme as CardTheme,
};

#[derive(Debug, Clone, PartialEq)]
pub enum TopBarAction {
    Apply(Action),
    Regenerate,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, state: &CarouselState, theme: &Theme) -> Vec<TopBarAction> {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.add_space(4.0);
                ui.vertical(|ui| {
                    ui.label(theme.heading(ctx, "Prism 3D").size(18.0));
                    ui.label(theme.muted(ctx, "VISUALIZER"));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_regenerate(ui, state, &mut actions);
                    Self::show_theme_picker(ui, state.theme(), &mut actions);

                    ui.separator();

                    let settings = ui
                        .selectable_label(state.is_panel_open(), "⚙")
                        .on_hover_text("Toggle Settings");
                    if settings.clicked() {
                        actions.push(TopBarAction::Apply(Action::TogglePanel));
                    }

                    let (icon, tooltip) =
                        if state.is_paused() { ("▶", "Play") } else { ("⏸", "Pause") };
                    if ui.button(icon).on_hover_text(tooltip).clicked() {
                        actions.push(TopBarAction::Apply(Action::TogglePause));
                    }

                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
        });

        actions
    }

    fn show_regenerate(ui: &mut egui::Ui, state: &CarouselState, actions: &mut Vec<TopBarAction>) {
        let loading = state.is_loading();
        let label = if loading { "Generating..." } else { "✨ Regenerate" };

        if loading {
            ui.spinner();
        }

        if ui.add_enabled(!loading, egui::Button::new(label)).clicked() && !loading {
            actions.push(TopBarAction::Regenerate);
        }
    }

    fn show_theme_picker(ui: &mut egui::Ui, current: CardTheme, actions: &mut Vec<TopBarAction>) {
        let mut selected = current;
        egui::ComboBox::from_id_salt("card_theme_combo")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for option in CardTheme::ALL {
                    ui.selectable_value(&mut selected, option, option.label());
                }
            });

        if selected != current {
            actions.push(TopBarAction::Apply(Action::SetTheme(selected)));
        }
    }
}
