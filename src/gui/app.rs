use std::sync::Arc;

use eframe::egui;
use tracing::{
    debug,
    info,
    warn,
};

use super::{
    carousel_view::CarouselView,
    footer::footer,
    settings_panel::SettingsPanel,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    carousel::{
        Action,
        CarouselState,
        Spin,
    },
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        PrismError,
        Settings,
    },
    gemini::{
        GeminiClient,
        GeminiThemeFetcher,
        ThemeFetcher,
    },
};

pub struct PrismApp {
    // Carousel
    pub state: CarouselState,
    pub spin: Spin,

    // UI State
    pub theme: Theme,

    // External Services
    fetcher: Arc<GeminiThemeFetcher>,
    model: String,
    task_manager: TaskManager,
}

impl PrismApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Result<Self, PrismError> {
        let client = GeminiClient::new(settings)?;
        if settings.api_key.is_none() {
            warn!(
                "No API key configured, Regenerate will fail until API_KEY or GEMINI_API_KEY is set"
            );
        }

        let app = Self {
            state: CarouselState::default(),
            spin: Spin::default(),
            theme: Theme::prism(),
            model: client.model().to_string(),
            fetcher: Arc::new(ThemeFetcher::new(client)),
            task_manager: TaskManager::new()?,
        };

        app.setup_theme(cc);
        info!(model = %app.model, cards = app.state.cards().len(), "Prism 3D ready");

        Ok(app)
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        set_theme(&cc.egui_ctx, &self.theme);
        cc.egui_ctx.set_theme(egui::Theme::Light);
        cc.egui_ctx.options_mut(|o| o.theme_preference = egui::ThemePreference::Light);
    }

    fn apply(&mut self, action: Action) {
        debug!(?action, "Applying action");
        self.state.apply(action);
    }

    fn regenerate(&mut self, ctx: &egui::Context) {
        let Some(ticket) = self.state.begin_refresh() else {
            return;
        };

        let repaint = ctx.clone();
        self.task_manager.generate_theme_cards(ticket, Arc::clone(&self.fetcher), move || {
            repaint.request_repaint();
        });
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        debug!(task = result.task_type(), "Task finished");
        match result {
            TaskResult::ThemeCards { ticket, result } => {
                self.state.complete_refresh(ticket, result);
            }
        }
    }
}

impl eframe::App for PrismApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        for action in TopBar::show(ctx, &self.state, &self.theme) {
            match action {
                TopBarAction::Apply(action) => self.apply(action),
                TopBarAction::Regenerate => self.regenerate(ctx),
            }
        }

        footer(ctx, &self.state, &self.model, &self.theme);

        if self.state.is_panel_open() {
            for action in SettingsPanel::show(ctx, self.state.config(), &self.theme) {
                self.apply(action);
            }
        }

        let ring_hovered = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                CarouselView::show(
                    ui,
                    self.state.config(),
                    self.state.cards(),
                    self.spin.degrees(),
                    &self.theme,
                )
            })
            .inner;

        // Hovering holds the ring still without touching the paused flag.
        let dt = ctx.input(|i| i.stable_dt);
        let frozen = self.state.is_paused() || ring_hovered;
        self.spin.advance(dt, self.state.config().duration, frozen);

        if !self.state.is_paused() || self.state.is_loading() {
            ctx.request_repaint();
        }
    }
}
