use eframe::egui::{
    self,
    Align2,
    Color32,
    FontId,
    Pos2,
    Sense,
    Shape,
    Stroke,
};
use glam::Vec2;

use super::theme::{
    blend_colors,
    card_color,
    Theme,
};
use crate::carousel::{
    hovered_card,
    project_ring,
    ring_contains,
    Card,
    CarouselConfig,
    ProjectedCard,
    Rgb,
};

const TITLE_SIZE: f32 = 14.0;
const DESCRIPTION_SIZE: f32 = 10.0;
const TEXT_PADDING: f32 = 16.0;
const HOVER_SCALE: f32 = 1.1;

pub struct CarouselView;

impl CarouselView {
    /// Paints the ring into the remaining space of `ui`, rotated by `spin`
    /// degrees. Returns true while the pointer rests on the ring.
    pub fn show(
        ui: &mut egui::Ui,
        config: &CarouselConfig,
        cards: &[Card],
        spin: f32,
        theme: &Theme,
    ) -> bool {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;
        let ctx = ui.ctx().clone();

        painter.rect_filled(rect, 0.0, theme.canvas(&ctx));

        if cards.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No cards",
                FontId::proportional(16.0),
                theme.card_text(&ctx),
            );
            return false;
        }

        let origin = rect.center();
        let ring = project_ring(config, cards, spin);
        let pointer = response.hover_pos().map(|pos| {
            let offset = pos - origin;
            Vec2::new(offset.x, offset.y)
        });
        let hovered = pointer.and_then(|p| hovered_card(&ring, p));

        for projected in &ring {
            let Some(card) = cards.get(projected.index) else {
                continue;
            };
            let is_hovered = hovered == Some(projected.index);
            Self::paint_card(&painter, &ctx, origin, projected, card, is_hovered, theme);
        }

        if hovered.is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        pointer.is_some_and(|p| ring_contains(&ring, p))
    }

    fn paint_card(
        painter: &egui::Painter,
        ctx: &egui::Context,
        origin: Pos2,
        projected: &ProjectedCard,
        card: &Card,
        hovered: bool,
        theme: &Theme,
    ) {
        let grow = if hovered { HOVER_SCALE } else { 1.0 };
        let center = origin + egui::vec2(projected.center.x, projected.center.y);
        let points: Vec<Pos2> = projected
            .corners
            .iter()
            .map(|c| center + (origin + egui::vec2(c.x, c.y) - center) * grow)
            .collect();
        let scale = projected.scale * grow;

        let (fill, border) = card_fill(card.color, projected.facing, hovered);
        let stroke = Stroke::new(2.0 * scale, border);
        painter.add(Shape::convex_polygon(points.clone(), fill, stroke));

        if !projected.facing {
            return;
        }

        // Text hugs the bottom edge, like the card's content overlay.
        let bottom = points[3].lerp(points[2], 0.5);
        let top = points[0].lerp(points[1], 0.5);
        let up = (top - bottom).normalized();

        let description_pos = bottom + up * (TEXT_PADDING * scale);
        let title_pos = description_pos + up * ((DESCRIPTION_SIZE * 2.0 + 4.0) * scale);

        painter.text(
            title_pos,
            Align2::CENTER_BOTTOM,
            &card.title,
            FontId::proportional(TITLE_SIZE * scale),
            card_color(card.color, 1.0),
        );
        painter.text(
            description_pos,
            Align2::CENTER_BOTTOM,
            &card.description,
            FontId::proportional(DESCRIPTION_SIZE * scale),
            theme.card_text(ctx),
        );
    }
}

/// Gradient approximated by a single blend of the card color into white.
fn card_fill(color: Rgb, facing: bool, hovered: bool) -> (Color32, Color32) {
    let strength = if hovered { 0.65 } else { 0.45 };
    let tint = blend_colors(Color32::WHITE, card_color(color, 1.0), strength);
    if facing {
        (tint, card_color(color, 0.5))
    } else {
        (tint.gamma_multiply(0.55), card_color(color, 0.25))
    }
}
