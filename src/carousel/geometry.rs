//! Card placement around the ring and its projection to screen space.
//!
//! Coordinates follow the CSS 3D convention the carousel was designed in:
//! x to the right, y downwards, z towards the viewer. Angles are degrees.

use glam::{
    Mat3,
    Vec2,
    Vec3,
};

use super::models::{
    Card,
    CarouselConfig,
};

/// Static transform for one card: `rotateY(angle) translateZ(depth)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub index: usize,
    pub angle: f32,
    pub depth: f32,
}

/// Angle between neighbouring cards, `None` for an empty ring.
pub fn angle_step(count: usize) -> Option<f32> {
    (count > 0).then(|| 360.0 / count as f32)
}

/// Outward offset shared by every card of a collection.
pub fn translate_z(config: &CarouselConfig) -> f32 {
    config.width + config.height + config.radius_offset
}

pub fn placement(config: &CarouselConfig, index: usize, count: usize) -> Option<CardPlacement> {
    let step = angle_step(count)?;
    Some(CardPlacement { index, angle: step * index as f32, depth: translate_z(config) })
}

/// Places a whole collection. The divisor is the live collection length,
/// never `config.quantity`.
pub fn layout(config: &CarouselConfig, cards: &[Card]) -> Vec<CardPlacement> {
    cards.iter().filter_map(|card| placement(config, card.index, cards.len())).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedCard {
    pub index: usize,
    /// Top-left, top-right, bottom-right, bottom-left, relative to the ring
    /// centre on screen.
    pub corners: [Vec2; 4],
    pub center: Vec2,
    /// View-space z of the card centre; larger is closer.
    pub z: f32,
    pub scale: f32,
    pub facing: bool,
}

/// Applies `perspective(p) rotateX(rotate_x) rotateY(spin)` on top of the
/// card's own placement. Returns `None` when any corner reaches the viewer's
/// plane.
pub fn project_card(
    config: &CarouselConfig,
    placement: &CardPlacement,
    spin: f32,
) -> Option<ProjectedCard> {
    let rotation = Mat3::from_rotation_x(config.rotate_x.to_radians())
        * Mat3::from_rotation_y((spin + placement.angle).to_radians());

    let half_w = config.width / 2.0;
    let half_h = config.height / 2.0;
    let local = [
        Vec3::new(-half_w, -half_h, placement.depth),
        Vec3::new(half_w, -half_h, placement.depth),
        Vec3::new(half_w, half_h, placement.depth),
        Vec3::new(-half_w, half_h, placement.depth),
    ];

    let project = |point: Vec3| -> Option<(Vec2, f32)> {
        let view = rotation * point;
        let distance = config.perspective - view.z;
        if distance <= f32::EPSILON {
            return None;
        }
        let scale = config.perspective / distance;
        Some((Vec2::new(view.x, view.y) * scale, scale))
    };

    let mut corners = [Vec2::ZERO; 4];
    for (corner, point) in corners.iter_mut().zip(local) {
        *corner = project(point)?.0;
    }
    let (center, scale) = project(Vec3::new(0.0, 0.0, placement.depth))?;
    let z = (rotation * Vec3::new(0.0, 0.0, placement.depth)).z;

    Some(ProjectedCard {
        index: placement.index,
        corners,
        center,
        z,
        scale,
        facing: signed_area(&corners) > 0.0,
    })
}

/// Projects a collection and orders it back to front for painting.
pub fn project_ring(config: &CarouselConfig, cards: &[Card], spin: f32) -> Vec<ProjectedCard> {
    let mut projected: Vec<ProjectedCard> = layout(config, cards)
        .iter()
        .filter_map(|placement| project_card(config, placement, spin))
        .collect();
    projected.sort_by(|a, b| a.z.total_cmp(&b.z));
    projected
}

impl ProjectedCard {
    /// Whether `point` (screen space, relative to the ring centre) lies
    /// inside the projected quad. Works for either winding.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let mut sign = 0.0f32;
        for i in 0..self.corners.len() {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % self.corners.len()];
            let cross = (b - a).perp_dot(point - a);
            if cross == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        sign != 0.0
    }
}

/// Card index of the frontmost front-facing card under `pointer`.
pub fn hovered_card(projected: &[ProjectedCard], pointer: Vec2) -> Option<usize> {
    projected
        .iter()
        .filter(|card| card.facing && card.contains_point(pointer))
        .max_by(|a, b| a.z.total_cmp(&b.z))
        .map(|card| card.index)
}

/// Whether the pointer rests on any card of the ring, front or back.
pub fn ring_contains(projected: &[ProjectedCard], pointer: Vec2) -> bool {
    projected.iter().any(|card| card.contains_point(pointer))
}

// Positive for the front side in y-down screen space.
fn signed_area(corners: &[Vec2; 4]) -> f32 {
    let mut area = 0.0;
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::seed_cards;

    const EPS: f32 = 1e-3;

    fn flat_config() -> CarouselConfig {
        CarouselConfig { rotate_x: 0.0, ..CarouselConfig::default() }
    }

    #[test]
    fn test_angles_cover_circle_without_overlap() {
        let config = CarouselConfig::default();
        for count in 1..=24usize {
            let step = 360.0 / count as f32;
            let angles: Vec<f32> = (0..count)
                .map(|i| placement(&config, i, count).unwrap().angle)
                .collect();

            for (i, angle) in angles.iter().enumerate() {
                assert_eq!(*angle, step * i as f32);
                assert!(*angle >= 0.0 && *angle < 360.0);
            }
            for i in 1..angles.len() {
                assert!(angles[i] > angles[i - 1], "angles must be strictly increasing");
            }
            // the gap back to the first card closes the circle
            let last = angles.last().copied().unwrap();
            assert!((360.0 - last - step).abs() < EPS);
        }
    }

    #[test]
    fn test_depth_is_shared() {
        let config = CarouselConfig {
            width: 120.0,
            height: 180.0,
            radius_offset: -40.0,
            ..Default::default()
        };
        let cards = seed_cards();
        let placements = layout(&config, &cards);

        assert_eq!(placements.len(), cards.len());
        assert!(placements.iter().all(|p| p.depth == 260.0));
        assert_eq!(translate_z(&config), config.width + config.height + config.radius_offset);
    }

    #[test]
    fn test_empty_ring_has_no_placements() {
        let config = CarouselConfig::default();
        assert_eq!(angle_step(0), None);
        assert_eq!(placement(&config, 0, 0), None);
        assert!(layout(&config, &[]).is_empty());
        assert!(project_ring(&config, &[], 0.0).is_empty());
    }

    #[test]
    fn test_layout_ignores_configured_quantity() {
        let config = CarouselConfig { quantity: 3, ..Default::default() };
        let cards = seed_cards();
        let placements = layout(&config, &cards);
        assert_eq!(placements[1].angle, 36.0);
    }

    #[test]
    fn test_front_card_projection() {
        let config = flat_config();
        let p = placement(&config, 0, 4).unwrap();
        let projected = project_card(&config, &p, 0.0).unwrap();

        let expected_scale = config.perspective / (config.perspective - p.depth);
        assert!(projected.center.length() < EPS);
        assert!((projected.scale - expected_scale).abs() < EPS);
        assert!((projected.z - p.depth).abs() < EPS);
        assert!(projected.facing);

        let width = projected.corners[1].x - projected.corners[0].x;
        assert!((width - config.width * expected_scale).abs() < 0.01);
    }

    #[test]
    fn test_back_card_faces_away_and_shrinks() {
        let config = flat_config();
        let p = placement(&config, 2, 4).unwrap();
        let projected = project_card(&config, &p, 0.0).unwrap();

        assert!(!projected.facing);
        assert!(projected.scale < 1.0);
        assert!(projected.z < 0.0);
    }

    #[test]
    fn test_side_cards_mirror() {
        let config = flat_config();
        let left = project_card(&config, &placement(&config, 1, 4).unwrap(), 0.0).unwrap();
        let right = project_card(&config, &placement(&config, 3, 4).unwrap(), 0.0).unwrap();

        assert!((left.center.x + right.center.x).abs() < 0.01);
        assert!((left.center.y - right.center.y).abs() < 0.01);
    }

    #[test]
    fn test_spin_moves_cards_along_the_ring() {
        let config = flat_config();
        let cards = seed_cards();
        let step = angle_step(cards.len()).unwrap();

        let at_rest = project_ring(&config, &cards, 0.0);
        let spun = project_ring(&config, &cards, step);

        // spinning by one step puts card 9 where card 0 was
        let front_at_rest = at_rest.iter().find(|c| c.index == 0).unwrap();
        let front_spun = spun.iter().find(|c| c.index == 9).unwrap();
        assert!((front_at_rest.center - front_spun.center).length() < 0.01);
    }

    #[test]
    fn test_ring_sorted_back_to_front() {
        let config = CarouselConfig::default();
        let projected = project_ring(&config, &seed_cards(), 17.0);
        assert!(projected.windows(2).all(|w| w[0].z <= w[1].z));
    }

    #[test]
    fn test_card_behind_viewer_is_culled() {
        let config = CarouselConfig { perspective: 100.0, ..flat_config() };
        let p = placement(&config, 0, 1).unwrap();
        assert!(project_card(&config, &p, 0.0).is_none());
    }

    #[test]
    fn test_hover_picks_frontmost_facing_card() {
        let config = flat_config();
        let cards = seed_cards();
        let ring = project_ring(&config, &cards[..4], 0.0);

        // front and back cards both cover the centre
        assert!(ring.iter().filter(|c| c.contains_point(Vec2::ZERO)).count() >= 2);
        assert_eq!(hovered_card(&ring, Vec2::ZERO), Some(0));
        assert!(ring_contains(&ring, Vec2::ZERO));

        let outside = Vec2::new(0.0, config.height * 4.0);
        assert_eq!(hovered_card(&ring, outside), None);
        assert!(!ring_contains(&ring, outside));
    }

    #[test]
    fn test_hover_finds_side_card() {
        let config = CarouselConfig::default();
        let ring = project_ring(&config, &seed_cards(), 0.0);
        let side = ring.iter().find(|c| c.index == 1).unwrap();

        assert!(side.facing);
        assert_eq!(hovered_card(&ring, side.center), Some(1));
    }

    #[test]
    fn test_back_face_is_not_hovered() {
        let config = flat_config();
        let back = project_card(&config, &placement(&config, 2, 4).unwrap(), 0.0).unwrap();

        assert!(back.contains_point(Vec2::ZERO));
        assert_eq!(hovered_card(&[back], Vec2::ZERO), None);
        assert!(ring_contains(&[back], Vec2::ZERO));
    }
}
