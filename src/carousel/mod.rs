pub mod geometry;
pub mod models;
pub mod motion;
pub mod seed;
pub mod state;

pub use geometry::{
    hovered_card,
    layout,
    placement,
    project_ring,
    ring_contains,
    translate_z,
    CardPlacement,
    ProjectedCard,
};
pub use models::{
    Card,
    CarouselConfig,
    ConfigField,
    Rgb,
    Theme,
};
pub use motion::Spin;
pub use seed::seed_cards;
pub use state::{
    Action,
    CardSource,
    CarouselState,
    RefreshOutcome,
    RefreshTicket,
    Transition,
};
