//! Shared presentational components used by the screens.

pub mod metal_card;
pub mod quote_panel;
