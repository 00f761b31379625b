pub mod pointer;
pub mod scroll;
pub mod visibility;

pub use pointer::{wire_carousel, wire_field_hover, wire_panel, CarouselWiring};
pub use scroll::{wire_spiral_resize, wire_timeline};
pub use visibility::observe_reveal;
