pub mod exhaust;
pub mod player;
pub mod view;

pub use exhaust::ExhaustTuning;
pub use player::PlayerTuning;
pub use view::ViewTuning;
