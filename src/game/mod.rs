// Game layer: the hero, their skills and gear, and the session tying them
// to input and the map

pub mod catalog;
pub mod characters;
pub mod hud;
pub mod session;
pub mod skills;

pub use catalog::EquipmentCatalog;
pub use hud::HudSnapshot;
pub use session::GameSession;
