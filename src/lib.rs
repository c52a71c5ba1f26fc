// Side-scrolling RPG core: character stats, equipment, levelling, skills and
// tile-map movement, driven by a fixed-timestep loop

pub mod core;
pub mod engine;
pub mod game;
