pub mod bindings;
pub mod hud;
