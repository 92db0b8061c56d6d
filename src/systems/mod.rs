pub mod events;
pub mod input;

pub use events::Event;
pub use input::KeyBinds;
