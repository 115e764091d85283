pub mod composer;
pub mod config;
pub mod constants;
pub mod device;
pub mod glyph;
pub mod layout;
pub mod orbit;
pub mod scene;

pub use composer::*;
pub use config::*;
pub use constants::*;
pub use device::*;
pub use glyph::*;
pub use layout::*;
pub use orbit::*;
pub use scene::*;
