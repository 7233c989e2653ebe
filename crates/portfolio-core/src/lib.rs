pub mod carousel;
pub mod constants;
pub mod loader;
pub mod locale;
pub mod motion;
pub mod page;
pub mod petals;
pub mod player;

pub use carousel::*;
pub use constants::*;
pub use loader::*;
pub use locale::*;
pub use motion::*;
pub use page::*;
pub use petals::*;
pub use player::*;
