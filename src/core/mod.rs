pub mod bgm;
pub mod constants;
pub mod firefly;
pub mod layout;
pub mod store;

pub use bgm::*;
pub use constants::*;
pub use firefly::*;
pub use layout::*;
pub use store::*;
