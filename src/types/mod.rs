pub mod enums;
pub mod post;
pub mod user;

pub use enums::*;
pub use post::*;
pub use user::*;
