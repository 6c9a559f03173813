pub mod clock;
pub mod notifier;
pub mod repositories;

pub use self::clock::*;
pub use self::notifier::*;
pub use self::repositories::*;
