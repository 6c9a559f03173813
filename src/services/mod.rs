pub mod calendar;
pub mod closer;
pub mod evaluator;
pub mod payment_generator;
pub mod policy;

pub use self::calendar::*;
pub use self::closer::*;
pub use self::evaluator::*;
pub use self::payment_generator::*;
pub use self::policy::*;
