mod bounds;
mod error;
mod math;
mod obj;
mod report;
mod util;

pub use bounds::*;
pub use error::*;
pub use math::*;
pub use obj::*;
pub use report::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;
