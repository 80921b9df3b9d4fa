mod club;
mod location;
mod score;
mod set;

pub use club::*;
pub use location::*;
pub use score::*;
pub use set::*;
