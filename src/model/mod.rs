mod matches;
mod player;
mod result;

pub use matches::*;
pub use player::*;
pub use result::*;
