pub mod change;
pub mod errors;
pub mod ids;
pub mod relpath;
pub mod requirement;

pub use change::*;
pub use errors::*;
pub use ids::*;
pub use relpath::*;
pub use requirement::*;
