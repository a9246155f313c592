pub mod artifact;
pub mod conversion;
pub mod definition;
pub mod offering;
pub mod step;

pub use artifact::*;
pub use conversion::*;
pub use definition::*;
pub use offering::*;
pub use step::*;
