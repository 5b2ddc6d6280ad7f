pub mod descriptor;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use descriptor::*;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
