pub mod handlers;
pub mod surface;

pub use handlers::FormController;
pub use surface::{FormSurface, MemoryForm};
