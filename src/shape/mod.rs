//! Shape algebra over constant dimensions.
pub mod broadcast;
pub mod concat;
pub mod dim;

pub use broadcast::{broadcast_shape, concrete_broadcast};
pub use concat::concrete_concat;
pub use dim::{evaluate, evaluate_shape};
