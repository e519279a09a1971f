mod gate;
mod pin;

pub use gate::{AdminGate, AuthError};
pub use pin::hash_pin;
