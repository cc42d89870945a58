mod chunks;
mod try_;

pub use chunks::{Chunk, ChunkPlan};
pub use try_::{NoneError, Try};

use std::any::Any;

/// Best effort conversion of a panic payload into a readable message.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
