pub mod input_box;
pub mod message;
pub mod transcript;

pub use input_box::{InputBox, InputEvent};
pub use message::Message;
pub use transcript::{Transcript, TranscriptState};
