pub mod note;
pub mod user;

pub use note::{Note, NoteOut};
pub use user::{User, UserOut};
