pub mod auth;
pub mod draft;
pub mod messages;
pub mod note;

pub use auth::{AuthCredentials, AuthMode, AuthResponse};
pub use draft::{Draft, DraftError};
pub use messages::{Locale, Message};
pub use note::{Note, NoteBody, NoteId};
