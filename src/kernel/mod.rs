//! Frontend-agnostic editor model: body buffer, style, counts, session and
//! command handlers.

pub mod body;
pub mod count;
pub mod editor;
pub mod error;
pub mod services;
pub mod session;
pub mod style;

pub use body::TextBody;
pub use count::TextCounts;
pub use editor::{Editor, Outcome};
pub use error::{EditorError, FileOp, SelectionAction};
pub use session::Session;
pub use style::{FontStyle, StyleDescriptor};
