pub mod formats;

mod list;
pub use list::List;
mod list_format;
pub use list_format::{ListFormat, ListBuilder};
mod outcome;
pub use outcome::ClipOutcome;
mod winding;
pub use winding::Winding;
