pub mod element;
pub mod error;
pub mod event;
pub mod fixture;
pub mod focus;
pub mod form;
pub mod types;

pub use element::{find_element, Content, Element};
pub use error::Error;
pub use event::{Event, EventKind};
pub use fixture::ElementSpec;
pub use focus::FocusState;
pub use form::Form;
pub use types::{ButtonType, InputType, Tag};
