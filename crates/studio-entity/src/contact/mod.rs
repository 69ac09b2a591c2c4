//! Contact inquiry domain entities.

pub mod model;
pub mod priority;
pub mod status;
pub mod subject;

pub use model::{Contact, ContactNote, CreateContact, UpdateContact};
pub use priority::ContactPriority;
pub use status::ContactStatus;
pub use subject::ContactSubject;
