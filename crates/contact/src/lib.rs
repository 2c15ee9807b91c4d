mod delivery;
mod emailjs;
mod error;
mod form;
mod service;
mod status;
mod workflow;

pub use delivery::*;
pub use emailjs::*;
pub use error::*;
pub use form::*;
pub use service::*;
pub use status::*;
pub use workflow::*;
