pub mod provider;
pub mod request;
pub mod status;
pub mod timestamps;

pub use provider::ServiceProvider;
pub use request::SprayRequest;
pub use status::{IllegalTransition, RequestStatus, UnknownStatus};
