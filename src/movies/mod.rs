pub mod handlers;
pub mod service;
pub mod source;
pub mod types;

pub use handlers::*;
pub use service::MovieService;
pub use source::*;
pub use types::*;
