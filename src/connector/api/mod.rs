pub mod container;
pub mod controller;
pub mod error;
pub mod router;
pub mod server;
pub mod trace;

pub use container::{Container, ContainerConfig};
pub use error::ApiError;
pub use router::{build as build_router, AppState};
pub use server::{configured_bind_address, serve};
