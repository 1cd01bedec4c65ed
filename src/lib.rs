//! # hireboard
//!
//! Headless core for an internal recruitment dashboard client. The crate
//! owns everything a rendering layer needs and nothing it draws:
//! persisted session state and role checks ([`auth`]), the generic
//! paged-list controller every entity screen shares ([`controller`]),
//! typed entity records ([`entities`]), and the REST collaborator
//! ([`net`]). Any UI stack — terminal, desktop, web — can sit on top.

pub mod auth;
pub mod controller;
pub mod dates;
pub mod entities;
pub mod error;
pub mod net;
pub mod page;
pub mod routes;
pub mod session;
pub mod stats;
pub mod validate;

pub use auth::{AuthGate, LoginData, Role};
pub use controller::{FetchOutcome, ListError, ListSnapshot, PageFetcher, PagedListController};
pub use error::ApiError;
pub use page::{PageInfo, PageQuery, PageResult, SortOrder};
pub use routes::{RouteDecision, RouteTable};
pub use session::{FileStorage, MemoryStorage, Session, SessionStorage, UserInfo};
