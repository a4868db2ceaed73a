pub mod grant;
pub mod models;
pub mod policy;
pub mod session;
pub mod summary;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::BrowserStorage;

pub use grant::{Grant, GrantState, InvitedViewer};
pub use models::{
    AccountSettings, BillAnalytics, BillEntry, MilkAnalytics, MilkEntry, MilkStatus, Principal,
    Record, RecordKind, RentAnalytics, RentEntry, Role,
};
pub use policy::{Access, Gate, RoutePolicy};
pub use session::{Session, SessionStorage, SessionStore};
