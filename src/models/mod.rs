pub mod category;
pub mod event;
pub mod session;

pub use category::Category;
pub use event::{ClassifiedEvent, Event};
pub use session::{SessionSummary, SessionTable, WindowKey};
