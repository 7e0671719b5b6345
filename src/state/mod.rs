// State management module.
// Session (view + artifact), per-view panel state, and user notices.

pub mod notices;
pub mod pricing;
pub mod profile;
pub mod session;
pub mod upload;
pub mod view;

pub use notices::{Notice, NoticeLevel, NoticeLog};
pub use pricing::PricingPanel;
pub use profile::ProfilePanel;
pub use session::{Completion, Session};
pub use upload::UploadPanel;
pub use view::View;
