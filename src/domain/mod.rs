pub mod context;
pub mod filter;
pub mod report;
pub mod store;
pub mod tags;
pub mod timeline;

pub use context::{CurrentUser, ViewContext};
pub use filter::FilterState;
pub use report::{Report, ReportId};
pub use store::ReportStore;
pub use tags::{Category, Priority, Status};
pub use timeline::{NewTimelineEntry, TimelineEntry};
