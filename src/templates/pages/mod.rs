pub mod dashboard;
pub mod home;
pub mod login;
pub mod map;
pub mod report_detail;
pub mod reports;

pub use dashboard::dashboard_page;
pub use home::home_page;
pub use login::login_page;
pub use map::map_page;
pub use report_detail::report_detail_page;
pub use reports::reports_page;
