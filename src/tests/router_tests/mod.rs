mod auth_tests;
mod dashboard_tests;
mod map_tests;
mod report_tests;
mod timeline_tests;
