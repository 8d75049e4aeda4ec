pub mod admin_dashboard;
pub mod admin_posts;
pub mod feedback;
pub mod home;
pub mod login;
pub mod news_detail;
pub mod news_list;
pub mod not_found;
pub mod post_editor;

pub use admin_dashboard::AdminDashboardPage;
pub use admin_posts::AdminPostsPage;
pub use feedback::FeedbackPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use news_detail::NewsDetailPage;
pub use news_list::NewsListPage;
pub use not_found::NotFoundPage;
pub use post_editor::PostEditorPage;
