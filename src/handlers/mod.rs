pub mod dashboard;
pub mod export;
pub mod kid;
pub mod member;
pub mod reminder;
pub mod template;

pub use dashboard::dashboard_config;
pub use export::export_config;
pub use kid::kid_config;
pub use member::member_config;
pub use reminder::reminder_config;
pub use template::template_config;
