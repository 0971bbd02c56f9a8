pub mod kids_service;
pub mod member_service;
pub mod reminder_service;
pub mod template_service;

pub use kids_service::KidsService;
pub use member_service::MemberService;
pub use reminder_service::ReminderService;
pub use template_service::TemplateService;
