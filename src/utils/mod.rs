pub mod phone;
pub mod schedule;
pub mod template;
pub mod whatsapp;

pub use phone::{format_phone, validate_phone};
pub use schedule::{classify, days_remaining, next_due_date};
pub use template::render_template;
pub use whatsapp::wa_link;
