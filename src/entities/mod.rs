pub mod kids_payment_history;
pub mod kids_training;
pub mod members;
pub mod message_templates;
pub mod payment_history;
pub mod reminder_logs;
