pub mod kid;
pub mod member;
pub mod payment;
pub mod reminder;
pub mod template;

pub use kid::*;
pub use member::*;
pub use payment::*;
pub use reminder::*;
pub use template::*;
