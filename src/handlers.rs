pub mod document;
pub mod info;
pub mod photo;
pub mod session;
pub mod text;

pub use document::load_faq_from_document;
pub use info::show_system_info;
pub use photo::annotate_photo;
pub use session::{reset_session, send_example, show_faq, show_image};
pub use text::{answer_question, greet, help};
