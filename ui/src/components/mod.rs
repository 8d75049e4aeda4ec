pub mod confirmation_modal;
pub mod form_field;
pub mod layout;
pub mod markdown_text;
pub mod modal;
pub mod overflow_menu;
pub mod star_rating;

pub use confirmation_modal::ConfirmationModal;
pub use form_field::FormField;
pub use markdown_text::MarkdownText;
pub use modal::{MessageModal, Modal};
pub use overflow_menu::{MenuItem, OverflowMenu};
pub use star_rating::StarRating;
