pub mod lesson_card;
pub mod page;
pub mod scroll_top;
