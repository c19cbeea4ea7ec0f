pub mod cat_icon;
pub mod field_input;
pub mod help_bar;
pub mod help_popup;
pub mod screen_title;
