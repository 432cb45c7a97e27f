pub mod content;
pub mod layout;
pub mod model;
pub mod reveal;
pub mod tracker;
pub mod views;
