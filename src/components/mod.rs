pub mod about_skills;
pub mod background;
pub mod contact;
pub mod hero;
pub mod navigation;
