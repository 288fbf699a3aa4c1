pub mod entities;
pub mod intro_template;
