//! Form rendering

mod field_renderer;
mod login_form;

pub use login_form::draw_login;
