pub mod color;
pub mod face;
pub mod geometry;
pub mod layout;
pub mod list;
pub mod section;
pub mod session;
pub mod smooth;
pub mod svg;
pub mod view;
