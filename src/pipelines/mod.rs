pub mod html;
pub mod scan;
pub mod url;
