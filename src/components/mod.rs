// Layout pieces shared by screens

pub mod footer;
pub mod header;

pub use footer::Footer;
pub use header::Header;
