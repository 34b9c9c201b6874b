pub mod path;
pub mod text;
pub mod text_input;

pub use path::{expand_path, get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use text::{relative_time, strip_html, truncate};
pub use text_input::TextInput;
