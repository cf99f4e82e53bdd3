pub mod short_code;

pub use short_code::{CODE_LENGTH, generate_short_code, is_valid_short_code};
