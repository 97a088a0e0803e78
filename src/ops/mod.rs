mod manifest;

pub use manifest::{Strategy, Update, set_package_version};
