pub mod error;
pub mod os_release;
