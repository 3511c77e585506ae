pub mod body;
pub mod id;

pub use body::JsonBody;
pub use id::RecordId;
