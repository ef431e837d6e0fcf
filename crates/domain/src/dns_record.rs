mod record;
mod record_type;
mod return_code;

pub use record::Record;
pub use record_type::RecordType;
pub use return_code::ReturnCode;
