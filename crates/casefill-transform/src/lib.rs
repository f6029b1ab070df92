pub mod codec;
pub mod files;
pub mod table;
pub mod warning;

pub use codec::{
    DATE_FORMAT, DATE_TIME_FORMAT, FILE_SEPARATOR, MULTI_SEPARATOR, encode_cell, encode_multi,
    encode_single,
};
pub use files::{encode_asset, file_type_label};
pub use table::{TransformReport, transform_table};
pub use warning::{CodecFailure, CodecWarning};
