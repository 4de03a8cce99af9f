pub mod constants;
pub mod io_args;
pub mod io_utils;
pub mod node_selector;
pub mod string_utils;

#[macro_use]
pub extern crate dbt_error as error;
pub use dbt_error::{
    CodeLocation, ErrContext, ErrorCode, FsError, FsResult, LiftableResult, Span, ectx, err,
    fs_err, not_implemented_err, unexpected_err, unexpected_fs_err,
};
