use thiserror::Error;

use crate::data::Symbol;

/// All errors generated while ingesting, aggregating or projecting price data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorRepr {
    #[error("malformed input, {symbol}.{field} = {value:?}")]
    MalformedInput {
        symbol: Symbol,
        field: &'static str,
        value: String,
    },
    #[error("empty series: {}", .0)]
    EmptySeries(Symbol),
    #[error("empty dataset")]
    EmptyDataset,
    #[error("misaligned dates, {symbol}: expected {expected}, found {found}")]
    Misaligned {
        symbol: Symbol,
        expected: String,
        found: String,
    },
    #[error("not exists, {}", .0)]
    NotExists(Symbol),
    #[error("upstream error for {symbol}: {message}")]
    Upstream { symbol: Symbol, message: String },
    #[error("bad date format: {}", .0)]
    BadFormat(String),
    #[error("json: {}", .0)]
    Json(String),
}

impl From<serde_json::Error> for ErrorRepr {
    fn from(err: serde_json::Error) -> Self {
        ErrorRepr::Json(err.to_string())
    }
}
