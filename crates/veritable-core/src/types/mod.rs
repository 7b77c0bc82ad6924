mod date;
mod datetime;
mod float;
mod time;

pub use date::Date;
pub use datetime::{DateTime, Precision};
pub use float::Float64;
pub use rust_decimal::Decimal;
pub use time::Time;
