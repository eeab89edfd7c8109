pub mod bar;
pub mod quote;
pub mod request_params;
pub mod snapshot;
pub mod timeframe;
