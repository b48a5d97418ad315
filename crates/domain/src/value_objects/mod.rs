pub mod trade_result;
pub mod window;

pub use trade_result::{TradePair, TradeResult};
pub use window::Window;
