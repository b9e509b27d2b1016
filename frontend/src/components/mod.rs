pub mod prize_selector;

pub use prize_selector::PrizeSelector;
