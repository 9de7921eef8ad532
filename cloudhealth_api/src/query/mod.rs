mod cost_history;
pub use self::cost_history::CostHistoryQuery;
