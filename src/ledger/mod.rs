//! Per-(pool, owner) liquidity share balances.
//!
//! The [`PositionLedger`] exclusively owns position balances. Balances
//! change only through liquidity operations on the exchange, which
//! preview the new balance during their compute phase and commit it with
//! [`PositionLedger::set`] once every check has passed.

mod position_ledger;

pub use position_ledger::PositionLedger;
