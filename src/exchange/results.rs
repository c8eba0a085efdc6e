//! Outcomes of committed exchange operations.

use crate::domain::{Amount, Liquidity};
use crate::settlement::Settlement;

/// Outcome of a committed deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintResult {
    amount0: Amount,
    amount1: Amount,
    liquidity_minted: Liquidity,
    settlement: Settlement,
}

impl MintResult {
    pub(crate) const fn new(
        amount0: Amount,
        amount1: Amount,
        liquidity_minted: Liquidity,
        settlement: Settlement,
    ) -> Self {
        Self {
            amount0,
            amount1,
            liquidity_minted,
            settlement,
        }
    }

    /// Returns the token0 amount taken from the caller.
    #[must_use]
    pub const fn amount0(&self) -> Amount {
        self.amount0
    }

    /// Returns the token1 amount taken from the caller.
    #[must_use]
    pub const fn amount1(&self) -> Amount {
        self.amount1
    }

    /// Returns the shares credited to the caller.
    #[must_use]
    pub const fn liquidity_minted(&self) -> Liquidity {
        self.liquidity_minted
    }

    /// Returns the transfers the caller must carry out.
    #[must_use]
    pub const fn settlement(&self) -> &Settlement {
        &self.settlement
    }
}

/// Outcome of a committed withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnResult {
    amount0: Amount,
    amount1: Amount,
    liquidity_burned: Liquidity,
    settlement: Settlement,
}

impl BurnResult {
    pub(crate) const fn new(
        amount0: Amount,
        amount1: Amount,
        liquidity_burned: Liquidity,
        settlement: Settlement,
    ) -> Self {
        Self {
            amount0,
            amount1,
            liquidity_burned,
            settlement,
        }
    }

    /// Returns the token0 amount paid to the caller.
    #[must_use]
    pub const fn amount0(&self) -> Amount {
        self.amount0
    }

    /// Returns the token1 amount paid to the caller.
    #[must_use]
    pub const fn amount1(&self) -> Amount {
        self.amount1
    }

    /// Returns the shares debited from the caller.
    #[must_use]
    pub const fn liquidity_burned(&self) -> Liquidity {
        self.liquidity_burned
    }

    /// Returns the transfers the caller must carry out.
    #[must_use]
    pub const fn settlement(&self) -> &Settlement {
        &self.settlement
    }
}

/// Outcome of a committed swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapResult {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    settlement: Settlement,
}

impl SwapResult {
    pub(crate) const fn new(
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
        settlement: Settlement,
    ) -> Self {
        Self {
            amount_in,
            amount_out,
            fee,
            settlement,
        }
    }

    /// Returns the full input taken from the caller.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output paid to the caller.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the part of the input retained by the pool.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns the transfers the caller must carry out.
    #[must_use]
    pub const fn settlement(&self) -> &Settlement {
        &self.settlement
    }
}
