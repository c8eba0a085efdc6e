//! Effect records produced by the compute phase of pool operations.
//!
//! A quote validates an operation against the current pool state and
//! describes its full outcome, including the pool state that results from
//! it. Nothing is mutated until the record is applied.

use super::{Amount, ChangeType, Liquidity, PoolState, SwapSpec};

/// Outcome of a quoted exact-input swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapEffects {
    spec: SwapSpec,
    amount_out: Amount,
    fee: Amount,
    next: PoolState,
}

impl SwapEffects {
    /// Creates a swap effect record.
    #[must_use]
    pub const fn new(spec: SwapSpec, amount_out: Amount, fee: Amount, next: PoolState) -> Self {
        Self {
            spec,
            amount_out,
            fee,
            next,
        }
    }

    /// Returns the swap request this record answers.
    #[must_use]
    pub const fn spec(&self) -> SwapSpec {
        self.spec
    }

    /// Returns the full input taken from the caller.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.spec.amount_in()
    }

    /// Returns the output paid to the caller.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the part of the input retained by the pool as fee.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns the pool state after the swap.
    #[must_use]
    pub const fn next_state(&self) -> PoolState {
        self.next
    }
}

/// Outcome of a quoted deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityEffects {
    change_type: ChangeType,
    amount0: Amount,
    amount1: Amount,
    liquidity: Liquidity,
    locked: Liquidity,
    next: PoolState,
}

impl LiquidityEffects {
    /// Creates a liquidity effect record.
    #[must_use]
    pub const fn new(
        change_type: ChangeType,
        amount0: Amount,
        amount1: Amount,
        liquidity: Liquidity,
        locked: Liquidity,
        next: PoolState,
    ) -> Self {
        Self {
            change_type,
            amount0,
            amount1,
            liquidity,
            locked,
            next,
        }
    }

    /// Returns whether shares are minted or burned.
    #[must_use]
    pub const fn change_type(&self) -> ChangeType {
        self.change_type
    }

    /// Returns the token0 amount deposited or withdrawn.
    #[must_use]
    pub const fn amount0(&self) -> Amount {
        self.amount0
    }

    /// Returns the token1 amount deposited or withdrawn.
    #[must_use]
    pub const fn amount1(&self) -> Amount {
        self.amount1
    }

    /// Returns the shares credited to or debited from the caller.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Returns the shares permanently locked by this operation.
    ///
    /// Non-zero only for a pool's first deposit.
    #[must_use]
    pub const fn locked(&self) -> Liquidity {
        self.locked
    }

    /// Returns the pool state after the operation.
    #[must_use]
    pub const fn next_state(&self) -> PoolState {
        self.next
    }
}
