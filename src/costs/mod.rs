//! # Geometric-Growth Costs
//!
//! Pricing for incremental purchases where every unit costs a fixed multiplier
//! more than the previous one. The `n`th unit (zero-based) costs
//! `cost_base * multiplier^n`.
//!
//! ## Closed Forms
//!
//! Buying `amount` units with `owned` already owned is a geometric series:
//!
//! ```text
//! cost = cost_base * r^owned * (r^amount - 1) / (r - 1)
//! ```
//!
//! Solving that for `amount` with a budget gives the logarithmic max-buy form
//! used by [`get_max_buy`].
//!
//! ## Examples
//!
//! ```rust
//! use gamemath::costs::{get_cost, get_max_buy, CostData};
//!
//! let data = CostData::new(10.0, 1.07).unwrap();
//! assert_eq!(get_cost(0, &data, 1).unwrap(), 10.0);
//! assert_eq!(get_max_buy(0, &data, 25.0), 2);
//! ```

use log::{debug, trace};
use thiserror::Error;

/// Errors raised by the cost calculations
#[derive(Debug, Error, PartialEq)]
pub enum CostError {
    /// Fewer than one unit was requested
    #[error("Amount out of range: {0}")]
    InvalidAmount(u64),

    /// Base cost or multiplier is not a positive finite number
    #[error("Invalid cost data: cost_base={cost_base}, multiplier={multiplier}")]
    InvalidCostData {
        /// Rejected base cost
        cost_base: f64,
        /// Rejected growth multiplier
        multiplier: f64,
    },
}

/// Result type for cost operations
pub type Result<T> = std::result::Result<T, CostError>;

/// Pricing parameters for one purchasable item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostData {
    /// Price of the first unit
    pub cost_base: f64,
    /// Growth factor applied per owned unit, e.g. 1.07
    pub multiplier: f64,
}

impl CostData {
    /// Creates pricing parameters, rejecting non-positive or non-finite values
    pub fn new(cost_base: f64, multiplier: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(cost_base) || !valid(multiplier) {
            return Err(CostError::InvalidCostData {
                cost_base,
                multiplier,
            });
        }
        Ok(CostData {
            cost_base,
            multiplier,
        })
    }
}

/// Price of the next single unit when `current_count` are already owned
#[inline]
pub fn get_unit_cost(current_count: u64, data: &CostData) -> f64 {
    data.cost_base * data.multiplier.powf(current_count as f64)
}

/// Total price of buying `amount` units when `current_count` are already owned
///
/// # Errors
///
/// Returns [`CostError::InvalidAmount`] when `amount` is zero.
pub fn get_cost(current_count: u64, data: &CostData, amount: u64) -> Result<f64> {
    if amount < 1 {
        return Err(CostError::InvalidAmount(amount));
    }

    let unit = get_unit_cost(current_count, data);
    if amount == 1 {
        return Ok(unit);
    }

    let r = data.multiplier;
    if r == 1.0 {
        // The series degenerates to a flat price per unit
        debug!("Flat multiplier, pricing {} units linearly", amount);
        return Ok(unit * amount as f64);
    }

    Ok(unit * (r.powf(amount as f64) - 1.0) / (r - 1.0))
}

/// Largest number of units affordable with `income` when `current_count` are owned
///
/// The logarithmic estimate is nudged by at most one step so the result
/// always agrees with [`get_cost`]:
/// `get_cost(n, amount) <= income < get_cost(n, amount + 1)`.
///
/// Zero, negative or NaN income buys nothing. When the multiplier is below 1
/// and the income exceeds the converging series total, every unit is
/// affordable and `u64::MAX` is returned.
pub fn get_max_buy(current_count: u64, data: &CostData, income: f64) -> u64 {
    if income.is_nan() || income <= 0.0 {
        return 0;
    }

    let r = data.multiplier;
    let unit = get_unit_cost(current_count, data);

    let estimate = if r == 1.0 {
        (income / unit).floor()
    } else {
        let ll = income * (r - 1.0) / unit + 1.0;
        (ll.ln() / r.ln()).floor()
    };

    if estimate.is_nan() {
        return if r < 1.0 { u64::MAX } else { 0 };
    }

    // Saturating: infinities map to u64::MAX
    let mut amount = estimate.max(0.0) as u64;

    let affordable = |n: u64| get_cost(current_count, data, n).is_ok_and(|cost| cost <= income);

    if amount > 0 && !affordable(amount) {
        trace!("Max-buy estimate {} over budget, stepping down", amount);
        amount -= 1;
    } else if let Some(next) = amount.checked_add(1) {
        if affordable(next) {
            trace!("Max-buy estimate {} under budget, stepping up", amount);
            amount = next;
        }
    }

    amount
}
