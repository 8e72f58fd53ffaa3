//! `min` and `max`.
//!
//! With the default [`CollectionLength::Literal`](crate::CollectionLength::Literal)
//! a present slice or map is measured by the length of its string
//! representation, so these rules say nothing useful about element counts
//! unless the engine is configured with `element-count`.

use super::{Measure, measure};
use crate::rule::Failure;

crate::rule! {
    /// Fails when a string's length, an array's element count or an
    /// integer falls below the bound. Absent slices and maps fail.
    pub Min = "min", restrictions: 1;
    check(self, value) {
        let min = self.context.integer_bound(0)?;
        match measure(value, self.context.options()) {
            Measure::Absent => Err(Failure::Violated),
            Measure::Quantity(quantity) if quantity < i128::from(min) => Err(Failure::Violated),
            Measure::Quantity(_) | Measure::Unchecked => Ok(()),
        }
    }
}

crate::rule! {
    /// Fails when a string's length, an array's element count or an
    /// integer exceeds the bound. Absent slices and maps fail.
    pub Max = "max", restrictions: 1;
    check(self, value) {
        let max = self.context.integer_bound(1)?;
        match measure(value, self.context.options()) {
            Measure::Absent => Err(Failure::Violated),
            Measure::Quantity(quantity) if quantity > i128::from(max) => Err(Failure::Violated),
            Measure::Quantity(_) | Measure::Unchecked => Ok(()),
        }
    }
}
