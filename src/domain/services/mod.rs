//! # Domain Services
//!
//! The pure stages of the quote pipeline, in evaluation order.
//!
//! ## Stages
//!
//! - [`zone_resolver`]: Location to pricing zone
//! - [`line_item_pricer`]: Requested items to priced lines
//! - [`bundling`]: Isolated vehicle items merged into one line
//! - [`discount_policy`]: At most one discount
//! - [`minimum_charge`]: Country floor
//! - [`price_range`], [`quote_summary`]: Displayed range, summary and notes

pub mod bundling;
pub mod discount_policy;
pub mod line_item_pricer;
pub mod minimum_charge;
pub mod price_range;
pub mod quote_summary;
pub mod zone_resolver;

pub use bundling::{bundle_isolated_items, workload_subtotal};
pub use discount_policy::{
    CategoryRulePolicy, DiscountContext, DiscountOutcome, DiscountPolicy, DiscountSelector,
    ValueThresholdPolicy, ZoneDiscountPolicy,
};
pub use line_item_pricer::{price_items, price_line};
pub use minimum_charge::{MinimumChargeOutcome, apply_minimum_charge};
pub use price_range::{RangePolicy, price_range};
pub use quote_summary::{build_notes, build_summary, format_amount};
pub use zone_resolver::resolve_zone;
