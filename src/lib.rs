//! Vendor proposal scoring.
//!
//! Takes the vendor responses to one procurement request and produces a
//! deterministic ranked comparison: per-criterion scores for price, delivery
//! and warranty, and a weighted total.
//!
//! ```
//! use vendor_rank::proposal::VendorResponse;
//!
//! let responses = vec![
//!     VendorResponse::new(1, "Acme", "sales@acme.test")
//!         .with_price(100.0)
//!         .with_delivery_days(10.0)
//!         .with_warranty("1 year"),
//!     VendorResponse::new(2, "Beta", "bids@beta.test")
//!         .with_price(80.0)
//!         .with_delivery_days(20.0)
//!         .with_warranty("2 years"),
//! ];
//!
//! let ranked = vendor_rank::scoring::score(&responses).unwrap();
//! assert_eq!(ranked[0].vendor_name, "Beta");
//! assert_eq!(ranked[0].total_score, 85.0);
//! ```

pub mod config;
pub mod output;
pub mod proposal;
pub mod scoring;
pub mod store;
