// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server-side HTML form widgets and keyed collection iterators.
//!
//! Two independent pieces live here:
//!
//! - [`filter`]: a lazy, key-preserving filter adapter for keyed iterators.
//! - [`datetime`]: a composite widget that renders one `<select>` per
//!   date/time component, driven by a [`DateTimeConfig`] and a pluggable
//!   [`TemplateSet`].
//!
//! Rendering is synchronous and side-effect free. Invalid selection values
//! never fail a render; they degrade to the current instant supplied by the
//! injected [`Clock`].

pub mod clock;
pub mod datetime;
pub mod filter;
pub mod select;
pub mod selection;
pub mod template;

#[cfg(test)]
pub(crate) mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{DateTimeConfig, DateTimeWidget, EmptyOption, FieldConfig, FieldSetting, Order};
pub use filter::{FilterIterator, FilteredView, KeyPredicate, KeyedIteratorExt};
pub use select::{SelectBox, SelectOption};
pub use selection::{DateTimeParts, DateTimeValue, Round, SelectionError};
pub use template::{Attributes, TemplateSet};
