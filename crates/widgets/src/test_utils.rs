// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::NaiveDateTime;

use crate::clock::FixedClock;
use crate::datetime::DateTimeWidget;
use crate::template::TemplateSet;

/// Parses a `Y-m-d H:M:S` literal.
pub fn dt(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// A widget whose clock is pinned to the given instant.
pub fn widget_at(text: &str) -> DateTimeWidget {
    DateTimeWidget::new(TemplateSet::default()).with_clock(FixedClock(dt(text)))
}
