// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composite date/time `<select>` widget.
//!
//! Renders one `<select>` per enabled sub-field in the fixed order year,
//! month, day, hour, minute, second, meridian. Each select's name is the
//! base name plus the field name, e.g. `date[year]`.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::clock::{Clock, SystemClock};
use crate::select::{SelectBox, SelectOption};
use crate::selection::{DateTimeValue, Round, RoundUnit, resolve, round_to_interval};
use crate::template::{Attributes, TemplateSet};

/// English month names for the `names` option.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Option ordering for numeric ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

/// The `empty` option: disabled, a blank label, or a custom label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EmptyOption {
    Flag(bool),
    Label(String),
}

impl Default for EmptyOption {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl EmptyOption {
    /// The label to render, if the empty option is enabled.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Flag(false) => None,
            Self::Flag(true) => Some(""),
            Self::Label(label) => Some(label),
        }
    }
}

/// Per-field rendering options.
///
/// `start`/`end` bound numeric ranges (year and hour); `interval` and
/// `round` apply to minute and second fields; `format` selects 12- or
/// 24-hour mode; `names` swaps month numbers for month names. Any other
/// key is treated as an HTML attribute and copied onto the `<select>`
/// tag in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub start: Option<i32>,
    pub end: Option<i32>,
    pub interval: Option<u32>,
    pub round: Round,
    pub order: Order,
    pub format: Option<u32>,
    pub names: bool,
    pub empty: EmptyOption,
    #[serde(flatten)]
    pub attrs: Attributes,
}

impl FieldConfig {
    fn is_twelve_hour(&self) -> bool {
        self.format == Some(12)
    }

    /// Interval greater than one, if configured.
    fn rounding_interval(&self) -> Option<u32> {
        self.interval.filter(|interval| *interval > 1)
    }
}

/// A field is either disabled outright (`false`) or carries its config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldSetting {
    Toggle(bool),
    Enabled(FieldConfig),
}

impl Default for FieldSetting {
    fn default() -> Self {
        Self::Enabled(FieldConfig::default())
    }
}

impl FieldSetting {
    /// Shorthand for a disabled field.
    pub fn off() -> Self {
        Self::Toggle(false)
    }

    fn config(&self) -> Option<FieldConfig> {
        match self {
            Self::Toggle(false) => None,
            Self::Toggle(true) => Some(FieldConfig::default()),
            Self::Enabled(config) => Some(config.clone()),
        }
    }
}

impl From<FieldConfig> for FieldSetting {
    fn from(config: FieldConfig) -> Self {
        Self::Enabled(config)
    }
}

/// Full widget configuration.
///
/// Year through second render by default; meridian only when enabled
/// explicitly or implied by a 12-hour hour field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DateTimeConfig {
    /// Base name for the `name` attributes, e.g. `date` -> `date[year]`.
    pub name: String,
    /// The current selection, if any.
    pub val: Option<DateTimeValue>,
    pub year: FieldSetting,
    pub month: FieldSetting,
    pub day: FieldSetting,
    pub hour: FieldSetting,
    pub minute: FieldSetting,
    pub second: FieldSetting,
    pub meridian: FieldSetting,
}

impl Default for DateTimeConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            val: None,
            year: FieldSetting::default(),
            month: FieldSetting::default(),
            day: FieldSetting::default(),
            hour: FieldSetting::default(),
            minute: FieldSetting::default(),
            second: FieldSetting::default(),
            meridian: FieldSetting::off(),
        }
    }
}

/// Renders a group of date/time `<select>` elements.
pub struct DateTimeWidget {
    templates: TemplateSet,
    select: SelectBox,
    clock: Box<dyn Clock>,
}

impl Default for DateTimeWidget {
    fn default() -> Self {
        Self::new(TemplateSet::default())
    }
}

impl DateTimeWidget {
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            select: SelectBox::new(templates.clone()),
            templates,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source. Selection fallback and the default year
    /// range both read from it.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Render the configured fields into one HTML fragment.
    ///
    /// Never fails: an unparseable `val` degrades to the current instant
    /// and an absent `val` leaves every field unselected.
    pub fn render(&self, config: &DateTimeConfig) -> String {
        let year = config.year.config();
        let month = config.month.config();
        let day = config.day.config();
        let hour = config.hour.config();
        let minute = config.minute.config();
        let second = config.second.config();

        // A 12-hour clock implies a meridian select.
        let twelve_hour = hour.as_ref().is_some_and(FieldConfig::is_twelve_hour);
        let meridian = match (config.meridian.config(), twelve_hour) {
            (None, true) => Some(FieldConfig::default()),
            (setting, _) => setting,
        };

        let mut selected = resolve(config.val.as_ref(), self.clock.as_ref());
        if let Some(instant) = selected {
            let mut instant = instant;
            if let Some(interval) = second.as_ref().and_then(FieldConfig::rounding_interval) {
                let mode = second.as_ref().map(|c| c.round).unwrap_or_default();
                instant = round_to_interval(instant, RoundUnit::Second, interval, mode);
            }
            if let Some(interval) = minute.as_ref().and_then(FieldConfig::rounding_interval) {
                let mode = minute.as_ref().map(|c| c.round).unwrap_or_default();
                instant = round_to_interval(instant, RoundUnit::Minute, interval, mode);
            }
            selected = Some(instant);
        }

        let base = config.name.as_str();
        let year_html = year
            .map(|cfg| self.render_year(base, &cfg, selected))
            .unwrap_or_default();
        let month_html = month
            .map(|cfg| self.render_month(base, &cfg, selected))
            .unwrap_or_default();
        let day_html = day
            .map(|cfg| self.render_day(base, &cfg, selected))
            .unwrap_or_default();
        let hour_html = hour
            .map(|cfg| self.render_hour(base, &cfg, selected))
            .unwrap_or_default();
        let minute_html = minute
            .map(|cfg| self.render_minute(base, &cfg, selected))
            .unwrap_or_default();
        let second_html = second
            .map(|cfg| self.render_second(base, &cfg, selected))
            .unwrap_or_default();
        let meridian_html = meridian
            .map(|cfg| self.render_meridian(base, &cfg, selected))
            .unwrap_or_default();

        TemplateSet::format(
            &self.templates.date_widget,
            &[
                ("year", &year_html),
                ("month", &month_html),
                ("day", &day_html),
                ("hour", &hour_html),
                ("minute", &minute_html),
                ("second", &second_html),
                ("meridian", &meridian_html),
            ],
        )
    }

    fn render_year(
        &self,
        base: &str,
        cfg: &FieldConfig,
        selected: Option<NaiveDateTime>,
    ) -> String {
        let now_year = self.clock.now().year();
        let mut start = cfg.start.unwrap_or(now_year - 5);
        let mut end = cfg.end.unwrap_or(now_year + 5);
        let selected_year = selected.map(|instant| instant.year());
        if let Some(year) = selected_year {
            // A selection outside the configured range widens it.
            start = start.min(year);
            end = end.max(year);
        }
        let mut options: Vec<SelectOption> = (start..=end)
            .map(|year| SelectOption::new(year.to_string(), year.to_string()))
            .collect();
        apply_order(&mut options, cfg.order);
        let value = selected_year.map(|year| year.to_string());
        self.render_field(base, "year", cfg, &options, value)
    }

    fn render_month(
        &self,
        base: &str,
        cfg: &FieldConfig,
        selected: Option<NaiveDateTime>,
    ) -> String {
        let mut options: Vec<SelectOption> = (1..=12u32)
            .map(|month| {
                let label = if cfg.names {
                    MONTH_NAMES[month as usize - 1].to_string()
                } else {
                    month.to_string()
                };
                SelectOption::new(format!("{month:02}"), label)
            })
            .collect();
        apply_order(&mut options, cfg.order);
        let value = selected.map(|instant| format!("{:02}", instant.month()));
        self.render_field(base, "month", cfg, &options, value)
    }

    fn render_day(&self, base: &str, cfg: &FieldConfig, selected: Option<NaiveDateTime>) -> String {
        let mut options: Vec<SelectOption> = (1..=31u32)
            .map(|day| SelectOption::new(format!("{day:02}"), day.to_string()))
            .collect();
        apply_order(&mut options, cfg.order);
        let value = selected.map(|instant| format!("{:02}", instant.day()));
        self.render_field(base, "day", cfg, &options, value)
    }

    fn render_hour(
        &self,
        base: &str,
        cfg: &FieldConfig,
        selected: Option<NaiveDateTime>,
    ) -> String {
        let max: i32 = if cfg.is_twelve_hour() { 12 } else { 24 };
        let start = cfg.start.unwrap_or(1).clamp(1, max);
        let end = cfg.end.unwrap_or(max).clamp(1, max);
        let mut options: Vec<SelectOption> = (start..=end)
            .map(|hour| SelectOption::new(format!("{hour:02}"), hour.to_string()))
            .collect();
        apply_order(&mut options, cfg.order);
        let value = selected.map(|instant| {
            let hour = instant.hour();
            let display = if cfg.is_twelve_hour() {
                match hour % 12 {
                    0 => 12,
                    twelve_hour => twelve_hour,
                }
            } else if hour == 0 {
                // Midnight on a 1-24 dial.
                24
            } else {
                hour
            };
            format!("{display:02}")
        });
        self.render_field(base, "hour", cfg, &options, value)
    }

    fn render_minute(
        &self,
        base: &str,
        cfg: &FieldConfig,
        selected: Option<NaiveDateTime>,
    ) -> String {
        let interval = cfg.interval.unwrap_or(1).max(1);
        let mut options: Vec<SelectOption> = (0..60u32)
            .step_by(interval as usize)
            .map(|minute| SelectOption::new(format!("{minute:02}"), format!("{minute:02}")))
            .collect();
        apply_order(&mut options, cfg.order);
        let value = selected.map(|instant| format!("{:02}", instant.minute()));
        self.render_field(base, "minute", cfg, &options, value)
    }

    fn render_second(
        &self,
        base: &str,
        cfg: &FieldConfig,
        selected: Option<NaiveDateTime>,
    ) -> String {
        let interval = cfg.interval.unwrap_or(1).max(1);
        // Multiples of the interval only, with 60 standing in for second 0
        // so the snapped selection always lands on an option.
        let mut options: Vec<SelectOption> = (interval..=60u32)
            .step_by(interval as usize)
            .map(|second| SelectOption::new(format!("{second:02}"), format!("{second:02}")))
            .collect();
        apply_order(&mut options, cfg.order);
        let value = selected.map(|instant| {
            let second = instant.second();
            let display = if second == 0 { 60 } else { second };
            format!("{display:02}")
        });
        self.render_field(base, "second", cfg, &options, value)
    }

    fn render_meridian(
        &self,
        base: &str,
        cfg: &FieldConfig,
        selected: Option<NaiveDateTime>,
    ) -> String {
        let options = [SelectOption::new("am", "am"), SelectOption::new("pm", "pm")];
        let value = selected.map(|instant| {
            if instant.hour() >= 12 {
                "pm".to_string()
            } else {
                "am".to_string()
            }
        });
        self.render_field(base, "meridian", cfg, &options, value)
    }

    fn render_field(
        &self,
        base: &str,
        field: &str,
        cfg: &FieldConfig,
        options: &[SelectOption],
        value: Option<String>,
    ) -> String {
        self.select.render(
            &format!("{base}[{field}]"),
            &cfg.attrs,
            options,
            value.as_deref(),
            cfg.empty.label(),
        )
    }
}

fn apply_order(options: &mut [SelectOption], order: Order) {
    if order == Order::Desc {
        options.reverse();
    }
}

#[cfg(test)]
#[path = "datetime_tests.rs"]
mod tests;
