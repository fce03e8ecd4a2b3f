use chrono::Month;

/// Date with possibly-missing components, as IMDb reports them.
///
/// Absent components stay `None`; they are never zero-filled. The display
/// month name is derived from the month number, so a record built from just
/// a month number still carries both forms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartialDate {
    pub day: Option<u32>,
    /// Month name in English, e.g. `"July"`.
    pub month: Option<String>,
    /// Month number, 1 through 12.
    pub mon: Option<u32>,
    pub year: Option<i32>,
}

impl PartialDate {
    pub fn from_components(
        day: Option<u32>,
        mon: Option<u32>,
        year: Option<i32>,
    ) -> Self {
        PartialDate {
            day,
            month: mon.and_then(month_name).map(str::to_string),
            mon,
            year,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.mon.is_none() && self.year.is_none()
    }
}

/// English name for a 1-based month number.
pub fn month_name(mon: u32) -> Option<&'static str> {
    u8::try_from(mon)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}
