//! Per-clinic settings: the flat persisted row and its grouped wire shape.
//!
//! The row is stored flat (one column per scalar, business hours as JSONB).
//! The API surfaces it reshaped into three groups: attendance, leave, and
//! business_hours. Defaults are defined ONCE here and mirrored by the column
//! defaults in the initial migration; the in-memory fallback used when row
//! creation fails is built from the same constructors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

/// Weekday name (lowercase) -> opening hours for that day.
pub type BusinessHours = BTreeMap<String, DayHours>;

/// Opening hours for a single weekday. `open`/`close` are "HH:MM" strings,
/// null when the day is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayHours {
    pub open: Option<String>,
    pub close: Option<String>,
    pub closed: bool,
}

impl DayHours {
    pub fn open_between(open: &str, close: &str) -> Self {
        DayHours {
            open: Some(open.to_string()),
            close: Some(close.to_string()),
            closed: false,
        }
    }

    pub fn closed_all_day() -> Self {
        DayHours {
            open: None,
            close: None,
            closed: true,
        }
    }
}

/// Default opening hours: Mon-Fri 08:00-17:00, Sat 09:00-13:00, Sun closed.
pub fn default_business_hours() -> BusinessHours {
    let mut hours = BTreeMap::new();
    for day in ["monday", "tuesday", "wednesday", "thursday", "friday"] {
        hours.insert(day.to_string(), DayHours::open_between("08:00", "17:00"));
    }
    hours.insert(
        "saturday".to_string(),
        DayHours::open_between("09:00", "13:00"),
    );
    hours.insert("sunday".to_string(), DayHours::closed_all_day());
    hours
}

/// Flat settings record, one per clinic (`clinic_settings` table).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ClinicSettingsRow {
    pub clinic_id: Uuid,
    pub required_daily_hours: Decimal,
    pub unpaid_break_minutes: i32,
    pub late_threshold_minutes: i32,
    pub overtime_multiplier: Decimal,
    pub annual_leave_days: i32,
    pub sick_leave_days: i32,
    pub maternity_leave_days: i32,
    pub paternity_leave_days: i32,
    pub leave_carryover_allowed: bool,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub business_hours: BusinessHours,
}

impl ClinicSettingsRow {
    /// The canonical default settings record. Must stay in lockstep with the
    /// column defaults in the initial migration.
    pub fn default_for(clinic_id: Uuid) -> Self {
        ClinicSettingsRow {
            clinic_id,
            required_daily_hours: Decimal::new(800, 2),
            unpaid_break_minutes: 30,
            late_threshold_minutes: 15,
            overtime_multiplier: Decimal::new(150, 2),
            annual_leave_days: 21,
            sick_leave_days: 10,
            maternity_leave_days: 90,
            paternity_leave_days: 14,
            leave_carryover_allowed: false,
            business_hours: default_business_hours(),
        }
    }

    /// Reshape the flat row into the grouped wire representation.
    pub fn into_groups(self) -> SettingsGroups {
        SettingsGroups {
            attendance: AttendanceSettings {
                required_daily_hours: self.required_daily_hours,
                unpaid_break_minutes: self.unpaid_break_minutes,
                late_threshold_minutes: self.late_threshold_minutes,
                overtime_multiplier: self.overtime_multiplier,
            },
            leave: LeaveSettings {
                annual_leave_days: self.annual_leave_days,
                sick_leave_days: self.sick_leave_days,
                maternity_leave_days: self.maternity_leave_days,
                paternity_leave_days: self.paternity_leave_days,
                leave_carryover_allowed: self.leave_carryover_allowed,
            },
            business_hours: self.business_hours,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceSettings {
    pub required_daily_hours: Decimal,
    pub unpaid_break_minutes: i32,
    pub late_threshold_minutes: i32,
    pub overtime_multiplier: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveSettings {
    pub annual_leave_days: i32,
    pub sick_leave_days: i32,
    pub maternity_leave_days: i32,
    pub paternity_leave_days: i32,
    pub leave_carryover_allowed: bool,
}

/// Grouped settings as returned by the API. Only these fields are surfaced;
/// any future columns stay invisible until explicitly added here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsGroups {
    pub attendance: AttendanceSettings,
    pub leave: LeaveSettings,
    pub business_hours: BusinessHours,
}

/// Sparse attendance update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AttendanceUpdate {
    pub required_daily_hours: Option<Decimal>,
    pub unpaid_break_minutes: Option<i32>,
    pub late_threshold_minutes: Option<i32>,
    pub overtime_multiplier: Option<Decimal>,
}

/// Sparse leave update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LeaveUpdate {
    pub annual_leave_days: Option<i32>,
    pub sick_leave_days: Option<i32>,
    pub maternity_leave_days: Option<i32>,
    pub paternity_leave_days: Option<i32>,
    pub leave_carryover_allowed: Option<bool>,
}

/// The full sparse update set for one settings row. Scalars merge
/// field-by-field; `business_hours` replaces the whole object atomically.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub required_daily_hours: Option<Decimal>,
    pub unpaid_break_minutes: Option<i32>,
    pub late_threshold_minutes: Option<i32>,
    pub overtime_multiplier: Option<Decimal>,
    pub annual_leave_days: Option<i32>,
    pub sick_leave_days: Option<i32>,
    pub maternity_leave_days: Option<i32>,
    pub paternity_leave_days: Option<i32>,
    pub leave_carryover_allowed: Option<bool>,
    pub business_hours: Option<BusinessHours>,
}

impl SettingsUpdate {
    /// Flatten the grouped request fields into one update set.
    pub fn from_groups(
        attendance: Option<AttendanceUpdate>,
        leave: Option<LeaveUpdate>,
        business_hours: Option<BusinessHours>,
    ) -> Self {
        let attendance = attendance.unwrap_or_default();
        let leave = leave.unwrap_or_default();
        SettingsUpdate {
            required_daily_hours: attendance.required_daily_hours,
            unpaid_break_minutes: attendance.unpaid_break_minutes,
            late_threshold_minutes: attendance.late_threshold_minutes,
            overtime_multiplier: attendance.overtime_multiplier,
            annual_leave_days: leave.annual_leave_days,
            sick_leave_days: leave.sick_leave_days,
            maternity_leave_days: leave.maternity_leave_days,
            paternity_leave_days: leave.paternity_leave_days,
            leave_carryover_allowed: leave.leave_carryover_allowed,
            business_hours,
        }
    }

    /// An empty update set means no settings write happens at all.
    pub fn is_empty(&self) -> bool {
        self.required_daily_hours.is_none()
            && self.unpaid_break_minutes.is_none()
            && self.late_threshold_minutes.is_none()
            && self.overtime_multiplier.is_none()
            && self.annual_leave_days.is_none()
            && self.sick_leave_days.is_none()
            && self.maternity_leave_days.is_none()
            && self.paternity_leave_days.is_none()
            && self.leave_carryover_allowed.is_none()
            && self.business_hours.is_none()
    }

    /// Defaults overlaid with the provided fields; used for the insert arm of
    /// the settings upsert so a first write lands on default values for every
    /// omitted field.
    pub fn merged_with_defaults(&self, clinic_id: Uuid) -> ClinicSettingsRow {
        let defaults = ClinicSettingsRow::default_for(clinic_id);
        ClinicSettingsRow {
            clinic_id,
            required_daily_hours: self
                .required_daily_hours
                .unwrap_or(defaults.required_daily_hours),
            unpaid_break_minutes: self
                .unpaid_break_minutes
                .unwrap_or(defaults.unpaid_break_minutes),
            late_threshold_minutes: self
                .late_threshold_minutes
                .unwrap_or(defaults.late_threshold_minutes),
            overtime_multiplier: self
                .overtime_multiplier
                .unwrap_or(defaults.overtime_multiplier),
            annual_leave_days: self.annual_leave_days.unwrap_or(defaults.annual_leave_days),
            sick_leave_days: self.sick_leave_days.unwrap_or(defaults.sick_leave_days),
            maternity_leave_days: self
                .maternity_leave_days
                .unwrap_or(defaults.maternity_leave_days),
            paternity_leave_days: self
                .paternity_leave_days
                .unwrap_or(defaults.paternity_leave_days),
            leave_carryover_allowed: self
                .leave_carryover_allowed
                .unwrap_or(defaults.leave_carryover_allowed),
            business_hours: self
                .business_hours
                .clone()
                .unwrap_or(defaults.business_hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values_match_schema_defaults() {
        let defaults = ClinicSettingsRow::default_for(Uuid::new_v4());
        assert_eq!(defaults.required_daily_hours, Decimal::new(800, 2));
        assert_eq!(defaults.unpaid_break_minutes, 30);
        assert_eq!(defaults.late_threshold_minutes, 15);
        assert_eq!(defaults.overtime_multiplier, Decimal::new(150, 2));
        assert_eq!(defaults.annual_leave_days, 21);
        assert_eq!(defaults.sick_leave_days, 10);
        assert_eq!(defaults.maternity_leave_days, 90);
        assert_eq!(defaults.paternity_leave_days, 14);
        assert!(!defaults.leave_carryover_allowed);
    }

    #[test]
    fn test_default_business_hours_covers_every_day() {
        let hours = default_business_hours();
        assert_eq!(hours.len(), 7);
        assert_eq!(
            hours["monday"],
            DayHours::open_between("08:00", "17:00")
        );
        assert_eq!(
            hours["saturday"],
            DayHours::open_between("09:00", "13:00")
        );
        let sunday = &hours["sunday"];
        assert!(sunday.closed);
        assert!(sunday.open.is_none());
        assert!(sunday.close.is_none());
    }

    #[test]
    fn test_into_groups_surfaces_all_nine_scalars() {
        let clinic_id = Uuid::new_v4();
        let groups = ClinicSettingsRow::default_for(clinic_id).into_groups();
        assert_eq!(groups.attendance.unpaid_break_minutes, 30);
        assert_eq!(groups.leave.maternity_leave_days, 90);
        assert_eq!(groups.business_hours.len(), 7);

        let json = serde_json::to_value(&groups).expect("serialize");
        assert!(json.get("attendance").is_some());
        assert!(json.get("leave").is_some());
        assert!(json.get("business_hours").is_some());
    }

    #[test]
    fn test_from_groups_copies_only_present_fields() {
        let update = SettingsUpdate::from_groups(
            Some(AttendanceUpdate {
                overtime_multiplier: Some(Decimal::new(200, 2)),
                ..Default::default()
            }),
            None,
            None,
        );
        assert_eq!(update.overtime_multiplier, Some(Decimal::new(200, 2)));
        assert!(update.required_daily_hours.is_none());
        assert!(update.annual_leave_days.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_empty_update_set() {
        assert!(SettingsUpdate::from_groups(None, None, None).is_empty());
        assert!(SettingsUpdate::from_groups(
            Some(AttendanceUpdate::default()),
            Some(LeaveUpdate::default()),
            None
        )
        .is_empty());
    }

    #[test]
    fn test_merged_with_defaults_overlays_provided_fields() {
        let clinic_id = Uuid::new_v4();
        let update = SettingsUpdate {
            sick_leave_days: Some(12),
            ..Default::default()
        };
        let merged = update.merged_with_defaults(clinic_id);
        assert_eq!(merged.sick_leave_days, 12);
        assert_eq!(merged.annual_leave_days, 21);
        assert_eq!(merged.clinic_id, clinic_id);
    }

    #[test]
    fn test_business_hours_replaces_whole_object() {
        let mut sunday_only = BusinessHours::new();
        sunday_only.insert(
            "sunday".to_string(),
            DayHours::open_between("10:00", "14:00"),
        );
        let update = SettingsUpdate::from_groups(None, None, Some(sunday_only));
        let merged = update.merged_with_defaults(Uuid::new_v4());
        // no per-weekday merge: the provided object wins wholesale
        assert_eq!(merged.business_hours.len(), 1);
        assert!(!merged.business_hours["sunday"].closed);
    }

    #[test]
    fn test_day_hours_serde_round_trip() {
        let closed: DayHours =
            serde_json::from_str(r#"{"open":null,"close":null,"closed":true}"#).expect("parse");
        assert_eq!(closed, DayHours::closed_all_day());

        let json = serde_json::to_value(DayHours::open_between("08:00", "17:00")).expect("ser");
        assert_eq!(json["open"], "08:00");
        assert_eq!(json["closed"], false);
    }
}
