//! Read-side attendance aggregation.

use crate::error::EngineResult;
use crate::models::{AttendanceStatus, AttendanceSummary, PayPeriod};
use crate::store::AttendanceStore;

/// Aggregates an employee's attendance for one period.
///
/// Filters the store by employee and the period's inclusive date range and
/// groups by status. Pure read-side computation; nothing is mutated.
pub fn summarize(
    attendance: &dyn AttendanceStore,
    employee_id: &str,
    period: PayPeriod,
) -> EngineResult<AttendanceSummary> {
    let (start, end) = period.date_range();
    let records = attendance.find(employee_id, start, end)?;

    let mut summary = AttendanceSummary::default();
    for record in &records {
        match record.status {
            AttendanceStatus::Present => summary.present_days += 1,
            AttendanceStatus::Absent => summary.absent_days += 1,
            AttendanceStatus::Leave => summary.on_leave_days += 1,
            // Holidays, weekends and in-progress days are not aggregated.
            AttendanceStatus::Holiday
            | AttendanceStatus::Weekend
            | AttendanceStatus::Working => {}
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeavePolicy;
    use crate::models::{AttendanceRecord, Employee};
    use crate::store::InMemoryStore;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new(LeavePolicy::default());
        store
            .add_employee(Employee {
                id: "emp_001".to_string(),
                full_name: "Sarah Johnson".to_string(),
                department: "Engineering".to_string(),
                monthly_salary: Decimal::from(3000),
            })
            .unwrap();
        store
    }

    fn insert_day(store: &InMemoryStore, year: i32, month: u32, day: u32, status: AttendanceStatus) {
        store
            .insert(AttendanceRecord {
                employee_id: "emp_001".to_string(),
                date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                check_in: NaiveTime::from_hms_opt(9, 0, 0),
                check_out: None,
                status,
            })
            .unwrap();
    }

    #[test]
    fn test_summary_groups_by_status() {
        let store = seeded_store();
        insert_day(&store, 2026, 1, 2, AttendanceStatus::Present);
        insert_day(&store, 2026, 1, 5, AttendanceStatus::Present);
        insert_day(&store, 2026, 1, 6, AttendanceStatus::Absent);
        insert_day(&store, 2026, 1, 7, AttendanceStatus::Leave);
        insert_day(&store, 2026, 1, 1, AttendanceStatus::Holiday);
        insert_day(&store, 2026, 1, 3, AttendanceStatus::Weekend);

        let period = PayPeriod::new(1, 2026).unwrap();
        let summary = summarize(&store, "emp_001", period).unwrap();
        assert_eq!(summary.present_days, 2);
        assert_eq!(summary.absent_days, 1);
        assert_eq!(summary.on_leave_days, 1);
    }

    #[test]
    fn test_summary_respects_period_boundaries() {
        let store = seeded_store();
        insert_day(&store, 2025, 12, 31, AttendanceStatus::Present);
        insert_day(&store, 2026, 1, 5, AttendanceStatus::Present);
        insert_day(&store, 2026, 2, 1, AttendanceStatus::Present);

        let period = PayPeriod::new(1, 2026).unwrap();
        let summary = summarize(&store, "emp_001", period).unwrap();
        assert_eq!(summary.present_days, 1);
    }

    #[test]
    fn test_empty_period_summarizes_to_zero() {
        let store = seeded_store();
        let period = PayPeriod::new(6, 2026).unwrap();
        let summary = summarize(&store, "emp_001", period).unwrap();
        assert_eq!(summary, AttendanceSummary::default());
    }
}
