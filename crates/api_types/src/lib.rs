use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of a 404 answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub mod leave {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ApprovedLeave {
        pub employee_id: i32,
        pub employee_name: String,
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
        pub approval_status: i32,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UsedLeave {
        pub employee_id: i32,
        pub employee_name: String,
        pub total_used_leave_days: i64,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RemainingLeave {
        pub employee_id: i32,
        pub employee_name: String,
        pub remaining_annual_leave: i32,
        pub remaining_sick_leave: i32,
        pub remaining_special_leave: i32,
        /// Annual budget minus approved usage; negative when over-used.
        pub remaining_annual_leave_after_usage: i64,
    }

    /// Special leave balance, returned by both the lookup and the reward.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SpecialLeave {
        pub employee_id: i32,
        pub remaining_special_leave: i32,
    }
}

pub mod salary {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SalaryPayment {
        pub employee_id: i32,
        pub employee_name: String,
        pub payment_date: NaiveDate,
        pub base_salary: i64,
        pub incentive: i64,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct IncentiveTotal {
        pub employee_id: i32,
        pub employee_name: String,
        pub total_incentive: i64,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExcellentEmployee {
        pub employee_id: i32,
        pub employee_name: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_serialize_as_calendar_days() {
        let leave = leave::ApprovedLeave {
            employee_id: 1,
            employee_name: "Kim".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            approval_status: 1,
        };

        let json = serde_json::to_value(&leave).unwrap();

        assert_eq!(json["start_date"], "2024-03-04");
        assert_eq!(json["end_date"], "2024-03-06");
        assert_eq!(json["employee_name"], "Kim");
    }

    #[test]
    fn special_leave_uses_wire_field_names() {
        let body = serde_json::to_string(&leave::SpecialLeave {
            employee_id: 7,
            remaining_special_leave: 5,
        })
        .unwrap();

        assert_eq!(body, r#"{"employee_id":7,"remaining_special_leave":5}"#);
    }
}
