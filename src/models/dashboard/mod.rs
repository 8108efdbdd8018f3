use serde::Serialize;
use ts_rs::TS;

/// 管理后台统计
#[derive(Debug, Clone, Default, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardStats {
    pub students: i64,
    pub teachers: i64,
    pub admins: i64,
    pub teams: i64,
    pub exam_results: i64,
    pub passed_results: i64,
    /// 百分比，保留两位小数；没有成绩时为 0
    pub pass_rate: f64,
    pub certificates_total: i64,
    pub certificates_this_year: i64,
}

impl DashboardStats {
    pub fn compute_pass_rate(passed: i64, total: i64) -> f64 {
        if total <= 0 {
            return 0.0;
        }
        let rate = passed as f64 * 100.0 / total as f64;
        (rate * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_rate() {
        assert_eq!(DashboardStats::compute_pass_rate(0, 0), 0.0);
        assert_eq!(DashboardStats::compute_pass_rate(1, 3), 33.33);
        assert_eq!(DashboardStats::compute_pass_rate(4, 4), 100.0);
    }
}
