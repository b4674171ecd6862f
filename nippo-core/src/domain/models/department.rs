use serde::Deserialize;
use strum::{Display, EnumString};

/// First option of every select; means "not yet chosen".
pub const PLEASE_SELECT: &str = "選択してください";
/// Work not tied to a job number; skips job-type selection entirely.
pub const MISC_CUSTOMER: &str = "雑務";
/// Customer outside the catalogue; requires a free-text name.
pub const OTHER_CUSTOMER: &str = "その他メーカー";

/// Which factory department's report form this session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    #[strum(ascii_case_insensitive, serialize = "cad")]
    Cad,
    #[strum(ascii_case_insensitive, serialize = "machining")]
    Machining,
    #[strum(ascii_case_insensitive, serialize = "finishing")]
    Finishing,
}

/// Everything that differs between the department forms: rosters,
/// catalogues and the per-department special cases.
#[derive(Debug, Clone)]
pub struct DepartmentProfile {
    pub title: &'static str,
    pub workers: &'static [&'static str],
    pub customers: &'static [&'static str],
    pub job_types: &'static [&'static str],
    /// Job type whose job number is pre-filled instead of typed.
    pub estimate_job_type: Option<&'static str>,
    /// The pre-filled job number used with `estimate_job_type`.
    pub estimate_job_number: &'static str,
    /// Job type whose records go to the auxiliary destination.
    pub routed_job_type: Option<&'static str>,
    pub slot_cap: usize,
}

impl Department {
    pub fn profile(self) -> DepartmentProfile {
        match self {
            Department::Cad => DepartmentProfile {
                title: "北青 CAD課作業日報",
                workers: &["富寛", "鈴木", "斎藤", "古郡"],
                customers: &[
                    "ジーテクト",
                    "ヨロズ",
                    "城山",
                    "タチバナ",
                    "浜岳",
                    "三池",
                    "東プレ",
                    "東海鉄工所",
                    "坪山",
                    "インフェック",
                    "千代田",
                    "海津",
                    MISC_CUSTOMER,
                    OTHER_CUSTOMER,
                ],
                job_types: &["新規", "改修", "設変", "見積", "SIM", "その他"],
                estimate_job_type: Some("見積"),
                estimate_job_number: "見積用造形、解析",
                routed_job_type: None,
                slot_cap: 10,
            },
            Department::Machining => DepartmentProfile {
                title: "北青 機械課 作業日報",
                workers: &["大地", "山岸", "坂本", "一條", "松本", "将", "出繩"],
                customers: &[
                    "ジーテクト",
                    "ヨロズ",
                    "城山",
                    "タチバナ",
                    "浜岳",
                    "三池",
                    "東プレ",
                    "千代田",
                    "武部",
                    "インフェック",
                    "東海鉄工所",
                    MISC_CUSTOMER,
                    OTHER_CUSTOMER,
                ],
                job_types: &["新規", "改修", "その他", "自動運転"],
                estimate_job_type: None,
                estimate_job_number: "",
                routed_job_type: Some("自動運転"),
                slot_cap: 10,
            },
            Department::Finishing => DepartmentProfile {
                title: "北青 仕上げ課 作業日報",
                workers: &[
                    "吉田",
                    "中村",
                    "渡辺",
                    "福田",
                    "苫米地",
                    "矢部",
                    "小野",
                    "塩入",
                    "トム",
                    "ユン",
                    "ティエン",
                    "チョン",
                    "アイン",
                    "ナム",
                ],
                customers: &[
                    "ジーテクト",
                    "ヨロズ",
                    "城山",
                    "タチバナ",
                    "浜岳",
                    "三池",
                    "東プレ",
                    "協豊",
                    "千代田",
                    "東海鉄工所",
                    MISC_CUSTOMER,
                    OTHER_CUSTOMER,
                ],
                job_types: &["新規", "玉成", "設変", "パネル", "トライ", "その他"],
                estimate_job_type: None,
                estimate_job_number: "",
                routed_job_type: None,
                slot_cap: 10,
            },
        }
    }
}

impl DepartmentProfile {
    /// Worker roster with the please-select sentinel first.
    pub fn worker_options(&self) -> Vec<&'static str> {
        Self::with_sentinel(self.workers)
    }

    /// Customer catalogue with the please-select sentinel first.
    pub fn customer_options(&self) -> Vec<&'static str> {
        Self::with_sentinel(self.customers)
    }

    /// Job-type catalogue with the please-select sentinel first.
    pub fn job_type_options(&self) -> Vec<&'static str> {
        Self::with_sentinel(self.job_types)
    }

    pub fn default_job_number(&self, job_type: &str) -> &'static str {
        match self.estimate_job_type {
            Some(estimate) if estimate == job_type => self.estimate_job_number,
            _ => "",
        }
    }

    fn with_sentinel(options: &'static [&'static str]) -> Vec<&'static str> {
        let mut all = Vec::with_capacity(options.len() + 1);
        all.push(PLEASE_SELECT);
        all.extend_from_slice(options);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn department_names_round_trip() {
        assert_eq!(Department::from_str("cad").unwrap(), Department::Cad);
        assert_eq!(Department::from_str("Machining").unwrap(), Department::Machining);
        assert_eq!(Department::Finishing.to_string(), "finishing");
        assert!(Department::from_str("painting").is_err());
    }

    #[test]
    fn every_catalogue_leads_with_the_sentinel() {
        for department in [Department::Cad, Department::Machining, Department::Finishing] {
            let profile = department.profile();
            assert_eq!(profile.worker_options()[0], PLEASE_SELECT);
            assert_eq!(profile.customer_options()[0], PLEASE_SELECT);
            assert_eq!(profile.job_type_options()[0], PLEASE_SELECT);
            assert!(profile.customers.contains(&MISC_CUSTOMER));
            assert!(profile.customers.contains(&OTHER_CUSTOMER));
            assert_eq!(profile.slot_cap, 10);
            assert!(profile.title.contains("作業日報"));
        }
    }

    #[test]
    fn only_cad_pre_fills_estimate_numbers() {
        let cad = Department::Cad.profile();
        assert_eq!(cad.default_job_number("見積"), "見積用造形、解析");
        assert_eq!(cad.default_job_number("新規"), "");

        let machining = Department::Machining.profile();
        assert_eq!(machining.default_job_number("見積"), "");
    }

    #[test]
    fn only_machining_routes_a_job_type() {
        assert_eq!(Department::Machining.profile().routed_job_type, Some("自動運転"));
        assert_eq!(Department::Cad.profile().routed_job_type, None);
        assert_eq!(Department::Finishing.profile().routed_job_type, None);
    }
}
