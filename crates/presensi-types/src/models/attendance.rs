//! Attendance report returned by `POST /presensi`.
//!
//! Wire names follow the portal's Indonesian vocabulary and must stay stable for
//! existing clients: `wisPresensi` (already attended) and `durungPresensi`
//! (not yet attended).

use serde::{Deserialize, Serialize};

/// Value of [`AttendanceReport::status`] for a completed scrape.
pub const STATUS_SUCCESS: &str = "success";

/// A class meeting the student has already submitted attendance for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedSession {
    #[serde(rename = "namaMatkul")]
    pub course_name: String,
    #[serde(rename = "waktuMatkul")]
    pub time_slot: String,
    #[serde(rename = "namaDosen")]
    pub lecturer_name: String,
}

/// A class meeting still awaiting an attendance submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingSession {
    #[serde(rename = "namaMatkul")]
    pub course_name: String,
    #[serde(rename = "waktuMatkul")]
    pub time_slot: String,
    #[serde(rename = "namaDosen")]
    pub lecturer_name: String,
    /// Absolute URL of the page where attendance is submitted
    #[serde(rename = "linkPresensi")]
    pub action_link: String,
}

/// Both lists, each in the order the sessions appear on the overview page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceReport {
    pub status: String,
    #[serde(rename = "wisPresensi", default)]
    pub completed: Vec<CompletedSession>,
    #[serde(rename = "durungPresensi", default)]
    pub pending: Vec<PendingSession>,
}

impl AttendanceReport {
    pub fn success(completed: Vec<CompletedSession>, pending: Vec<PendingSession>) -> Self {
        Self { status: STATUS_SUCCESS.to_string(), completed, pending }
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.pending.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_report() -> AttendanceReport {
        AttendanceReport::success(
            vec![CompletedSession {
                course_name: "Sistem Operasi".to_string(),
                time_slot: "07:30 - 10:00".to_string(),
                lecturer_name: "Dr. Wibowo".to_string(),
            }],
            vec![PendingSession {
                course_name: "Basis Data".to_string(),
                time_slot: "13:00 - 15:30".to_string(),
                lecturer_name: "Ir. Sari".to_string(),
                action_link: "https://ocw.uns.ac.id/presensi/submit/42".to_string(),
            }],
        )
    }

    #[test]
    fn test_wire_keys_are_preserved() {
        let value = serde_json::to_value(sample_report()).unwrap();

        assert_eq!(value["status"], "success");
        let done = &value["wisPresensi"][0];
        assert_eq!(done["namaMatkul"], "Sistem Operasi");
        assert_eq!(done["waktuMatkul"], "07:30 - 10:00");
        assert_eq!(done["namaDosen"], "Dr. Wibowo");
        assert!(done.get("linkPresensi").is_none());

        let todo = &value["durungPresensi"][0];
        assert_eq!(todo["linkPresensi"], "https://ocw.uns.ac.id/presensi/submit/42");
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let decoded: AttendanceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, report);
    }

    #[test]
    fn test_empty_lists_serialize_as_arrays() {
        let json = serde_json::to_string(&AttendanceReport::success(vec![], vec![])).unwrap();
        assert_eq!(json, r#"{"status":"success","wisPresensi":[],"durungPresensi":[]}"#);
    }
}
