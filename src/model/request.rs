use crate::model::member::Member;
use chrono::Local;

/// Column order of the requests sheet. Appended rows must match it.
pub const REQUEST_COLUMNS: [&str; 8] = [
    "Timestamp",
    "MemberEmail",
    "MemberID",
    "RequestType",
    "Message",
    "Status",
    "HandledBy",
    "AdminNotes",
];

/// Initial status of every submitted request. Later transitions (in-progress,
/// closed, handler, notes) happen through direct sheet edits, never here.
pub const STATUS_NEW: &str = "New";

#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub timestamp: String,
    pub member_email: String,
    pub member_id: String,
    pub request_type: String,
    pub message: String,
}

impl UpdateRequest {
    pub fn new(member: &Member, request_type: &str, message: &str) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            member_email: member.email.clone(),
            member_id: member.member_id.clone(),
            request_type: request_type.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Row in REQUEST_COLUMNS order. HandledBy and AdminNotes start empty.
    pub fn into_row(self) -> Vec<String> {
        vec![
            self.timestamp,
            self.member_email,
            self.member_id,
            self.request_type,
            self.message,
            STATUS_NEW.to_string(),
            String::new(),
            String::new(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::member::Credential;

    fn member() -> Member {
        Member {
            member_id: "M001".to_string(),
            member_name: "Aiko".to_string(),
            email: "aiko@example.com".to_string(),
            leave_year: "2025".to_string(),
            annual_allowance: 20.0,
            leave_taken: 4.0,
            leave_balance: 16.0,
            last_updated: "2025-06-01".to_string(),
            notes: String::new(),
            credential: Credential::Missing,
        }
    }

    #[test]
    fn test_row_matches_schema_order() {
        let req = UpdateRequest::new(&member(), "Contact change", "  new phone number  ");
        let row = req.into_row();
        assert_eq!(row.len(), REQUEST_COLUMNS.len());
        assert_eq!(row[1], "aiko@example.com");
        assert_eq!(row[2], "M001");
        assert_eq!(row[3], "Contact change");
        assert_eq!(row[4], "new phone number");
        assert_eq!(row[5], STATUS_NEW);
        assert_eq!(row[6], "");
        assert_eq!(row[7], "");
    }

    #[test]
    fn test_timestamp_assigned_at_submission() {
        let req = UpdateRequest::new(&member(), "Other", "x");
        // %Y-%m-%d %H:%M:%S
        assert_eq!(req.timestamp.len(), 19);
        assert_eq!(&req.timestamp[4..5], "-");
        assert_eq!(&req.timestamp[10..11], " ");
    }
}
