use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The seven fields a letter is drafted from. All of them are required
/// before generation; field names serialize in the wire form the remote
/// generation service expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterRequest {
    pub letter_type: String,
    pub letter_category: String,
    pub letter_purpose: String,
    /// "نعم" marks a first correspondence; any other value means a repeat.
    pub first_correspondence: String,
    pub recipient: String,
    pub subject: String,
    pub content: String,
}

impl LetterRequest {
    /// True iff every field is populated with something other than whitespace.
    pub fn validate(&self) -> bool {
        [
            &self.letter_type,
            &self.letter_category,
            &self.letter_purpose,
            &self.first_correspondence,
            &self.recipient,
            &self.subject,
            &self.content,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    pub fn is_first_contact(&self) -> bool {
        self.first_correspondence == "نعم"
    }
}

/// A persisted, generated letter plus its metadata. Immutable once appended;
/// workflow status lives in the review log, not on the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRecord {
    pub id: String,
    /// Display date, Arabic-formatted at save time.
    pub date: String,
    pub subject: String,
    /// Stored in English translation; displayed in Arabic.
    pub letter_type: String,
    pub recipient: String,
    pub template: String,
    pub content: String,
    pub category: String,
    pub purpose: String,
    pub first_correspondence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    #[serde(rename = "في الانتظار")]
    Pending,
    #[serde(rename = "تمت المراجعة")]
    Approved,
    #[serde(rename = "يحتاج إلى تحسينات")]
    NeedsImprovement,
}

impl ReviewStatus {
    /// The badge text shown in the records table; filters match against it.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "في الانتظار",
            ReviewStatus::Approved => "تمت المراجعة",
            ReviewStatus::NeedsImprovement => "يحتاج إلى تحسينات",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendStatus {
    #[default]
    #[serde(rename = "في الانتظار")]
    Pending,
    #[serde(rename = "تم الإرسال")]
    Sent,
}

impl SendStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SendStatus::Pending => "في الانتظار",
            SendStatus::Sent => "تم الإرسال",
        }
    }
}

impl std::fmt::Display for SendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One review decision for a letter, keyed by letter id in the review log.
/// Later decisions overwrite earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub letter_id: String,
    pub status: ReviewStatus,
    pub reviewer: String,
    pub notes: String,
    /// RFC 3339 timestamp of the decision.
    pub review_date: String,
}

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a letter id: `LTR-<epoch-ms>-<5 base36 chars>`.
///
/// Uniqueness is probabilistic (timestamp plus random suffix), not
/// guaranteed. The suffix entropy comes from a v4 UUID.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let mut bits = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(5);
    for _ in 0..5 {
        suffix.push(BASE36[(bits % 36) as usize] as char);
        bits /= 36;
    }
    format!("LTR-{}-{}", millis, suffix)
}

/// Storage form of a letter type. The submissions sheet keeps the English
/// name; unknown values pass through unchanged.
pub fn letter_type_to_english(letter_type: &str) -> &str {
    match letter_type {
        "جديد" => "New",
        "رد" => "Reply",
        "متابعة" => "Follow Up",
        "تعاون" => "Co-op",
        other => other,
    }
}

/// Display form of a letter type, whichever form it was stored in.
pub fn letter_type_to_arabic(letter_type: &str) -> &str {
    match letter_type {
        "New" => "جديد",
        "Reply" => "رد",
        "Follow Up" => "متابعة",
        "Co-op" => "تعاون",
        other => other,
    }
}

const WEEKDAYS: [&str; 7] = [
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
    "الأحد",
];

const MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Format a timestamp as an Arabic display date, weekday first:
/// "الثلاثاء، 4 أغسطس 2026".
pub fn arabic_date(at: DateTime<Utc>) -> String {
    let weekday = WEEKDAYS[at.weekday().num_days_from_monday() as usize];
    let month = MONTHS[at.month0() as usize];
    format!("{}، {} {} {}", weekday, at.day(), month, at.year())
}

pub fn today_arabic() -> String {
    arabic_date(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn full_request() -> LetterRequest {
        LetterRequest {
            letter_type: "جديد".into(),
            letter_category: "طلب".into(),
            letter_purpose: "اجتماع".into(),
            first_correspondence: "نعم".into(),
            recipient: "الإدارة".into(),
            subject: "طلب اجازة".into(),
            content: "أرجو الموافقة".into(),
        }
    }

    #[test]
    fn validate_accepts_fully_populated_request() {
        assert!(full_request().validate());
    }

    #[test]
    fn validate_rejects_any_empty_field() {
        for i in 0..7 {
            let mut req = full_request();
            let field = match i {
                0 => &mut req.letter_type,
                1 => &mut req.letter_category,
                2 => &mut req.letter_purpose,
                3 => &mut req.first_correspondence,
                4 => &mut req.recipient,
                5 => &mut req.subject,
                _ => &mut req.content,
            };
            field.clear();
            assert!(!req.validate(), "field {} should be required", i);
        }
    }

    #[test]
    fn validate_rejects_whitespace_only_fields() {
        let mut req = full_request();
        req.subject = "   ".into();
        assert!(!req.validate());
    }

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let ids: Vec<String> = (0..100).map(|_| generate_id()).collect();
        for id in &ids {
            assert!(id.starts_with("LTR-"));
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn generated_id_has_base36_suffix() {
        let id = generate_id();
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 5);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn letter_type_translation_round_trips() {
        assert_eq!(letter_type_to_english("جديد"), "New");
        assert_eq!(letter_type_to_arabic("New"), "جديد");
        assert_eq!(letter_type_to_arabic(letter_type_to_english("متابعة")), "متابعة");
        // Unknown values pass through.
        assert_eq!(letter_type_to_english("تعميم"), "تعميم");
        assert_eq!(letter_type_to_arabic("Memo"), "Memo");
    }

    #[test]
    fn arabic_date_names_weekday_and_month() {
        let at = Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap();
        assert_eq!(arabic_date(at), "الثلاثاء، 4 أغسطس 2026");
    }

    #[test]
    fn review_status_serializes_as_arabic_label() {
        let json = serde_json::to_string(&ReviewStatus::Approved).unwrap();
        assert_eq!(json, "\"تمت المراجعة\"");
        let parsed: ReviewStatus = serde_json::from_str("\"يحتاج إلى تحسينات\"").unwrap();
        assert_eq!(parsed, ReviewStatus::NeedsImprovement);
    }

    #[test]
    fn request_serializes_in_wire_form() {
        let json = serde_json::to_value(full_request()).unwrap();
        assert_eq!(json["letterType"], "جديد");
        assert_eq!(json["firstCorrespondence"], "نعم");
    }
}
