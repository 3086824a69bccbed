//! Local Arabic letter template engine.
//!
//! Pure text assembly: the same request and date always produce the same
//! letter. This is the fallback path when the remote generation service is
//! unreachable, and the reference for what a generated letter looks like.

use crate::model::{today_arabic, LetterRequest};

/// A tone applies one fixed substring replacement atop the base letter;
/// the tones are not independent templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Formal,
    SemiFormal,
    Friendly,
}

impl Tone {
    fn apply(&self, letter: String) -> String {
        match self {
            Tone::Formal => letter,
            Tone::SemiFormal => letter.replace("المحترم/ة", "الكريم/ة"),
            Tone::Friendly => letter.replace(
                "تفضلوا بقبول فائق الاحترام والتقدير",
                "مع خالص التحية والاحترام",
            ),
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "formal" | "رسمي" => Ok(Tone::Formal),
            "semi-formal" | "شبه رسمي" => Ok(Tone::SemiFormal),
            "friendly" | "ودي" => Ok(Tone::Friendly),
            other => Err(format!("Unknown tone: {}", other)),
        }
    }
}

/// Render a letter dated today.
pub fn render(request: &LetterRequest, tone: Tone) -> String {
    render_on(request, tone, &today_arabic())
}

/// Render a letter with an explicit date line. Deterministic for a given
/// request and date.
pub fn render_on(request: &LetterRequest, tone: Tone, date: &str) -> String {
    let letter = format!(
        "بسم الله الرحمن الرحيم\n\
         \n\
         {date}\n\
         \n\
         {recipient} المحترم/ة\n\
         \n\
         السلام عليكم ورحمة الله وبركاته\n\
         \n\
         الموضوع: {subject}\n\
         \n\
         {body}\n\
         \n\
         وتفضلوا بقبول فائق الاحترام والتقدير.\n\
         \n\
         المرسل: [اسم المرسل]\n\
         التوقيع: _______________\n\
         التاريخ: {date}",
        date = date,
        recipient = request.recipient,
        subject = request.subject,
        body = compose_body(request),
    );
    tone.apply(letter)
}

/// The letter body: opening clause, purpose, the drafted content verbatim,
/// and a closing clause picked by category.
pub fn compose_body(request: &LetterRequest) -> String {
    let opening = if request.is_first_contact() {
        "يسعدني أن أتواصل معكم لأول مرة بخصوص "
    } else {
        "أتواصل معكم مجدداً بخصوص "
    };

    format!(
        "{}{}.\n\n{}\n\n{}",
        opening,
        request.letter_purpose,
        request.content,
        closing_clause(&request.letter_category)
    )
}

fn closing_clause(category: &str) -> &'static str {
    match category {
        "طلب" => "نأمل منكم التكرم بالنظر في هذا الطلب والموافقة عليه.",
        "جدولة اجتماع" => "نرجو منكم تحديد الوقت المناسب لكم لعقد هذا الاجتماع.",
        "تهنئة" => "نتقدم لكم بأحر التهاني وأطيب الأمنيات.",
        "دعوة حضور" => "نتشرف بدعوتكم للحضور ونأمل أن نراكم معنا.",
        _ => "شاكرين لكم حسن تعاونكم.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave_request() -> LetterRequest {
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
    fn rendering_is_deterministic() {
        let req = leave_request();
        let a = render_on(&req, Tone::Formal, "الثلاثاء، 4 أغسطس 2026");
        let b = render_on(&req, Tone::Formal, "الثلاثاء، 4 أغسطس 2026");
        assert_eq!(a, b);
    }

    #[test]
    fn first_contact_request_scenario() {
        let req = leave_request();
        let body = compose_body(&req);
        assert!(body.starts_with("يسعدني أن أتواصل معكم لأول مرة بخصوص اجتماع"));
        assert!(body.ends_with("نأمل منكم التكرم بالنظر في هذا الطلب والموافقة عليه."));

        let letter = render_on(&req, Tone::Formal, "الثلاثاء، 4 أغسطس 2026");
        assert!(letter.contains("يسعدني أن أتواصل معكم لأول مرة بخصوص اجتماع"));
        assert!(letter.contains("نأمل منكم التكرم بالنظر في هذا الطلب والموافقة عليه."));
        assert!(letter.contains("الموضوع: طلب اجازة"));
        assert!(letter.contains("أرجو الموافقة"));
    }

    #[test]
    fn repeat_contact_uses_the_other_opening() {
        let mut req = leave_request();
        req.first_correspondence = "لا".into();
        let body = compose_body(&req);
        assert!(body.starts_with("أتواصل معكم مجدداً بخصوص اجتماع"));
    }

    #[test]
    fn closing_clause_is_determined_by_category() {
        assert_eq!(
            closing_clause("جدولة اجتماع"),
            "نرجو منكم تحديد الوقت المناسب لكم لعقد هذا الاجتماع."
        );
        assert_eq!(closing_clause("تهنئة"), "نتقدم لكم بأحر التهاني وأطيب الأمنيات.");
        assert_eq!(
            closing_clause("دعوة حضور"),
            "نتشرف بدعوتكم للحضور ونأمل أن نراكم معنا."
        );
        // Unrecognized categories fall back to the generic thanks clause.
        assert_eq!(closing_clause("شكوى"), "شاكرين لكم حسن تعاونكم.");
        assert_eq!(closing_clause(""), "شاكرين لكم حسن تعاونكم.");
    }

    #[test]
    fn letter_has_the_fixed_structure() {
        let letter = render_on(&leave_request(), Tone::Formal, "DATE");
        assert!(letter.starts_with("بسم الله الرحمن الرحيم"));
        assert!(letter.contains("الإدارة المحترم/ة"));
        assert!(letter.contains("السلام عليكم ورحمة الله وبركاته"));
        assert!(letter.ends_with("التاريخ: DATE"));
    }

    #[test]
    fn semi_formal_softens_the_honorific() {
        let letter = render_on(&leave_request(), Tone::SemiFormal, "DATE");
        assert!(letter.contains("الإدارة الكريم/ة"));
        assert!(!letter.contains("المحترم/ة"));
    }

    #[test]
    fn friendly_swaps_the_closing() {
        let letter = render_on(&leave_request(), Tone::Friendly, "DATE");
        assert!(letter.contains("مع خالص التحية والاحترام"));
        assert!(!letter.contains("وتفضلوا بقبول فائق الاحترام والتقدير"));
    }

    #[test]
    fn tone_parsing() {
        assert_eq!("formal".parse::<Tone>(), Ok(Tone::Formal));
        assert_eq!("شبه رسمي".parse::<Tone>(), Ok(Tone::SemiFormal));
        assert_eq!("ودي".parse::<Tone>(), Ok(Tone::Friendly));
        assert!("casual".parse::<Tone>().is_err());
    }
}
