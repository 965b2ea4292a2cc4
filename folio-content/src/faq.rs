//! Frequently asked questions for the accordion section.

/// A question/answer pair shown in the FAQ accordion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    /// Stable identifier, used as the accordion toggle key.
    pub id: usize,
    /// The question shown on the collapsed row.
    pub question: String,
    /// The answer revealed when the row expands.
    pub answer: String,
}

/// The built-in FAQ entries.
pub fn default_entries() -> Vec<FaqEntry> {
    let entries = [
        (
            "איך אני יכול להזמין ספרים מהחנות?",
            "ניתן להזמין ספרים דרך האתר שלנו, בטלפון, או בביקור בחנות הפיזית שלנו. לאחר ביצוע ההזמנה, תקבלו אישור במייל עם פרטי ההזמנה ומועד משלוח משוער.",
        ),
        (
            "מהי מדיניות ההחזרות והזיכויים?",
            "ניתן להחזיר מוצרים תוך 14 יום מיום הרכישה, כל עוד הם במצב חדש ובאריזה המקורית. זיכוי יינתן בהתאם לאמצעי התשלום המקורי. ספרים דיגיטליים אינם ניתנים להחזרה לאחר ההורדה.",
        ),
        (
            "האם יש אפשרות למשלוח לכל הארץ?",
            "כן, אנו מספקים שירותי משלוח לכל רחבי הארץ. משלוחים בתוך העיר מגיעים תוך 1-2 ימי עסקים, ולשאר חלקי הארץ תוך 2-4 ימי עסקים. קיימת אפשרות למשלוח מהיר בתוספת תשלום.",
        ),
        (
            "האם ניתן להזמין ספרים שאינם במלאי?",
            "בהחלט! אנו יכולים להזמין עבורכם ספרים שאינם במלאי. זמן האספקה תלוי בזמינות הספר אצל הספקים שלנו ויכול לנוע בין שבוע לשלושה שבועות. תקבלו עדכון ברגע שהספר יגיע לחנות.",
        ),
        (
            "האם קיימות הנחות למנויים או לקוחות קבועים?",
            "כן, אנו מציעים תכנית נאמנות ללקוחות קבועים. לאחר הצטרפות לתכנית, תוכלו ליהנות מהנחות קבועות, מבצעים מיוחדים, והזמנה מוקדמת של ספרים חדשים. פרטים נוספים ניתן לקבל בחנות או באזור האישי באתר.",
        ),
        (
            "האם החנות מארגנת אירועי השקת ספרים ומפגשים עם סופרים?",
            "בהחלט! אנו מקיימים אירועי השקה, מפגשי קוראים וסופרים, וסדנאות כתיבה באופן קבוע. לוח האירועים המעודכן מופיע באתר ובדף הפייסבוק שלנו. מוזמנים להירשם לניוזלטר כדי לקבל עדכונים שוטפים.",
        ),
    ];
    entries
        .into_iter()
        .enumerate()
        .map(|(index, (question, answer))| FaqEntry {
            id: index + 1,
            question: question.into(),
            answer: answer.into(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_numbered_from_one() {
        let entries = default_entries();
        assert_eq!(entries.len(), 6);
        assert!(
            entries
                .iter()
                .enumerate()
                .all(|(index, entry)| entry.id == index + 1)
        );
    }
}
