//! In-store events shown in the events section.

/// An upcoming in-store event open for registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Stable identifier.
    pub id: String,
    /// Event title.
    pub title: String,
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
    /// Start time in `HH:MM` form.
    pub time: String,
    /// Venue description.
    pub location: String,
    /// Longer description shown in the details modal.
    pub description: String,
    /// Name of the presenting author or host.
    pub presenter: String,
    /// Promotional image URL.
    pub image_url: String,
}

/// The built-in upcoming events.
pub fn upcoming_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "מפגש עם הסופרת רותי שרף".into(),
            date: "2023-12-15".into(),
            time: "19:00".into(),
            location: "חנות ספרים ביתא, תל אביב".into(),
            description: "מפגש אינטימי עם הסופרת רותי שרף לרגל צאת ספרה החדש \"בין השורות\". המפגש יכלול קריאה מהספר, שיחה על תהליך הכתיבה וחתימה על עותקים.".into(),
            presenter: "רותי שרף".into(),
            image_url: "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70".into(),
        },
        Event {
            id: "2".into(),
            title: "מועדון קריאה: \"הדרך לעצמאות\"".into(),
            date: "2023-12-20".into(),
            time: "18:30".into(),
            location: "חנות ספרים ביתא, תל אביב".into(),
            description: "מפגש חודשי של מועדון הקריאה שלנו. הפעם נדון בספר \"הדרך לעצמאות\" מאת יובל נח הררי. המפגש פתוח לכל החברים במועדון.".into(),
            presenter: "ד\"ר מיכל כהן".into(),
            image_url: "https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8".into(),
        },
        Event {
            id: "3".into(),
            title: "סדנת כתיבה יוצרת לילדים".into(),
            date: "2023-12-25".into(),
            time: "16:00".into(),
            location: "חנות ספרים ביתא, תל אביב".into(),
            description: "סדנה מיוחדת לילדים בגילאי 8-12 שאוהבים לכתוב ולספר סיפורים. בהנחיית הסופר אלון גור, מחבר סדרת ספרי הילדים \"הרפתקאות בממלכת הדמיון\".".into(),
            presenter: "אלון גור".into(),
            image_url: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_upcoming_events_in_date_order() {
        let events = upcoming_events();
        assert_eq!(events.len(), 3);
        assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }
}
