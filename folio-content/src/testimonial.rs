//! Customer testimonials for the rotating quote section.

/// A customer quote shown in the testimonial rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    /// Stable identifier.
    pub id: u32,
    /// Customer name.
    pub name: String,
    /// Star rating, within `0..=5`.
    pub rating: u8,
    /// The quote itself.
    pub quote: String,
    /// Optional portrait URL.
    pub image: Option<String>,
}

impl Testimonial {
    /// Creates a testimonial, clamping the rating into `0..=5`.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        rating: u8,
        quote: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            rating: rating.min(5),
            quote: quote.into(),
            image,
        }
    }
}

/// The built-in customer testimonials.
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            1,
            "רחל לוי",
            5,
            "חנות הספרים הזו היא אוצר אמיתי! מצאתי כאן ספרים נדירים שחיפשתי במשך שנים. השירות מעולה והצוות תמיד מוכן לעזור.",
            Some("https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=150&q=80".into()),
        ),
        Testimonial::new(
            2,
            "דוד כהן",
            4,
            "אני קונה ספרים כאן באופן קבוע. המבחר עצום והמחירים הוגנים. תמיד נעים לבקר בחנות הזו.",
            Some("https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=crop&w=150&q=80".into()),
        ),
        Testimonial::new(
            3,
            "מיכל גולן",
            5,
            "הזמנתי ספרים דרך האתר וקיבלתי אותם תוך יומיים. האריזה הייתה מושלמת והספרים הגיעו במצב חדש לגמרי. ממליצה בחום!",
            Some("https://images.unsplash.com/photo-1580489944761-15a19d654956?ixlib=rb-1.2.1&auto=format&fit=crop&w=150&q=80".into()),
        ),
        Testimonial::new(
            4,
            "יוסי אברהם",
            5,
            "אני מעריך מאוד את הידע המקצועי של הצוות. תמיד יודעים להמליץ על ספרים מעניינים בדיוק לפי הטעם שלי.",
            Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=crop&w=150&q=80".into()),
        ),
        Testimonial::new(
            5,
            "שרה ברקוביץ",
            4,
            "חנות הספרים הטובה ביותר בעיר! אווירה נעימה, מבחר עשיר וצוות אדיב. מקום מושלם לכל חובבי הספרות.",
            Some("https://images.unsplash.com/photo-1607746882042-944635dfe10e?ixlib=rb-1.2.1&auto=format&fit=crop&w=150&q=80".into()),
        ),
    ]
}
