//! Book records for the recommendation shelf.

/// A recommended book shown in the shelf carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    /// Stable identifier.
    pub id: String,
    /// Title as printed on the cover.
    pub title: String,
    /// Author credit.
    pub author: String,
    /// Short blurb shown on the card.
    pub description: String,
    /// Path of the cover image asset.
    pub cover_image: String,
    /// Average customer rating, within `0.0..=5.0`.
    pub rating: f32,
    /// Price in the store currency.
    pub price: f32,
}

impl Book {
    /// Creates a book record, clamping the rating into `0.0..=5.0`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        cover_image: impl Into<String>,
        rating: f32,
        price: f32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            description: description.into(),
            cover_image: cover_image.into(),
            rating: rating.clamp(0.0, 5.0),
            price,
        }
    }
}

/// The built-in monthly recommendation shelf.
pub fn recommended_books() -> Vec<Book> {
    vec![
        Book::new(
            "1",
            "אומנות המלחמה",
            "סון טסו",
            "ספר קלאסי על אסטרטגיה צבאית ותבונה טקטית שנכתב לפני מאות שנים",
            "/images/book1.jpg",
            4.8,
            89.90,
        ),
        Book::new(
            "2",
            "שר הטבעות",
            "ג׳.ר.ר. טולקין",
            "אפוס פנטזיה מופתי המתאר את מסעו של פרודו לאבד את טבעת הכוח",
            "/images/book2.jpg",
            4.9,
            129.90,
        ),
        Book::new(
            "3",
            "להיות אדם",
            "יובל נוח הררי",
            "מבט מעמיק על ההיסטוריה האנושית והכיוון אליו מתפתחת האנושות",
            "/images/book3.jpg",
            4.7,
            98.00,
        ),
        Book::new(
            "4",
            "אלף לילה ולילה",
            "עממי",
            "אוסף סיפורים קלאסיים מהמזרח התיכון שהשפיעו על תרבויות רבות",
            "/images/book4.jpg",
            4.6,
            75.50,
        ),
        Book::new(
            "5",
            "מאה שנים של בדידות",
            "גבריאל גרסיה מארקס",
            "יצירת מופת של ריאליזם קסום המתארת שבעה דורות של משפחה קולומביאנית",
            "/images/book5.jpg",
            4.8,
            88.00,
        ),
        Book::new(
            "6",
            "קיצור תולדות האנושות",
            "יובל נוח הררי",
            "סקירה מרתקת של התפתחות המין האנושי מראשיתו ועד ימינו",
            "/images/book6.jpg",
            4.9,
            94.90,
        ),
    ]
}
