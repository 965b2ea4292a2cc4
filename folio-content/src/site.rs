//! Static page-shell data: metadata, navigation, contact details and the
//! service cards.

/// Reading direction of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

/// A header or footer navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible label.
    pub label: String,
    /// Link target.
    pub href: String,
}

impl NavLink {
    /// Creates a navigation link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Contact details shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    /// Store phone number.
    pub phone: String,
    /// Store email address.
    pub email: String,
    /// Street address.
    pub address: String,
}

/// A service card from the services section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Service {
    /// Card title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Bullet points listed on the card.
    pub benefits: Vec<String>,
}

impl Service {
    fn new(title: &str, description: &str, benefits: [&str; 3]) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            benefits: benefits.into_iter().map(String::from).collect(),
        }
    }
}

/// Static shell data of the landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    /// Store name.
    pub title: String,
    /// Hero headline.
    pub headline: String,
    /// Hero tagline.
    pub tagline: String,
    /// Page description used in metadata.
    pub description: String,
    /// BCP-47 style locale tag.
    pub locale: String,
    /// Reading direction.
    pub direction: TextDirection,
    /// Header navigation links.
    pub nav: Vec<NavLink>,
    /// Footer contact details.
    pub contact: ContactInfo,
}

/// The bookstore's page shell.
pub fn bookstore_site() -> SiteMeta {
    SiteMeta {
        title: "חנות ספרים ביתא".into(),
        headline: "חנות ספרים מוביל בישראל".into(),
        tagline: "חווית לקוח מושלמת בכל ביקור".into(),
        description:
            "חנות ספרים ביתא - המקום הטוב ביותר לקנות ספרים חדשים, ספרי עיון, ספרות ילדים ונוער"
                .into(),
        locale: "he_IL".into(),
        direction: TextDirection::Rtl,
        nav: vec![
            NavLink::new("דף הבית", "/"),
            NavLink::new("ספרים", "/books"),
            NavLink::new("קטגוריות", "/categories"),
            NavLink::new("מבצעים", "/sales"),
            NavLink::new("אודות", "/about"),
            NavLink::new("צור קשר", "/contact"),
        ],
        contact: ContactInfo {
            phone: "03-1234567".into(),
            email: "info@hebrewbooks.co.il".into(),
            address: "רחוב הספרים 42, תל אביב".into(),
        },
    }
}

/// The service cards of the services section.
pub fn services() -> Vec<Service> {
    vec![
        Service::new(
            "הוצאה לאור",
            "שירותי הוצאה לאור מקצועיים לסופרים מתחילים ומנוסים כאחד.",
            [
                "ליווי אישי לאורך כל התהליך",
                "עיצוב כריכה מקצועי",
                "עריכה לשונית ברמה גבוהה",
            ],
        ),
        Service::new(
            "עריכה ספרותית",
            "שירותי עריכה מקצועיים להפיכת הטקסט שלך ליצירה ספרותית מלוטשת.",
            [
                "עריכה תוכנית ומבנית",
                "עריכה לשונית וסגנונית",
                "משוב מפורט והכוונה",
            ],
        ),
        Service::new(
            "אירועי השקה",
            "ארגון אירועי השקת ספרים מרשימים שיציגו את הספר שלך בצורה הטובה ביותר.",
            [
                "תכנון והפקת האירוע",
                "יחסי ציבור וקידום",
                "תיעוד מקצועי של האירוע",
            ],
        ),
        Service::new(
            "הפצה ושיווק",
            "שירותי הפצה ושיווק לספרים בחנויות פיזיות ובפלטפורמות דיגיטליות.",
            [
                "הפצה ארצית בחנויות ספרים",
                "שיווק דיגיטלי ממוקד",
                "ניהול מכירות באמזון ובפלטפורמות נוספות",
            ],
        ),
        Service::new(
            "סדנאות כתיבה",
            "סדנאות כתיבה יצירתית בהנחיית סופרים ועורכים מנוסים.",
            [
                "קבוצות קטנות ויחס אישי",
                "טכניקות כתיבה מתקדמות",
                "משוב מקצועי על יצירותיך",
            ],
        ),
        Service::new(
            "ייעוץ ספרותי",
            "ייעוץ אישי לסופרים בכל שלבי היצירה והפרסום.",
            [
                "פגישות ייעוץ אישיות",
                "בניית תוכנית עבודה",
                "הכוונה מקצועית לפרסום",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_is_hebrew_and_rtl() {
        let site = bookstore_site();
        assert_eq!(site.locale, "he_IL");
        assert_eq!(site.direction, TextDirection::Rtl);
        assert_eq!(site.nav.len(), 6);
    }

    #[test]
    fn every_service_lists_three_benefits() {
        assert!(
            services()
                .iter()
                .all(|service| service.benefits.len() == 3)
        );
    }
}
