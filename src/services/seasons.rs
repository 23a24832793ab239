use std::collections::HashMap;

/// Month-to-season keyword tables used for best-season matching.
///
/// Each month maps to the season words and month abbreviations that count as
/// covering it, plus the keywords that mark a clearly wrong season. Keywords
/// are compared as lowercase substrings of the place's best-season text.
#[derive(Debug, Clone)]
pub struct SeasonCalendar {
    month_keywords: HashMap<&'static str, Vec<&'static str>>,
    opposite_keywords: HashMap<&'static str, Vec<&'static str>>,
}

impl Default for SeasonCalendar {
    fn default() -> Self {
        Self::standard()
    }
}

impl SeasonCalendar {
    pub fn standard() -> Self {
        let mut month_keywords: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        month_keywords.insert(
            "January",
            vec!["winter", "jan", "january", "dec-feb", "oct-mar", "nov-mar"],
        );
        month_keywords.insert(
            "February",
            vec![
                "winter", "feb", "february", "dec-feb", "jan-mar", "oct-mar", "nov-mar",
            ],
        );
        month_keywords.insert(
            "March",
            vec![
                "spring", "mar", "march", "mar-may", "feb-apr", "oct-mar", "nov-mar",
            ],
        );
        month_keywords.insert(
            "April",
            vec!["spring", "apr", "april", "mar-may", "mar-jun", "feb-apr"],
        );
        month_keywords.insert(
            "May",
            vec!["spring", "may", "mar-may", "apr-jun", "mar-jun"],
        );
        month_keywords.insert(
            "June",
            vec![
                "summer", "monsoon", "jun", "june", "apr-jun", "may-jul", "mar-jun",
            ],
        );
        month_keywords.insert(
            "July",
            vec!["summer", "monsoon", "jul", "july", "may-jul", "jun-aug"],
        );
        month_keywords.insert(
            "August",
            vec!["summer", "monsoon", "aug", "august", "jun-aug", "jul-sep"],
        );
        month_keywords.insert(
            "September",
            vec![
                "autumn", "fall", "sep", "september", "sep-nov", "jul-sep", "aug-oct",
            ],
        );
        month_keywords.insert(
            "October",
            vec![
                "autumn", "fall", "oct", "october", "sep-nov", "oct-dec", "aug-oct", "oct-mar",
            ],
        );
        month_keywords.insert(
            "November",
            vec![
                "autumn", "fall", "nov", "november", "sep-nov", "oct-dec", "nov-jan", "oct-mar",
                "nov-mar",
            ],
        );
        month_keywords.insert(
            "December",
            vec!["winter", "dec", "december", "oct-dec", "nov-jan", "dec-feb"],
        );

        let mut opposite_keywords: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        opposite_keywords.insert("January", vec!["summer", "monsoon", "jun", "jul", "aug"]);
        opposite_keywords.insert("February", vec!["summer", "monsoon", "jun", "jul", "aug"]);
        opposite_keywords.insert("March", vec!["monsoon", "jul", "aug"]);
        opposite_keywords.insert(
            "April",
            vec!["winter", "monsoon", "jul", "aug", "dec", "jan"],
        );
        opposite_keywords.insert("May", vec!["winter", "monsoon", "dec", "jan", "feb"]);
        opposite_keywords.insert("June", vec!["winter", "dec", "jan", "feb"]);
        opposite_keywords.insert("July", vec!["winter", "dec", "jan", "feb"]);
        opposite_keywords.insert("August", vec!["winter", "dec", "jan", "feb"]);
        opposite_keywords.insert("September", vec!["winter", "dec", "jan", "feb"]);
        opposite_keywords.insert("October", vec!["summer", "monsoon", "jun", "jul", "aug"]);
        opposite_keywords.insert("November", vec!["summer", "monsoon", "jun", "jul", "aug"]);
        opposite_keywords.insert("December", vec!["summer", "monsoon", "jun", "jul", "aug"]);

        Self {
            month_keywords,
            opposite_keywords,
        }
    }

    /// Builds a calendar from caller-supplied tables, used by tests.
    pub fn from_tables(
        month_keywords: HashMap<&'static str, Vec<&'static str>>,
        opposite_keywords: HashMap<&'static str, Vec<&'static str>>,
    ) -> Self {
        Self {
            month_keywords,
            opposite_keywords,
        }
    }

    /// Keywords that count as covering the given month. Unknown months yield
    /// an empty slice.
    pub fn month_keywords(&self, month: &str) -> &[&'static str] {
        self.month_keywords
            .get(month)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keywords that mark a clearly wrong season for the given month.
    /// Unknown months yield an empty slice.
    pub fn opposite_keywords(&self, month: &str) -> &[&'static str] {
        self.opposite_keywords
            .get(month)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_twelve_months_are_mapped() {
        let calendar = SeasonCalendar::standard();
        for month in [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ] {
            assert!(!calendar.month_keywords(month).is_empty(), "{month}");
            assert!(!calendar.opposite_keywords(month).is_empty(), "{month}");
        }
    }

    #[test]
    fn october_covers_the_autumn_windows() {
        let calendar = SeasonCalendar::standard();
        let keywords = calendar.month_keywords("October");
        assert!(keywords.contains(&"sep-nov"));
        assert!(keywords.contains(&"oct-mar"));
        assert!(calendar.opposite_keywords("October").contains(&"jun"));
    }

    #[test]
    fn unknown_month_yields_empty_slices() {
        let calendar = SeasonCalendar::standard();
        assert!(calendar.month_keywords("Octember").is_empty());
        assert!(calendar.opposite_keywords("Octember").is_empty());
    }
}
