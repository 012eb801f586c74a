//! Language codes accepted by Amazon Translate and Comprehend.
//!
//! See https://docs.aws.amazon.com/translate/latest/dg/what-is-languages.html

pub const ENGLISH: &str = "en";
pub const JAPANESE: &str = "ja";
pub const FRENCH: &str = "fr";
pub const CHINESE: &str = "zh";
pub const GERMAN: &str = "de";
pub const SPANISH: &str = "es";

/// Lowercase English name of a language code, used in output file names.
pub fn language_name(code: &str) -> Option<&'static str> {
    let primary = code.split('-').next().unwrap_or(code).to_lowercase();
    match primary.as_str() {
        ENGLISH => Some("english"),
        JAPANESE => Some("japanese"),
        FRENCH => Some("french"),
        CHINESE => Some("chinese"),
        GERMAN => Some("german"),
        SPANISH => Some("spanish"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("zh"), Some("chinese"));
        assert_eq!(language_name("zh-TW"), Some("chinese"));
        assert_eq!(language_name("FR"), Some("french"));
        assert_eq!(language_name("tl"), None);
    }
}
