use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm {
    Nfc,
    Nfkc,
}

/// A char filter that applies a composing Unicode normalization form.
///
/// The normalizer runs it first with [`NormalizationForm::Nfkc`], so that
/// full-width letters, ligatures and letterlike symbols reach the later
/// filters as plain Latin while precomposed letters such as `й` stay intact
/// for the transliteration table.
#[derive(Clone, Debug)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            return input.to_string();
        }
        match self.form {
            NormalizationForm::Nfc => input.nfc().collect(),
            NormalizationForm::Nfkc => input.nfkc().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}
