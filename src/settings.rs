use crate::models::Settings;
use crate::money::{Currency, FALLBACK_SYMBOL};
use crate::validate::{self, FieldErrors};

const CURRENCY_MAX_CHARS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SettingsField {
    SchoolName,
    SchoolContact,
    CurrencySymbol,
    SchoolAddress,
    FooterText,
    DefaultPdfFolder,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsPanel {
    pub draft: Settings,
    snapshot: Option<Settings>,
    pub errors: FieldErrors<SettingsField>,
    pub saved_notice: bool,
}

impl SettingsPanel {
    pub fn set_field(&mut self, field: SettingsField, value: String) {
        match field {
            SettingsField::SchoolName => {
                self.errors
                    .record(field, validate::required(&value, "School name"));
                self.draft.school_name = value;
            }
            SettingsField::SchoolContact => self.draft.school_contact = value,
            SettingsField::CurrencySymbol => {
                let clamped: String = value.chars().take(CURRENCY_MAX_CHARS).collect();
                self.errors
                    .record(field, validate::required(&clamped, "Currency symbol"));
                self.draft.currency_symbol = clamped;
            }
            SettingsField::SchoolAddress => self.draft.school_address = value,
            SettingsField::FooterText => self.draft.footer_text = value,
            SettingsField::DefaultPdfFolder => self.draft.default_pdf_folder = value,
        }
    }

    fn fill(&mut self, settings: &Settings) -> Currency {
        let mut draft = settings.clone();
        if draft.currency_symbol.trim().is_empty() {
            draft.currency_symbol = FALLBACK_SYMBOL.to_string();
        }
        let currency = Currency::new(&draft.currency_symbol);
        self.draft = draft;
        self.errors.clear();
        currency
    }

    pub fn loaded(&mut self, settings: Settings) -> Currency {
        let currency = self.fill(&settings);
        self.snapshot = Some(settings);
        self.saved_notice = false;
        currency
    }

    pub fn validate(&mut self) -> bool {
        let name_ok = self.errors.record(
            SettingsField::SchoolName,
            validate::required(&self.draft.school_name, "School name"),
        );
        let symbol = &self.draft.currency_symbol;
        let currency_outcome = validate::required(symbol, "Currency symbol")
            .or_else(|| validate::max_chars(symbol, "Currency symbol", CURRENCY_MAX_CHARS));
        let currency_ok = self
            .errors
            .record(SettingsField::CurrencySymbol, currency_outcome);
        name_ok && currency_ok
    }

    pub fn payload(&self) -> Settings {
        let d = &self.draft;
        Settings {
            school_name: d.school_name.trim().to_string(),
            school_contact: d.school_contact.trim().to_string(),
            currency_symbol: Currency::new(&d.currency_symbol).symbol().to_string(),
            school_address: d.school_address.trim().to_string(),
            footer_text: d.footer_text.trim().to_string(),
            default_pdf_folder: d.default_pdf_folder.trim().to_string(),
        }
    }

    pub fn saved(&mut self, payload: Settings) -> Currency {
        let currency = Currency::new(&payload.currency_symbol);
        self.snapshot = Some(payload);
        self.saved_notice = true;
        currency
    }

    /// Restores the last snapshot. `None` means there is nothing cached and
    /// the caller should reload from the server.
    pub fn revert(&mut self) -> Option<Currency> {
        let snapshot = self.snapshot.clone()?;
        Some(self.fill(&snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_settings() -> Settings {
        Settings {
            school_name: "Hillside Academy".into(),
            school_contact: "0800".into(),
            currency_symbol: "$".into(),
            school_address: "1 Hill Rd".into(),
            footer_text: "Thanks".into(),
            default_pdf_folder: "/tmp/pdfs".into(),
        }
    }

    #[test]
    fn load_applies_currency_and_fallback() {
        let mut panel = SettingsPanel::default();
        assert_eq!(panel.loaded(server_settings()).symbol(), "$");
        assert!(panel.snapshot.is_some());

        let blank = Settings {
            currency_symbol: "".into(),
            ..server_settings()
        };
        assert_eq!(panel.loaded(blank).symbol(), "₦");
        assert_eq!(panel.draft.currency_symbol, "₦");
    }

    #[test]
    fn currency_input_is_clamped() {
        let mut panel = SettingsPanel::default();
        panel.set_field(SettingsField::CurrencySymbol, "GHS1".into());
        assert_eq!(panel.draft.currency_symbol, "GHS");
    }

    #[test]
    fn validation_requires_name_and_symbol() {
        let mut panel = SettingsPanel::default();
        panel.set_field(SettingsField::CurrencySymbol, "  ".into());
        assert!(!panel.validate());
        assert_eq!(panel.errors.get(SettingsField::SchoolName), Some("School name is required"));
        assert_eq!(
            panel.errors.get(SettingsField::CurrencySymbol),
            Some("Currency symbol is required")
        );
    }

    #[test]
    fn overlong_symbol_is_rejected() {
        let mut panel = SettingsPanel::default();
        panel.loaded(server_settings());
        panel.draft.currency_symbol = "ABCD".into();
        assert!(!panel.validate());
        assert_eq!(
            panel.errors.get(SettingsField::CurrencySymbol),
            Some("Currency symbol must be at most 3 characters")
        );
    }

    #[test]
    fn payload_is_trimmed() {
        let mut panel = SettingsPanel::default();
        panel.loaded(server_settings());
        panel.set_field(SettingsField::SchoolName, "  Hillside  ".into());
        panel.set_field(SettingsField::FooterText, " bye ".into());
        let payload = panel.payload();
        assert_eq!(payload.school_name, "Hillside");
        assert_eq!(payload.footer_text, "bye");
        assert_eq!(payload.currency_symbol, "$");
    }

    #[test]
    fn revert_restores_snapshot_without_server() {
        let mut panel = SettingsPanel::default();
        assert_eq!(panel.revert(), None);

        panel.loaded(server_settings());
        panel.set_field(SettingsField::SchoolName, "Changed".into());
        panel.set_field(SettingsField::CurrencySymbol, "€".into());
        let currency = panel.revert().unwrap();
        assert_eq!(currency.symbol(), "$");
        assert_eq!(panel.draft.school_name, "Hillside Academy");
    }

    #[test]
    fn save_replaces_snapshot_and_shows_notice() {
        let mut panel = SettingsPanel::default();
        panel.loaded(server_settings());
        panel.set_field(SettingsField::CurrencySymbol, "€".into());
        let payload = panel.payload();
        assert_eq!(panel.saved(payload).symbol(), "€");
        assert!(panel.saved_notice);

        panel.set_field(SettingsField::CurrencySymbol, "£".into());
        assert_eq!(panel.revert().unwrap().symbol(), "€");
    }
}
