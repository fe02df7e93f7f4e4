//! Report label table.
//!
//! One fixed set of strings per export language. The table is built once on
//! first use and never changes afterwards; lookups for unknown languages fall
//! back to English.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Languages a report can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportLang {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
}

impl ExportLang {
    /// All supported languages.
    pub const ALL: [ExportLang; 3] = [ExportLang::En, ExportLang::Es, ExportLang::Fr];

    /// Resolve a language code case-insensitively; anything unknown is English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => ExportLang::Es,
            "fr" => ExportLang::Fr,
            _ => ExportLang::En,
        }
    }

    /// Two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            ExportLang::En => "en",
            ExportLang::Es => "es",
            ExportLang::Fr => "fr",
        }
    }
}

/// Strings printed on the report pages, one field per label key.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub report_title: &'static str,
    pub legal_name: &'static str,
    pub business_name: &'static str,
    pub tax_id: &'static str,
    pub reporting_period: &'static str,
    pub business_activity_code: &'static str,
    pub currency: &'static str,
    pub total_income: &'static str,
    pub total_expenses: &'static str,
    pub net_profit: &'static str,
    pub estimated_tax: &'static str,
    pub estimated_tax_disclaimer: &'static str,
    pub category_breakdown_title: &'static str,
    pub transaction_log_title: &'static str,
    pub receipts_index_title: &'static str,
    pub mileage_summary_title: &'static str,
    pub mileage_note_csv: &'static str,
}

const EN: Labels = Labels {
    report_title: "Business export summary",
    legal_name: "Legal business name",
    business_name: "Operating name (DBA)",
    tax_id: "Tax ID",
    reporting_period: "Reporting period",
    business_activity_code: "Business activity code",
    currency: "Currency",
    total_income: "Total income",
    total_expenses: "Total expenses",
    net_profit: "Net profit",
    estimated_tax: "Estimated tax (25%)",
    estimated_tax_disclaimer: "Estimate only — not tax advice.",
    category_breakdown_title: "Category breakdown",
    transaction_log_title: "Transaction ledger",
    receipts_index_title: "Receipts index",
    mileage_summary_title: "Mileage summary",
    mileage_note_csv: "Full detailed mileage log available in CSV export.",
};

const ES: Labels = Labels {
    report_title: "Informe de exportación",
    legal_name: "Nombre legal de la empresa",
    business_name: "Nombre comercial (DBA)",
    tax_id: "Identificación fiscal",
    reporting_period: "Periodo reportado",
    business_activity_code: "Código de actividad",
    currency: "Moneda",
    total_income: "Ingresos totales",
    total_expenses: "Gastos totales",
    net_profit: "Utilidad neta",
    estimated_tax: "Impuesto estimado (25%)",
    estimated_tax_disclaimer: "Solo estimado — no constituye consejo fiscal.",
    category_breakdown_title: "Desglose por categoría",
    transaction_log_title: "Registro de transacciones",
    receipts_index_title: "Índice de recibos",
    mileage_summary_title: "Resumen de kilometraje",
    mileage_note_csv: "El registro completo de kilometraje está disponible en el CSV.",
};

const FR: Labels = Labels {
    report_title: "Rapport d’exportation",
    legal_name: "Raison sociale",
    business_name: "Nom commercial (DBA)",
    tax_id: "ID fiscal",
    reporting_period: "Période couverte",
    business_activity_code: "Code d’activité",
    currency: "Devise",
    total_income: "Revenus totaux",
    total_expenses: "Dépenses totales",
    net_profit: "Bénéfice net",
    estimated_tax: "Impôt estimé (25 %)",
    estimated_tax_disclaimer: "Estimation uniquement — pas un conseil fiscal.",
    category_breakdown_title: "Répartition par catégorie",
    transaction_log_title: "Journal des transactions",
    receipts_index_title: "Index des reçus",
    mileage_summary_title: "Résumé du kilométrage",
    mileage_note_csv: "Le journal complet du kilométrage est disponible dans l’export CSV.",
};

lazy_static! {
    static ref LABEL_TABLE: HashMap<&'static str, Labels> = {
        let mut table = HashMap::new();
        table.insert("en", EN);
        table.insert("es", ES);
        table.insert("fr", FR);
        table
    };
}

/// Labels for `lang`.
pub fn labels(lang: ExportLang) -> &'static Labels {
    labels_for_code(lang.code())
}

/// Labels for a raw language code, English when the code is unknown or empty.
pub fn labels_for_code(code: &str) -> &'static Labels {
    LABEL_TABLE
        .get(code)
        .or_else(|| LABEL_TABLE.get("en"))
        .unwrap_or(&EN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages() {
        assert_eq!(labels(ExportLang::En).report_title, "Business export summary");
        assert_eq!(labels(ExportLang::Es).net_profit, "Utilidad neta");
        assert_eq!(labels(ExportLang::Fr).tax_id, "ID fiscal");
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(labels_for_code("de"), labels(ExportLang::En));
        assert_eq!(labels_for_code(""), labels(ExportLang::En));
    }

    #[test]
    fn test_from_code_clamps() {
        assert_eq!(ExportLang::from_code("FR"), ExportLang::Fr);
        assert_eq!(ExportLang::from_code(" es "), ExportLang::Es);
        assert_eq!(ExportLang::from_code("pt"), ExportLang::En);
        assert_eq!(ExportLang::from_code(""), ExportLang::En);
    }

    #[test]
    fn test_lookup_returns_same_instance() {
        assert!(std::ptr::eq(labels(ExportLang::Fr), labels_for_code("fr")));
    }

    #[test]
    fn test_every_language_fills_every_label() {
        for lang in ExportLang::ALL {
            let l = labels(lang);
            for value in [
                l.report_title,
                l.legal_name,
                l.business_name,
                l.tax_id,
                l.reporting_period,
                l.business_activity_code,
                l.currency,
                l.total_income,
                l.total_expenses,
                l.net_profit,
                l.estimated_tax,
                l.estimated_tax_disclaimer,
                l.category_breakdown_title,
                l.transaction_log_title,
                l.receipts_index_title,
                l.mileage_summary_title,
                l.mileage_note_csv,
            ] {
                assert!(!value.is_empty(), "{:?}", lang);
            }
        }
    }
}
