use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Output language. Anything that is not recognisably Portuguese renders in English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

impl Language {
    /// Lenient parse: `Portuguese`, `português`, `pt`, `pt-PT`, `pt_BR` map to
    /// Portuguese, everything else to English.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        let lower = s.trim().to_lowercase();
        let primary = lower.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "portuguese" | "português" | "portugues" | "pt" => Self::Portuguese,
            _ => Self::English,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Portuguese => "Portuguese",
        }
    }

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::English => "📋 **Fact-Check Based on Scientific Knowledge**\n\n",
            Self::Portuguese => "📋 **Verificação de Factos Baseada em Conhecimento Científico**\n\n",
        }
    }

    #[must_use]
    pub fn sources_label(self) -> &'static str {
        match self {
            Self::English => "📚 **Sources:**",
            Self::Portuguese => "📚 **Fontes:**",
        }
    }

    #[must_use]
    pub fn source_label(self) -> &'static str {
        match self {
            Self::English => "📚 Source:",
            Self::Portuguese => "📚 Fonte:",
        }
    }

    #[must_use]
    pub fn fallback_intro(self) -> &'static str {
        match self {
            Self::English => "📄 Information from documents:",
            Self::Portuguese => "📄 Informação extraída dos documentos:",
        }
    }

    #[must_use]
    pub fn web_header(self) -> &'static str {
        match self {
            Self::English => "🌐 **Internet Information:**",
            Self::Portuguese => "🌐 **Informação da Internet:**",
        }
    }

    #[must_use]
    pub fn no_information(self) -> &'static str {
        match self {
            Self::English => "📄 No information available in the reference documents.",
            Self::Portuguese => "📄 Nenhuma informação disponível nos documentos de referência.",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_portuguese_variants() {
        for s in ["Portuguese", "portuguese", "Português", "pt", "pt-PT", "PT_br"] {
            assert_eq!(Language::parse_lenient(s), Language::Portuguese, "{s}");
        }
    }

    #[test]
    fn unknown_falls_back_to_english() {
        for s in ["English", "", "French", "es", "Portugal"] {
            assert_eq!(Language::parse_lenient(s), Language::English, "{s}");
        }
    }

    #[test]
    fn serde_uses_display_name() {
        let json = serde_json::to_string(&Language::Portuguese).unwrap();
        assert_eq!(json, r#""Portuguese""#);
        let lang: Language = serde_json::from_str(r#""klingon""#).unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn labels_differ_per_language() {
        assert_ne!(Language::English.header(), Language::Portuguese.header());
        assert!(Language::Portuguese.sources_label().contains("Fontes"));
        assert!(Language::English.web_header().contains("Internet Information"));
    }
}
