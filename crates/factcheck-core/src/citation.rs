//! Maps raw source filenames to human-readable citation labels.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

const UNKNOWN_KEY: &str = "unknown";

// Later entries win on duplicate keys.
const KNOWN_SOURCES: &[(&str, &str)] = &[
    (
        "37_3_Adamantopoulou.pdf",
        "Adamantopoulou et al 2011 - Movements of Mediterranean Monk Seals Monachus monachus in the Eastern Mediterranean Sea",
    ),
    (
        "f0da61e8b1bd28b4546f409830e6ddd18257.pdf",
        "Simopoulos et al 2013 - Social values of biodiversity conservation for Mediterranean monk seal Monachus monachus",
    ),
    (
        "E-AC33-45-04.pdf",
        "CITES Animals Committee 2024 - Periodic Review of Monachus tropicalis",
    ),
    (
        "278-282-Vol19No2Erdem.pdf",
        "Danyer et al 2013 - Preliminary report of a stranding case of Mediterranean Monk Seal Monachus monachus on Antalya coast Turkey",
    ),
    (
        "Cave_habitats_used_by_Mediterranean_monk.pdf",
        "Bundone 2010 - Cave habitats used by Mediterranean monk seals Monachus monachus in Sardinia",
    ),
    (
        "the-mediterranean-monk-seal.pdf",
        "Van Wijngaarden 1962 - The Mediterranean Monk Seal",
    ),
    (
        "a-brief-note-on-mediterranean-monk-seal.pdf",
        "Zareei 2021 - A Brief Note on Mediterranean Monk Seal",
    ),
    (
        "s41598-020-79712-1.pdf",
        "Karamanlidis et al 2021 - Genetic and demographic history define a conservation strategy for earths most endangered pinniped the Mediterranean monk seal Monachus monachus",
    ),
    (
        "2020 A Mediterranean Monk Seal Pup on the Apulian Coast (Southern Italy) Sign of an Ongoing Recolonisation.pdf",
        "Fioravanti et al 2020 - A Mediterranean Monk Seal Pup on the Apulian Coast Southern Italy Sign of an Ongoing Recolonisation",
    ),
    (
        "reestablishment_of_the_mediterranean_monk_seal_monachus_monachus_in_cyprus_priorities_for_conservation.pdf",
        "Nicolaou et al 2021 - Re-establishment of the Mediterranean monk seal Monachus monachus in Cyprus priorities for conservation",
    ),
    (
        "MA2379_lit180815.pdf",
        "Mo et al 2004 - Habitat suitability and sightings of the Mediterranean monk seal in the National Park of Al Hoceima Morocco",
    ),
    (
        "a4-flyer_270x194_marine-lifemonk-seal_eng_final.pdf",
        "PPNEA undated - Mediterranean Monk Seal conservation flyer",
    ),
    (
        "2013_Karamanlidisetal..pdf",
        "Karamanlidis et al 2013 - Demographic Structure and Social Behavior of the Unique Mediterranean monk seal Monachus monachus colony of the Island of Gyaros",
    ),
    (
        "Ilaria_Gradella.pdf",
        "Gradella 2024 - The Mediterranean Monk Seal Monachus monachus Distribution Stranding and Major Threats",
    ),
    (
        "mededelingen39_2008b.pdf",
        "Johnson 2004 - Monk Seals in Post-Classical History Biography of the Mediterranean Monk Seal",
    ),
    (
        "37_3_Adamantopoulou.pdf",
        "Adamantopoulou et al 2010 - Movements of Mediterranean Monk Seals Monachus monachus in the Eastern Mediterranean Sea",
    ),
    (
        "n045p315.pdf",
        "Fernandez de Larrinoa et al 2021 - Age specific survival and reproductive rates of Mediterranean monk seals at the Cabo Blanco Peninsula West Africa",
    ),
    (
        "AM-39.1-Alfaghi.pdf",
        "Alfaghi et al 2013 - First Confirmed Sighting of the Mediterranean Monk Seal Monachus monachus in Libya Since 1972",
    ),
    (
        "n053p341.pdf",
        "Karamanlidis et al 2024 - Current status biology threats and conservation priorities of the Vulnerable Mediterranean monk seal",
    ),
    (
        "44219.pdf",
        "Bundone et al 2024 - Monitoring the Mediterranean monk seal in the central Mediterranean Sea",
    ),
    (
        "guide.pdf",
        "Johnson et al 1998 - The Mediterranean Monk Seal Conservation Guidelines",
    ),
    (
        "the-mediterranean-monk-seal-karamanlidis-et-al-2015.pdf",
        "Karamanlidis et al 2015 - The Mediterranean monk seal Monachus monachus status biology threats and conservation priorities",
    ),
    (
        "strategie_phoque_en.pdf",
        "UNEP-MAP SPA-RAC 2019 - Regional Strategy for the Conservation of Monk Seal in the Mediterranean",
    ),
    (
        "2025-006-En.pdf",
        "Quintana Martin-Montalvo et al 2025 - Mediterranean monk seal Monachus monachus A comprehensive set of monitoring and research techniques",
    ),
    (
        "BDJ_article_120201.pdf",
        "Valsecchi et al 2024 - An Observatory to monitor range extension of the Mediterranean monk seal based on its eDNA traces",
    ),
    (
        "noaa_66431_DS1.pdf",
        "Parsons 2024 - Mediterranean monk seal Monachus monachus 5 Year Review Summary and Evaluation",
    ),
    (UNKNOWN_KEY, "Unknown Document"),
];

static BUILTIN: LazyLock<Arc<CitationTable>> =
    LazyLock::new(|| Arc::new(CitationTable::from_entries(KNOWN_SOURCES.iter().copied())));

/// Immutable filename-to-label lookup.
#[derive(Debug, Clone, Default)]
pub struct CitationTable {
    entries: HashMap<String, String>,
}

impl CitationTable {
    /// The table of known monk seal literature.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Shared handle to the built-in table.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a source path to its citation label. Never fails.
    ///
    /// Only the final path segment is looked up. Unmapped names are prettified:
    /// underscores and hyphens become spaces, then each word is title-cased.
    #[must_use]
    pub fn resolve(&self, source: Option<&str>) -> String {
        let key = match source {
            Some(s) if !s.is_empty() => basename(s),
            _ => UNKNOWN_KEY,
        };

        if let Some(label) = self.entries.get(key) {
            return label.clone();
        }
        title_case(&key.replace(['_', '-'], " "))
    }
}

/// Resolve against the built-in table.
#[must_use]
pub fn resolve_citation(source: Option<&str>) -> String {
    CitationTable::builtin().resolve(source)
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Upper-case a cased character that follows an uncased one, lower-case the rest.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}
