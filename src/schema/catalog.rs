//! Record categories and their field lists
//!
//! This module defines the static catalog of phenopacket record categories. Each
//! category declares an ordered field list; the order is the column order used for
//! display and export.

use std::fmt;
use std::str::FromStr;

use crate::error::EntryError;
use crate::schema::choices;
use crate::schema::field::{FieldKind, FieldSpec, INDIVIDUAL_ID};

const INDIVIDUAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(INDIVIDUAL_ID),
    FieldSpec::typed("AgeDays", FieldKind::DayCount),
    FieldSpec::choice("Sex", choices::SEX),
    FieldSpec::choice("KaryotypicSex", choices::KARYOTYPIC_SEX),
    FieldSpec::choice("VitalStatus", choices::VITAL_STATUS),
    FieldSpec::typed("LastEncounter", FieldKind::TimeOfDay),
];

const PHENOTYPIC_FEATURE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(INDIVIDUAL_ID),
    FieldSpec::text("PhenotypeID"),
    FieldSpec::text("Label"),
    FieldSpec::choice("Excluded", choices::TRUE_FALSE),
    FieldSpec::text("Onset"),
    FieldSpec::choice("Severity", choices::SEVERITY),
    FieldSpec::text("Evidence"),
    FieldSpec::text("Modifier"),
];

const DISEASE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(INDIVIDUAL_ID),
    FieldSpec::text("DiseaseID"),
    FieldSpec::text("Label"),
    FieldSpec::choice("ClinicalStatus", choices::CLINICAL_STATUS),
    FieldSpec::choice("Severity", choices::SEVERITY),
    FieldSpec::text("Onset"),
    FieldSpec::text("Stage"),
];

const MEASUREMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(INDIVIDUAL_ID),
    FieldSpec::text("Type"),
    FieldSpec::text("Value"),
    FieldSpec::text("Unit"),
    FieldSpec::text("ReferenceRange"),
    FieldSpec::text("TimeObserved"),
    FieldSpec::choice("Interpretation", choices::MEASUREMENT_INTERPRETATION),
];

const BIOSAMPLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("SampleID"),
    FieldSpec::text(INDIVIDUAL_ID),
    FieldSpec::text("Description"),
    FieldSpec::text("Tissue"),
    FieldSpec::text("CollectionTime"),
    FieldSpec::text("HistologicalDx"),
];

const GENOMIC_INTERPRETATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(INDIVIDUAL_ID),
    FieldSpec::text("VariantID"),
    FieldSpec::text("Gene"),
    FieldSpec::text("HGVS"),
    FieldSpec::choice("Zygosity", choices::ZYGOSITY),
    FieldSpec::choice("Pathogenicity", choices::PATHOGENICITY),
    FieldSpec::choice("InterpretStatus", choices::INTERPRETATION_STATUS),
    FieldSpec::choice("Actionability", choices::ACTIONABILITY),
];

const MEDICAL_ACTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(INDIVIDUAL_ID),
    FieldSpec::choice("Type", choices::MEDICAL_ACTION_TYPE),
    FieldSpec::text("Code"),
    FieldSpec::text("Description"),
    FieldSpec::text("Start"),
    FieldSpec::text("End"),
    FieldSpec::text("Agent"),
    FieldSpec::text("Dose"),
];

const PEDIGREE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("FamilyID"),
    FieldSpec::text(INDIVIDUAL_ID),
    FieldSpec::choice("Relation", choices::RELATION),
    FieldSpec::choice("Affected", choices::TRUE_FALSE),
    FieldSpec::choice("Sex", choices::SEX),
    FieldSpec::choice("Deceased", choices::TRUE_FALSE),
    FieldSpec::text("RelativeCondition"),
];

/// Phenopacket record categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Demographics of the individual being described
    Individual,
    /// Observed or excluded phenotypic feature
    PhenotypicFeature,
    /// Diagnosed disease
    Disease,
    /// Laboratory or clinical measurement
    Measurement,
    /// Collected biological sample
    Biosample,
    /// Variant interpretation
    GenomicInterpretation,
    /// Procedure, treatment or radiation
    MedicalAction,
    /// Family member relative to the proband
    Pedigree,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Self; 8] = [
        Self::Individual,
        Self::PhenotypicFeature,
        Self::Disease,
        Self::Measurement,
        Self::Biosample,
        Self::GenomicInterpretation,
        Self::MedicalAction,
        Self::Pedigree,
    ];

    /// Short key used to tag exported rows
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Individual => "Ind",
            Self::PhenotypicFeature => "PF",
            Self::Disease => "D",
            Self::Measurement => "M",
            Self::Biosample => "B",
            Self::GenomicInterpretation => "G",
            Self::MedicalAction => "Med",
            Self::Pedigree => "P",
        }
    }

    /// Get the display name for this category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::PhenotypicFeature => "Phenotypic Feature",
            Self::Disease => "Disease",
            Self::Measurement => "Measurement",
            Self::Biosample => "Biosample",
            Self::GenomicInterpretation => "Genomic Interpretation",
            Self::MedicalAction => "Medical Action",
            Self::Pedigree => "Pedigree",
        }
    }

    /// Ordered field list
    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Individual => INDIVIDUAL_FIELDS,
            Self::PhenotypicFeature => PHENOTYPIC_FEATURE_FIELDS,
            Self::Disease => DISEASE_FIELDS,
            Self::Measurement => MEASUREMENT_FIELDS,
            Self::Biosample => BIOSAMPLE_FIELDS,
            Self::GenomicInterpretation => GENOMIC_INTERPRETATION_FIELDS,
            Self::MedicalAction => MEDICAL_ACTION_FIELDS,
            Self::Pedigree => PEDIGREE_FIELDS,
        }
    }

    /// Ordered field names
    pub fn field_names(self) -> impl Iterator<Item = &'static str> {
        self.fields().iter().map(|field| field.name)
    }

    /// Look up a field by name
    #[must_use]
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// Position of a field in the ordered list
    #[must_use]
    pub fn field_index(self, name: &str) -> Option<usize> {
        self.fields().iter().position(|field| field.name == name)
    }

    /// Choice list of an enumerated field, `None` for free text or unknown fields
    #[must_use]
    pub fn choices(self, name: &str) -> Option<&'static [&'static str]> {
        self.field(name).and_then(|field| field.kind.choices())
    }

    /// Whether rows of this category are stamped with the current individual
    #[must_use]
    pub fn carries_individual_id(self) -> bool {
        self != Self::Individual
    }

    /// Sheet name in multi-sheet exports
    #[must_use]
    pub fn sheet_name(self) -> String {
        self.key().to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lowercase and drop separators so "phenotypic-feature" matches "Phenotypic Feature"
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Category {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|category| {
                normalize(category.key()) == wanted || normalize(category.label()) == wanted
            })
            .ok_or_else(|| EntryError::UnknownCategory(s.trim().to_string()))
    }
}
