//! Fixed choice lists for enumerated fields
//!
//! The unselected placeholder is not part of these lists; it is always accepted.

/// Sex of an individual or relative
pub const SEX: &[&str] = &["Male", "Female", "Unknown sex"];

/// Karyotypic sex
pub const KARYOTYPIC_SEX: &[&str] = &["XX", "XY", "XXY", "Other karyotype"];

/// Vital status of an individual
pub const VITAL_STATUS: &[&str] = &["Alive", "Deceased"];

/// Boolean flags entered as text
pub const TRUE_FALSE: &[&str] = &["True", "False"];

/// Severity of a phenotypic feature or disease
pub const SEVERITY: &[&str] = &["Mild", "Moderate", "Severe"];

/// Clinical status of a disease
pub const CLINICAL_STATUS: &[&str] = &["Ongoing", "Resolved"];

/// Interpretation of a measurement against its reference range
pub const MEASUREMENT_INTERPRETATION: &[&str] = &["High", "Low", "Normal"];

/// Variant zygosity
pub const ZYGOSITY: &[&str] = &["Heterozygous", "Homozygous"];

/// ACMG-style pathogenicity class
pub const PATHOGENICITY: &[&str] = &["Benign", "Pathogenic", "Vus"];

/// Interpretation status of a genomic finding
pub const INTERPRETATION_STATUS: &[&str] = &["Causative", "Candidate"];

/// Therapeutic actionability of a genomic finding
pub const ACTIONABILITY: &[&str] = &["Actionable", "Not actionable"];

/// Kind of medical action
pub const MEDICAL_ACTION_TYPE: &[&str] = &["Procedure", "Treatment", "Radiation"];

/// Relation of a pedigree member to the proband
pub const RELATION: &[&str] = &[
    "Proband",
    "Sibling",
    "Half sibling",
    "Parent",
    "Child",
    "Aunt",
    "Uncle",
    "Grandmother",
    "Grandfather",
    "First cousin",
    "Second cousin",
    "Other",
];
