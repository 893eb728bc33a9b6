//! Rule-based assignment of programs to fields of study.
//!
//! Keyword tables are ordered: a program name can hit keywords from several
//! categories and the first category in [`CATEGORY_KEYWORDS`] wins.

use serde::{Deserialize, Serialize};

/// Fixed taxonomy of study fields. `Other` keeps classification total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Theology,
    MedicineAndPharmacy,
    ItAndComputerScience,
    BusinessAndEconomics,
    Law,
    ArtsAndDesign,
    MusicAndTheatre,
    Engineering,
    LanguagesAndPhilology,
    NaturalSciences,
    SocialSciences,
    Agriculture,
    Education,
    Other,
}

impl Category {
    pub const fn ordered() -> [Self; 14] {
        [
            Self::Theology,
            Self::MedicineAndPharmacy,
            Self::ItAndComputerScience,
            Self::BusinessAndEconomics,
            Self::Law,
            Self::ArtsAndDesign,
            Self::MusicAndTheatre,
            Self::Engineering,
            Self::LanguagesAndPhilology,
            Self::NaturalSciences,
            Self::SocialSciences,
            Self::Agriculture,
            Self::Education,
            Self::Other,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Theology => "theology",
            Self::MedicineAndPharmacy => "medicine_and_pharmacy",
            Self::ItAndComputerScience => "it_and_computer_science",
            Self::BusinessAndEconomics => "business_and_economics",
            Self::Law => "law",
            Self::ArtsAndDesign => "arts_and_design",
            Self::MusicAndTheatre => "music_and_theatre",
            Self::Engineering => "engineering",
            Self::LanguagesAndPhilology => "languages_and_philology",
            Self::NaturalSciences => "natural_sciences",
            Self::SocialSciences => "social_sciences",
            Self::Agriculture => "agriculture",
            Self::Education => "education",
            Self::Other => "other",
        }
    }

    /// Georgian label used by the catalog's audience.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Theology => "საღვთისმეტყველო",
            Self::MedicineAndPharmacy => "მედიცინა და ფარმაცია",
            Self::ItAndComputerScience => "IT და კომპიუტერული მეცნიერებები",
            Self::BusinessAndEconomics => "ბიზნესი და ეკონომიკა",
            Self::Law => "სამართალი",
            Self::ArtsAndDesign => "ხელოვნება და დიზაინი",
            Self::MusicAndTheatre => "მუსიკა და თეატრი",
            Self::Engineering => "ინჟინერია",
            Self::LanguagesAndPhilology => "ენები და ფილოლოგია",
            Self::NaturalSciences => "საბუნებისმეტყველო მეცნიერებები",
            Self::SocialSciences => "სოციალური მეცნიერებები",
            Self::Agriculture => "სასოფლო-სამეურნეო",
            Self::Education => "განათლება",
            Self::Other => "სხვა",
        }
    }

    /// Accepts either the snake_case key or the Georgian label.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered().into_iter().find(|category| {
            category.key().eq_ignore_ascii_case(trimmed) || category.label() == trimmed
        })
    }
}

/// University codes of theological institutions; their programs skip keyword matching.
pub const THEOLOGICAL_UNIVERSITY_CODES: &[u32] = &[29, 38, 110];

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::MedicineAndPharmacy,
        &["მედიცინა", "სტომატოლოგ", "ფარმაცია", "medicine", "dentist", "pharmac"],
    ),
    (
        Category::ItAndComputerScience,
        &["კომპიუტერ", "ინფორმაცი", "computer", "informat"],
    ),
    (
        Category::BusinessAndEconomics,
        &[
            "ბიზნეს",
            "ეკონომიკ",
            "მენეჯმენტ",
            "ფინანს",
            "ტურიზმ",
            "business",
            "econom",
            "management",
            "financ",
            "touris",
        ],
    ),
    (Category::Law, &["სამართალ", "law"]),
    (
        Category::ArtsAndDesign,
        &["ხელოვნება", "დიზაინ", "არქიტექტურ", "ხატვა", "design", "architect"],
    ),
    (
        Category::MusicAndTheatre,
        &["მუსიკ", "თეატრ", "კინო", "მსახიობ", "music", "theat", "film"],
    ),
    (Category::Engineering, &["ინჟინერ", "მშენებლობ", "engineer"]),
    (Category::LanguagesAndPhilology, &["ფილოლოგ", "philolog"]),
    (
        Category::NaturalSciences,
        &["მათემატიკ", "ფიზიკ", "ქიმი", "ბიოლოგ", "mathemat", "physics", "chemist", "biolog"],
    ),
    (
        Category::SocialSciences,
        &["ფსიქოლოგ", "პოლიტიკ", "სოციოლოგ", "ისტორი", "psycholog", "politic", "sociolog", "histor"],
    ),
    (Category::Agriculture, &["აგრონომ", "ვეტერინარ", "agronom", "veterinar"]),
    (Category::Education, &["მასწავლებელ", "განათლება", "teacher", "education"]),
];

/// Assigns exactly one category to a program. Pure and deterministic.
pub fn classify(program_name: &str, university_code: u32) -> Category {
    if THEOLOGICAL_UNIVERSITY_CODES.contains(&university_code) {
        return Category::Theology;
    }

    let name = program_name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
