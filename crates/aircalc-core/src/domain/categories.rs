//! Keyword registry for grouping services into categories.
//!
//! Services carry no category field, so the bucket is inferred from the
//! display name: a case-insensitive substring search against a fixed keyword
//! list per category. Both the English labels and the Russian keywords used
//! by the stock catalog are registered.
//!
//! Buckets are tried in [`CATEGORY_REGISTRY`] order and the first hit wins,
//! so a name like "Cable mounting" lands in `installation`, not
//! `construction`. Names that match nothing fall into [`Category::Other`].

use serde::Serialize;
use std::fmt;

use crate::domain::entities::{Catalog, Service};

/// A display bucket for services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Installation,
    Maintenance,
    Construction,
    Other,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Installation => "installation",
            Self::Maintenance => "maintenance",
            Self::Construction => "construction",
            Self::Other => "other",
        }
    }

    /// Classify a service name. Always succeeds.
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        CATEGORY_REGISTRY
            .iter()
            .find(|def| def.keywords.iter().any(|kw| name.contains(kw)))
            .map(|def| def.category)
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Keywords that pull a service into one category. Lowercase.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Matching order is precedence order.
pub static CATEGORY_REGISTRY: &[CategoryDef] = &[
    CategoryDef {
        category: Category::Installation,
        keywords: &["mounting", "installation", "монтаж", "установка"],
    },
    CategoryDef {
        category: Category::Maintenance,
        keywords: &["maintenance", "site-visit", "обслуживание", "выезд"],
    },
    CategoryDef {
        category: Category::Construction,
        keywords: &[
            "channel-cutting",
            "drilling",
            "cable-route",
            "cable",
            "conduit",
            "штробление",
            "бурение",
            "трасса",
            "кабеля",
            "короб",
        ],
    },
];

// ── Partition ─────────────────────────────────────────────────────────────────

/// The catalog split into four disjoint buckets, each in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Categories<'a> {
    pub installation: Vec<&'a Service>,
    pub maintenance: Vec<&'a Service>,
    pub construction: Vec<&'a Service>,
    pub other: Vec<&'a Service>,
}

impl<'a> Categories<'a> {
    pub fn bucket(&self, category: Category) -> &[&'a Service] {
        match category {
            Category::Installation => &self.installation,
            Category::Maintenance => &self.maintenance,
            Category::Construction => &self.construction,
            Category::Other => &self.other,
        }
    }

    /// Buckets in display order, paired with their category.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[&'a Service])> {
        [
            Category::Installation,
            Category::Maintenance,
            Category::Construction,
            Category::Other,
        ]
        .into_iter()
        .map(move |category| (category, self.bucket(category)))
    }

    pub fn len(&self) -> usize {
        self.installation.len() + self.maintenance.len() + self.construction.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition a catalog by name keywords.
pub fn categorize(catalog: &Catalog) -> Categories<'_> {
    let mut categories = Categories::default();
    for service in catalog {
        let bucket = match Category::classify(&service.name) {
            Category::Installation => &mut categories.installation,
            Category::Maintenance => &mut categories.maintenance,
            Category::Construction => &mut categories.construction,
            Category::Other => &mut categories.other,
        };
        bucket.push(service);
    }
    categories
}
