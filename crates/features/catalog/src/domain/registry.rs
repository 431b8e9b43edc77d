//! Built-in product types and their print-position policies.
//!
//! The table is compiled into the binary and never mutated. Declaration order
//! is significant: it is the order of [`get_product_type_options`].

use fxhash::FxHashSet;
use std::fmt;
use whub_derive::api_model;

/// Optional rules attached to a product type. `None` means "no rule".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionConstraints {
    /// Upper bound on the number of simultaneously selected positions.
    pub max_positions: Option<usize>,
    /// Positions that must all be present in a selection.
    pub required_positions: Option<&'static [&'static str]>,
    /// Positions that should not be combined with others (advisory only).
    pub exclusive_positions: Option<&'static [&'static str]>,
}

/// A registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub allowed_positions: &'static [&'static str],
    pub constraints: Option<PositionConstraints>,
}

impl ProductType {
    #[must_use]
    pub fn max_positions(&self) -> Option<usize> {
        self.constraints.and_then(|c| c.max_positions)
    }

    #[must_use]
    pub fn required_positions(&self) -> Option<&'static [&'static str]> {
        self.constraints.and_then(|c| c.required_positions)
    }

    #[must_use]
    pub fn exclusive_positions(&self) -> Option<&'static [&'static str]> {
        self.constraints.and_then(|c| c.exclusive_positions)
    }
}

/// Display pair for populating a product-type picker.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ProductTypeOption {
    /// Display name
    pub label: String,
    /// Product type id
    pub value: String,
}

static PRODUCT_TYPES: &[ProductType] = &[
    ProductType {
        id: "t-shirt",
        name: "T-Shirt",
        description: "Classic short-sleeve crew neck tee",
        allowed_positions: &[
            "Front",
            "Back",
            "Left Sleeve",
            "Right Sleeve",
            "Left Chest",
            "Right Chest",
            "Neck Label",
        ],
        constraints: Some(PositionConstraints {
            max_positions: Some(4),
            required_positions: None,
            exclusive_positions: None,
        }),
    },
    ProductType {
        id: "long-sleeve",
        name: "Long Sleeve Shirt",
        description: "Long-sleeve crew neck shirt",
        allowed_positions: &["Front", "Back", "Left Sleeve", "Right Sleeve", "Left Chest"],
        constraints: Some(PositionConstraints {
            max_positions: Some(4),
            required_positions: None,
            exclusive_positions: None,
        }),
    },
    ProductType {
        id: "hoodie",
        name: "Hoodie",
        description: "Pullover hoodie with kangaroo pocket",
        allowed_positions: &["Front", "Back", "Left Sleeve", "Right Sleeve", "Hood", "Pocket"],
        constraints: Some(PositionConstraints {
            max_positions: Some(4),
            required_positions: None,
            exclusive_positions: None,
        }),
    },
    ProductType {
        id: "tank-top",
        name: "Tank Top",
        description: "Sleeveless tank top",
        allowed_positions: &["Front", "Back"],
        constraints: Some(PositionConstraints {
            max_positions: Some(2),
            required_positions: None,
            exclusive_positions: None,
        }),
    },
    ProductType {
        id: "polo",
        name: "Polo Shirt",
        description: "Collared polo shirt",
        allowed_positions: &["Left Chest", "Right Chest", "Back", "Left Sleeve", "Right Sleeve"],
        constraints: Some(PositionConstraints {
            max_positions: Some(3),
            required_positions: None,
            exclusive_positions: None,
        }),
    },
    ProductType {
        id: "cap",
        name: "Cap",
        description: "Structured baseball cap",
        allowed_positions: &["Front", "Back", "Left Side", "Right Side"],
        constraints: Some(PositionConstraints {
            max_positions: Some(2),
            required_positions: None,
            exclusive_positions: None,
        }),
    },
    ProductType {
        id: "tote-bag",
        name: "Tote Bag",
        description: "Canvas tote bag, single print area",
        allowed_positions: &["Front"],
        constraints: Some(PositionConstraints {
            max_positions: Some(1),
            required_positions: Some(&["Front"]),
            exclusive_positions: None,
        }),
    },
    ProductType {
        id: "mug",
        name: "Mug",
        description: "Ceramic mug, wrap-around or side prints",
        allowed_positions: &["Full Wrap", "Left Side", "Right Side"],
        constraints: Some(PositionConstraints {
            max_positions: None,
            required_positions: Some(&["Full Wrap"]),
            exclusive_positions: Some(&["Full Wrap"]),
        }),
    },
    ProductType {
        id: "phone-case",
        name: "Phone Case",
        description: "Snap-on phone case",
        allowed_positions: &["Back"],
        constraints: Some(PositionConstraints {
            max_positions: Some(1),
            required_positions: Some(&["Back"]),
            exclusive_positions: None,
        }),
    },
    ProductType {
        id: "poster",
        name: "Poster",
        description: "Single-sided paper poster",
        allowed_positions: &["Front"],
        constraints: None,
    },
];

/// The full registry in declaration order.
#[must_use]
pub fn product_types() -> &'static [ProductType] {
    PRODUCT_TYPES
}

/// Exact, case-sensitive lookup by id.
#[must_use]
pub fn get_product_type(id: &str) -> Option<&'static ProductType> {
    PRODUCT_TYPES.iter().find(|product_type| product_type.id == id)
}

/// Allowed positions of `id`, or an empty slice when the id is unknown.
#[must_use]
pub fn get_allowed_positions(id: &str) -> &'static [&'static str] {
    get_product_type(id).map_or(&[], |product_type| product_type.allowed_positions)
}

/// `{ label: name, value: id }` for every product type, in registry order.
#[must_use]
pub fn get_product_type_options() -> Vec<ProductTypeOption> {
    PRODUCT_TYPES
        .iter()
        .map(|product_type| ProductTypeOption {
            label: product_type.name.to_owned(),
            value: product_type.id.to_owned(),
        })
        .collect()
}

/// Which constraint list a [`RegistryFinding`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    Required,
    Exclusive,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "required",
            Self::Exclusive => "exclusive",
        })
    }
}

/// A constrained position that is missing from the entry's allowed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryFinding {
    pub product_type: &'static str,
    pub position: &'static str,
    pub kind: FindingKind,
}

impl fmt::Display for RegistryFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} position '{}' is not an allowed position",
            self.product_type, self.kind, self.position
        )
    }
}

/// Inspects the built-in registry. See [`audit_product_types`].
#[must_use]
pub fn audit_registry() -> Vec<RegistryFinding> {
    audit_product_types(PRODUCT_TYPES)
}

/// Lists every required or exclusive position that is not (case-insensitively)
/// one of the entry's allowed positions.
///
/// Findings are diagnostics only; nothing in the crate rejects an entry because
/// of them.
#[must_use]
pub fn audit_product_types(product_types: &[ProductType]) -> Vec<RegistryFinding> {
    let mut findings = Vec::new();

    for product_type in product_types {
        let allowed: FxHashSet<String> =
            product_type.allowed_positions.iter().map(|p| p.to_lowercase()).collect();

        let lists = [
            (FindingKind::Required, product_type.required_positions()),
            (FindingKind::Exclusive, product_type.exclusive_positions()),
        ];

        for (kind, positions) in lists {
            findings.extend(
                positions
                    .unwrap_or_default()
                    .iter()
                    .filter(|position| !allowed.contains(&position.to_lowercase()))
                    .map(|&position| RegistryFinding {
                        product_type: product_type.id,
                        position,
                        kind,
                    }),
            );
        }
    }

    findings
}

/// Ids that appear more than once, in first-duplicate order.
#[must_use]
pub(crate) fn duplicate_ids(product_types: &[ProductType]) -> Vec<&'static str> {
    let mut seen = FxHashSet::default();
    product_types.iter().map(|product_type| product_type.id).filter(|id| !seen.insert(*id)).collect()
}
