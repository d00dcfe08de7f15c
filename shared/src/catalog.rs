//! Footwear catalog: the recommendation list, its category filter, the
//! per-shoe detail records and the small bits of selection state the
//! catalog screens keep locally.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
    strum_macros::Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Athletic,
    Casual,
    Dress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The filter tabs shown on the recommendations screen.
    pub const TABS: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Athletic),
        CategoryFilter::Only(Category::Casual),
    ];

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(Category::Athletic) => "Athletic",
            CategoryFilter::Only(Category::Casual) => "Casual",
            CategoryFilter::Only(Category::Dress) => "Dress",
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.to_ascii_lowercase().parse().map(CategoryFilter::Only)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub rating: f32,
    pub features: Vec<String>,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoeDetail {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub rating: f32,
    pub features: Vec<String>,
    pub description: String,
    pub sizes: Vec<f32>,
    pub colors: Vec<String>,
    pub benefits: Vec<String>,
}

impl ShoeDetail {
    /// Whole stars to light up out of five.
    pub fn full_stars(&self) -> usize {
        self.rating.floor().clamp(0.0, 5.0) as usize
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: 1,
            name: "Orthotic Support Walker".into(),
            price: 129.99,
            rating: 4.7,
            features: strings(&[
                "Extra depth design",
                "Removable insoles",
                "Structured heel counter",
                "Wide toe box",
            ]),
            category: Category::Athletic,
        },
        CatalogItem {
            id: 2,
            name: "Diabetic Comfort Plus".into(),
            price: 149.99,
            rating: 4.5,
            features: strings(&[
                "Seamless interior",
                "Pressure-distributing insoles",
                "Cushioned midsole",
                "Adjustable closures",
            ]),
            category: Category::Casual,
        },
        CatalogItem {
            id: 3,
            name: "Therapeutic Walker Pro".into(),
            price: 159.99,
            rating: 4.8,
            features: strings(&[
                "Motion control technology",
                "Arch support system",
                "Shock-absorbing heel",
                "Breathable upper",
            ]),
            category: Category::Athletic,
        },
        CatalogItem {
            id: 4,
            name: "Stability Dress Shoe".into(),
            price: 139.99,
            rating: 4.3,
            features: strings(&[
                "Professional appearance",
                "Hidden depth design",
                "Supportive footbed",
                "Slip-resistant outsole",
            ]),
            category: Category::Dress,
        },
    ]
}

pub fn shoe_details() -> Vec<ShoeDetail> {
    let sizes = vec![7.0, 7.5, 8.0, 8.5, 9.0, 9.5, 10.0, 10.5, 11.0];
    vec![
        ShoeDetail {
            id: "1".into(),
            name: "Orthotic Support Walker".into(),
            price: 129.99,
            rating: 4.7,
            features: strings(&[
                "Extra depth design",
                "Removable insoles",
                "Structured heel counter",
                "Wide toe box",
            ]),
            description: "Designed specifically for individuals with foot deformities and high arches. \
                The Orthotic Support Walker provides exceptional stability and cushioning to reduce \
                pressure points and prevent further complications."
                .into(),
            sizes: sizes.clone(),
            colors: strings(&["Black", "Gray", "Navy"]),
            benefits: strings(&[
                "Reduces pressure on deformities",
                "Provides arch support",
                "Accommodates custom orthotics",
                "Helps prevent ulceration",
            ]),
        },
        ShoeDetail {
            id: "2".into(),
            name: "Diabetic Comfort Plus".into(),
            price: 149.99,
            rating: 4.5,
            features: strings(&[
                "Seamless interior",
                "Pressure-distributing insoles",
                "Cushioned midsole",
                "Adjustable closures",
            ]),
            description: "The Diabetic Comfort Plus is specially designed for individuals with \
                diabetes and neuropathy. Its seamless interior and pressure-distributing insoles \
                help prevent irritation and reduce the risk of ulceration."
                .into(),
            sizes,
            colors: strings(&["Black", "Brown", "White"]),
            benefits: strings(&[
                "Prevents friction and irritation",
                "Distributes pressure evenly",
                "Accommodates foot swelling",
                "Reduces risk of skin breakdown",
            ]),
        },
    ]
}

/// Items matching `filter`, in catalog order.
pub fn filter_catalog(items: &[CatalogItem], filter: CategoryFilter) -> Vec<&CatalogItem> {
    items
        .iter()
        .filter(|item| filter.matches(item.category))
        .collect()
}

pub fn find_shoe<'a>(details: &'a [ShoeDetail], id: &str) -> Option<&'a ShoeDetail> {
    details.iter().find(|shoe| shoe.id == id)
}

/// Detail lookup as the detail screen does it: an unknown id shows the first
/// record instead of an error. `None` only when there are no records at all.
pub fn shoe_or_first<'a>(details: &'a [ShoeDetail], id: &str) -> Option<&'a ShoeDetail> {
    find_shoe(details, id).or_else(|| details.first())
}

/// Favourite ids, held only for the lifetime of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Favorites(BTreeSet<u32>);

impl Favorites {
    pub fn toggle(&mut self, id: u32) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr)]
pub enum DetailTab {
    #[default]
    #[strum(to_string = "Details")]
    Details,
    #[strum(to_string = "Features")]
    Features,
    #[strum(to_string = "Benefits")]
    Benefits,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShoeSelection {
    pub size: Option<f32>,
    pub color: Option<String>,
    pub favorite: bool,
    pub tab: DetailTab,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    Size(f32),
    Color(String),
    ToggleFavorite,
    Tab(DetailTab),
}

impl ShoeSelection {
    /// Size and colour are single-select: picking one replaces the previous.
    pub fn apply(&self, change: SelectionChange) -> Self {
        let mut next = self.clone();
        match change {
            SelectionChange::Size(size) => next.size = Some(size),
            SelectionChange::Color(color) => next.color = Some(color),
            SelectionChange::ToggleFavorite => next.favorite = !next.favorite,
            SelectionChange::Tab(tab) => next.tab = tab,
        }
        next
    }
}
