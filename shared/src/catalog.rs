//! # Product Catalog
//!
//! Fixed, in-memory list of products grouped into five categories, with
//! the filter / search / sort transforms used by the shop pages.

use std::fmt;

use serde::Serialize;

use crate::pricing::Usd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Sports,
    Books,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Fashion,
        Category::Home,
        Category::Sports,
        Category::Books,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Home => "home",
            Category::Sports => "sports",
            Category::Books => "books",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home & Garden",
            Category::Sports => "Sports & Fitness",
            Category::Books => "Books & Media",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Electronics => "\u{1f4f1}",
            Category::Fashion => "\u{1f455}",
            Category::Home => "\u{1f3e0}",
            Category::Sports => "\u{26bd}",
            Category::Books => "\u{1f4da}",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Usd,
    pub image_url: &'static str,
    pub category: Category,
    pub features: &'static [&'static str],
    pub popular: bool,
    /// Whole-percent discount.
    pub discount: Option<u8>,
}

impl Product {
    pub fn final_price(&self) -> Usd {
        match self.discount {
            Some(percent) => self.price.apply_discount(percent),
            None => self.price,
        }
    }

    pub fn savings(&self) -> Usd {
        self.price.saturating_sub(self.final_price())
    }
}

macro_rules! product {
    ($id:literal, $name:literal, $desc:literal, $cents:literal, $img:literal, $cat:ident, [$($feat:literal),*], $popular:literal, $discount:expr) => {
        Product {
            id: $id,
            name: $name,
            description: $desc,
            price: Usd::from_cents($cents),
            image_url: concat!("https://images.unsplash.com/", $img, "?w=800&h=600&fit=crop&crop=center"),
            category: Category::$cat,
            features: &[$($feat),*],
            popular: $popular,
            discount: $discount,
        }
    };
}

static PRODUCTS: [Product; 15] = [
    product!("1", "Wireless Bluetooth Headphones",
        "Premium noise-canceling wireless headphones with 30-hour battery life and superior sound quality",
        29999, "photo-1505740420928-5e560c06d30e", Electronics,
        ["30-hour battery", "Noise canceling", "Wireless charging"], true, None),
    product!("2", "Smart Fitness Watch",
        "Advanced fitness tracker with heart rate monitoring, GPS, and smartphone connectivity",
        24999, "photo-1523275335684-37898b6baf30", Electronics,
        ["Heart rate monitor", "GPS tracking", "Water resistant"], false, None),
    product!("3", "Portable Bluetooth Speaker",
        "Waterproof portable speaker with 360-degree sound and 12-hour playtime",
        8999, "photo-1608043152269-423dbba4e7e1", Electronics,
        ["Waterproof", "360\u{b0} sound", "12-hour battery"], true, Some(15)),
    product!("4", "Wireless Phone Charger",
        "Fast wireless charging pad compatible with all Qi-enabled devices",
        3999, "photo-1586953208448-b95a79798f07", Electronics,
        ["Fast charging", "Universal compatibility", "LED indicator"], false, None),
    product!("5", "Premium Cotton T-Shirt",
        "Soft, comfortable 100% organic cotton t-shirt in various colors and sizes",
        2999, "photo-1521572163474-6864f9cf17ab", Fashion,
        ["100% organic cotton", "Multiple colors", "Pre-shrunk"], true, None),
    product!("6", "Designer Denim Jeans",
        "Classic fit denim jeans with premium stitching and comfortable stretch fabric",
        7999, "photo-1542272604-787c3835535d", Fashion,
        ["Stretch fabric", "Classic fit", "Premium denim"], true, Some(20)),
    product!("7", "Leather Crossbody Bag",
        "Handcrafted genuine leather crossbody bag with adjustable strap and multiple compartments",
        14999, "photo-1553062407-98eeb64c6a62", Fashion,
        ["Genuine leather", "Multiple compartments", "Adjustable strap"], false, None),
    product!("8", "Smart LED Light Bulbs (4-Pack)",
        "WiFi-enabled smart bulbs with 16 million colors and voice control compatibility",
        5999, "photo-1558618666-fcd25c85cd64", Home,
        ["16M colors", "Voice control", "Energy efficient"], false, None),
    product!("9", "Ceramic Plant Pot Set",
        "Set of 3 modern ceramic planters with drainage holes and saucers",
        4599, "photo-1485955900006-10f4d324d411", Home,
        ["Drainage holes", "Modern design", "Set of 3"], true, None),
    product!("10", "Memory Foam Pillow",
        "Ergonomic memory foam pillow with cooling gel layer for better sleep",
        6999, "photo-1586075010923-2dd4570fb338", Home,
        ["Memory foam", "Cooling gel", "Ergonomic design"], true, Some(10)),
    product!("11", "Yoga Mat with Carrying Strap",
        "Non-slip yoga mat made from eco-friendly materials with alignment guides",
        3499, "photo-1544367567-0f2fcb009e0b", Sports,
        ["Non-slip surface", "Eco-friendly", "Alignment guides"], true, None),
    product!("12", "Adjustable Dumbbells Set",
        "Space-saving adjustable dumbbells with quick-change weight system (5-50 lbs each)",
        29999, "photo-1571019613454-1cb2f99b2d8b", Sports,
        ["5-50 lbs range", "Quick-change", "Space-saving"], false, Some(25)),
    product!("13", "Resistance Bands Set",
        "Complete resistance training set with 5 bands, handles, and door anchor",
        2499, "photo-1598300042247-d088f8ab3a91", Sports,
        ["5 resistance levels", "Door anchor included", "Portable"], true, None),
    product!("14", "Bestselling Novel Collection",
        "Set of 5 current bestselling novels from award-winning authors",
        8999, "photo-1481627834876-b7833e8f5570", Books,
        ["5 bestsellers", "Award-winning authors", "Hardcover editions"], true, None),
    product!("15", "Vintage Vinyl Record",
        "Classic rock vinyl record in mint condition with original album artwork",
        3499, "photo-1493225457124-a3eb161ffa5f", Books,
        ["Mint condition", "Original artwork", "Classic rock"], false, Some(15)),
];

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn find(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Ordering offered on the shop page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Name,
    PopularFirst,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
        SortKey::Name,
        SortKey::PopularFirst,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLowToHigh => "price-asc",
            SortKey::PriceHighToLow => "price-desc",
            SortKey::Name => "name",
            SortKey::PopularFirst => "popular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
            SortKey::Name => "Name",
            SortKey::PopularFirst => "Most Popular",
        }
    }

    pub fn from_id(id: &str) -> Self {
        Self::ALL.into_iter().find(|k| k.id() == id).unwrap_or_default()
    }
}

/// Filter + search + sort, applied in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<Category>,
    pub text: String,
    pub sort: SortKey,
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        if self.category.is_some_and(|c| c != product.category) {
            return false;
        }
        let needle = self.text.trim().to_lowercase();
        needle.is_empty()
            || product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut out: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        // Stable sorts keep catalog order among equals.
        match self.sort {
            SortKey::Featured => {}
            SortKey::PriceLowToHigh => out.sort_by_key(|p| p.final_price()),
            SortKey::PriceHighToLow => out.sort_by_key(|p| std::cmp::Reverse(p.final_price())),
            SortKey::Name => out.sort_by_key(|p| p.name.to_lowercase()),
            SortKey::PopularFirst => out.sort_by_key(|p| !p.popular),
        }
        out
    }
}

/// Each category with its product count, in display order.
pub fn category_counts(products: &[Product]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|c| (c, products.iter().filter(|p| p.category == c).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(products().len(), 15);
        let counts = category_counts(products());
        assert_eq!(
            counts,
            vec![
                (Category::Electronics, 4),
                (Category::Fashion, 3),
                (Category::Home, 3),
                (Category::Sports, 3),
                (Category::Books, 2),
            ]
        );
    }

    #[test]
    fn test_find() {
        assert_eq!(find("3").map(|p| p.name), Some("Portable Bluetooth Speaker"));
        assert!(find("99").is_none());
    }

    #[test]
    fn test_final_price_and_savings() {
        let speaker = find("3").unwrap();
        assert_eq!(speaker.final_price(), Usd::from_cents(7649));
        assert_eq!(speaker.savings(), Usd::from_cents(1350));

        let headphones = find("1").unwrap();
        assert_eq!(headphones.final_price(), headphones.price);
        assert_eq!(headphones.savings(), Usd::ZERO);
    }

    #[test]
    fn test_filter_and_search() {
        let query = ProductQuery {
            category: Some(Category::Electronics),
            text: "BLUETOOTH".to_string(),
            sort: SortKey::Featured,
        };
        let ids: Vec<&str> = query.apply(products()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let query = ProductQuery {
            text: "alignment".to_string(),
            ..ProductQuery::default()
        };
        let ids: Vec<&str> = query.apply(products()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["11"]);
    }

    #[test]
    fn test_sort_by_price() {
        let query = ProductQuery {
            category: Some(Category::Sports),
            sort: SortKey::PriceLowToHigh,
            ..ProductQuery::default()
        };
        let ids: Vec<&str> = query.apply(products()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["13", "11", "12"]);

        let query = ProductQuery {
            sort: SortKey::PriceHighToLow,
            ..ProductQuery::default()
        };
        let sorted = query.apply(products());
        assert_eq!(sorted[0].id, "1");
        assert!(sorted.windows(2).all(|w| w[0].final_price() >= w[1].final_price()));
    }

    #[test]
    fn test_popular_first_is_stable() {
        let query = ProductQuery {
            category: Some(Category::Books),
            sort: SortKey::PopularFirst,
            ..ProductQuery::default()
        };
        let ids: Vec<&str> = query.apply(products()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["14", "15"]);
    }

    #[test]
    fn test_sort_key_ids() {
        assert_eq!(SortKey::from_id("price-desc"), SortKey::PriceHighToLow);
        assert_eq!(SortKey::from_id("bogus"), SortKey::Featured);
        assert_eq!(Category::from_id("home"), Some(Category::Home));
    }
}
