use serde::{Deserialize, Serialize};

/// One of the 15 Scope 3 categories of the GHG Protocol.
/// Categories 1-8 are upstream, 9-15 downstream.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    PurchasedGoods,
    CapitalGoods,
    FuelAndEnergy,
    UpstreamTransport,
    Waste,
    BusinessTravel,
    EmployeeCommuting,
    UpstreamLeasedAssets,
    DownstreamTransport,
    Processing,
    UseOfSoldProducts,
    EndOfLife,
    DownstreamLeasedAssets,
    Franchises,
    Investments,
}

impl Category {
    /// All categories, in GHG Protocol order
    pub const ALL: [Category; 15] = [
        Category::PurchasedGoods,
        Category::CapitalGoods,
        Category::FuelAndEnergy,
        Category::UpstreamTransport,
        Category::Waste,
        Category::BusinessTravel,
        Category::EmployeeCommuting,
        Category::UpstreamLeasedAssets,
        Category::DownstreamTransport,
        Category::Processing,
        Category::UseOfSoldProducts,
        Category::EndOfLife,
        Category::DownstreamLeasedAssets,
        Category::Franchises,
        Category::Investments,
    ];

    /// The GHG Protocol number of the category (1-15)
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::PurchasedGoods => "Purchased goods and services",
            Category::CapitalGoods => "Capital goods",
            Category::FuelAndEnergy => "Fuel and energy related activities",
            Category::UpstreamTransport => "Upstream transportation and distribution",
            Category::Waste => "Waste generated in operations",
            Category::BusinessTravel => "Business travel",
            Category::EmployeeCommuting => "Employee commuting",
            Category::UpstreamLeasedAssets => "Upstream leased assets",
            Category::DownstreamTransport => "Downstream transportation and distribution",
            Category::Processing => "Processing of sold products",
            Category::UseOfSoldProducts => "Use of sold products",
            Category::EndOfLife => "End-of-life treatment of sold products",
            Category::DownstreamLeasedAssets => "Downstream leased assets",
            Category::Franchises => "Franchises",
            Category::Investments => "Investments",
        }
    }

    pub fn is_upstream(&self) -> bool {
        self.number() <= 8
    }

    /// Categories 1-8
    pub fn upstream() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(Category::is_upstream)
    }

    /// Categories 9-15
    pub fn downstream() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(|c| !c.is_upstream())
    }
}

impl TryFrom<u8> for Category {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
            .ok_or_else(|| format!("{number} is not a Scope 3 category (1-15)"))
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.number()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numbers() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.number() as usize, i + 1);
            assert_eq!(Category::try_from(category.number()), Ok(*category));
        }
        assert!(Category::try_from(0).is_err());
        assert!(Category::try_from(16).is_err());
    }

    #[test]
    fn streams() {
        assert_eq!(Category::upstream().count(), 8);
        assert_eq!(Category::downstream().count(), 7);
        assert_eq!(
            Category::downstream().next(),
            Some(Category::DownstreamTransport)
        );
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&Category::Waste).unwrap(), "5");
        let category: Category = serde_json::from_str("11").unwrap();
        assert_eq!(category, Category::UseOfSoldProducts);
        assert!(serde_json::from_str::<Category>("42").is_err());
    }
}
