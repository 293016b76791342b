//! Eco-tips catalogue

use crate::models::{EcoTip, TipCategory, TipGroup};

pub const ECO_TIPS: [EcoTip; 10] = [
    EcoTip {
        category: TipCategory::SoilHealth,
        tip: "Compost Organic Waste",
        description: "Enhance soil organic matter by composting kitchen and garden waste.",
    },
    EcoTip {
        category: TipCategory::SoilHealth,
        tip: "Practice Crop Rotation",
        description: "Naturally manage soil nutrients and reduce pest buildup by rotating crops each season.",
    },
    EcoTip {
        category: TipCategory::WaterConservation,
        tip: "Adopt Drip Irrigation",
        description: "Minimize water waste by delivering water directly to plant roots.",
    },
    EcoTip {
        category: TipCategory::WaterConservation,
        tip: "Harvest Rainwater",
        description: "Collect and store rainwater for irrigation to reduce dependence on external water sources.",
    },
    EcoTip {
        category: TipCategory::EnergyEfficiency,
        tip: "Use Solar-Powered Pumps",
        description: "Reduce energy consumption by utilizing renewable solar energy for irrigation systems.",
    },
    EcoTip {
        category: TipCategory::EnergyEfficiency,
        tip: "Upgrade to LED Lighting",
        description: "Lower energy usage and costs by switching to energy-efficient LED lighting in greenhouses.",
    },
    EcoTip {
        category: TipCategory::SoilConservation,
        tip: "Minimize Tillage",
        description: "Maintain soil structure and reduce erosion by limiting the use of tillage equipment.",
    },
    EcoTip {
        category: TipCategory::SoilConservation,
        tip: "Utilize Cover Cropping",
        description: "Protect the soil during off-seasons with cover crops that prevent erosion and improve soil health.",
    },
    EcoTip {
        category: TipCategory::PestManagement,
        tip: "Introduce Beneficial Insects",
        description: "Control pests naturally by attracting or introducing insects that prey on harmful pests.",
    },
    EcoTip {
        category: TipCategory::PestManagement,
        tip: "Use Organic Pesticides",
        description: "Reduce chemical usage by opting for environmentally friendly pesticide alternatives.",
    },
];

pub fn eco_tips() -> &'static [EcoTip] {
    &ECO_TIPS
}

/// Tips grouped by category, categories in first-seen order
pub fn grouped_tips() -> Vec<TipGroup> {
    let mut groups: Vec<TipGroup> = Vec::new();
    for tip in eco_tips() {
        match groups.iter_mut().find(|g| g.category == tip.category) {
            Some(group) => group.tips.push(*tip),
            None => groups.push(TipGroup {
                category: tip.category,
                tips: vec![*tip],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ten_tips_across_five_categories() {
        assert_eq!(eco_tips().len(), 10);
        let categories: HashSet<_> = eco_tips().iter().map(|t| t.category).collect();
        assert_eq!(categories.len(), 5);
    }

    #[test]
    fn test_grouping_preserves_order() {
        let groups = grouped_tips();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].category, TipCategory::SoilHealth);
        assert_eq!(groups[4].category, TipCategory::PestManagement);
        assert!(groups.iter().all(|g| g.tips.len() == 2));
        assert_eq!(groups[1].tips[1].tip, "Harvest Rainwater");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(TipCategory::WaterConservation.to_string(), "Water Conservation");
    }
}
