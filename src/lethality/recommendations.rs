use crate::core::RiskLevel;

/// Intervention steps for a lethality level, most urgent first.
pub fn recommendations_for(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Extreme => &[
            "Immediate law enforcement notification",
            "Emergency safety planning",
            "Consider emergency relocation",
            "24/7 safety monitoring",
        ],
        RiskLevel::High => &[
            "Comprehensive safety planning",
            "Law enforcement notification",
            "Increased support services",
            "Regular check-ins",
        ],
        RiskLevel::Moderate => &[
            "Safety planning",
            "Resource connection",
            "Regular monitoring",
        ],
        RiskLevel::Low => &["Basic safety planning", "Resource information"],
    }
}
