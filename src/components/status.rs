//! Status Classification
//!
//! Pure mappings from upstream status tags and risk percentages to display
//! classes, icons and badge variants. No state, no side effects.

use crate::components::badge::BadgeVariant;

/// Background color class for a KPI status indicator.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "good" => "bg-green-500",
        "warning" => "bg-yellow-500",
        "critical" => "bg-red-500",
        _ => "bg-gray-500",
    }
}

/// Icon for a KPI status indicator. Unrecognized statuses fall back to a
/// neutral clock.
pub fn status_icon(status: &str) -> &'static str {
    match status {
        "good" => "✓",
        "warning" | "critical" => "⚠",
        _ => "🕐",
    }
}

/// Badge variant for a KPI status.
pub fn kpi_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "good" => BadgeVariant::Default,
        "warning" => BadgeVariant::Secondary,
        _ => BadgeVariant::Destructive,
    }
}

/// French badge label for a KPI status. Anything that is neither good nor
/// warning reads as critical, matching the two-branch display rule.
pub fn kpi_badge_label(status: &str) -> &'static str {
    match status {
        "good" => "Excellent",
        "warning" => "Attention",
        _ => "Critique",
    }
}

/// Badge variant for a city's high-risk order percentage: escalates at the
/// fixed >50 and >25 thresholds.
pub fn risk_badge_variant(risk_percentage: f64) -> BadgeVariant {
    if risk_percentage > 50.0 {
        BadgeVariant::Destructive
    } else if risk_percentage > 25.0 {
        BadgeVariant::Secondary
    } else {
        BadgeVariant::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_mapping() {
        assert_eq!(status_color("good"), "bg-green-500");
        assert_eq!(status_color("warning"), "bg-yellow-500");
        assert_eq!(status_color("critical"), "bg-red-500");
        assert_eq!(status_color("unknown"), "bg-gray-500");
        assert_eq!(status_color(""), "bg-gray-500");
    }

    #[test]
    fn test_status_icon_mapping() {
        assert_eq!(status_icon("good"), "✓");
        assert_eq!(status_icon("warning"), "⚠");
        assert_eq!(status_icon("critical"), "⚠");
        assert_eq!(status_icon("anything-else"), "🕐");
    }

    #[test]
    fn test_kpi_badge_labels_are_exact() {
        assert_eq!(kpi_badge_label("good"), "Excellent");
        assert_eq!(kpi_badge_label("warning"), "Attention");
        assert_eq!(kpi_badge_label("critical"), "Critique");
        assert_eq!(kpi_badge_label("bogus"), "Critique");
    }

    #[test]
    fn test_kpi_badge_variants() {
        assert_eq!(kpi_badge_variant("good"), BadgeVariant::Default);
        assert_eq!(kpi_badge_variant("warning"), BadgeVariant::Secondary);
        assert_eq!(kpi_badge_variant("critical"), BadgeVariant::Destructive);
    }

    #[test]
    fn test_risk_badge_thresholds() {
        assert_eq!(risk_badge_variant(51.0), BadgeVariant::Destructive);
        assert_eq!(risk_badge_variant(50.0), BadgeVariant::Secondary);
        assert_eq!(risk_badge_variant(30.0), BadgeVariant::Secondary);
        assert_eq!(risk_badge_variant(25.0), BadgeVariant::Default);
        assert_eq!(risk_badge_variant(10.0), BadgeVariant::Default);
    }
}
