// src/threat.rs

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatLevel {
    Clean,
    LowRisk,
    MediumRisk,
    HighRisk,
    Unknown,
}

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 5] = [
        ThreatLevel::Clean,
        ThreatLevel::LowRisk,
        ThreatLevel::MediumRisk,
        ThreatLevel::HighRisk,
        ThreatLevel::Unknown,
    ];

    /// Anything the server sends that we don't recognise is shown as Unknown.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Clean" => ThreatLevel::Clean,
            "Low Risk" => ThreatLevel::LowRisk,
            "Medium Risk" => ThreatLevel::MediumRisk,
            "High Risk" => ThreatLevel::HighRisk,
            _ => ThreatLevel::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThreatLevel::Clean => "Clean",
            ThreatLevel::LowRisk => "Low Risk",
            ThreatLevel::MediumRisk => "Medium Risk",
            ThreatLevel::HighRisk => "High Risk",
            ThreatLevel::Unknown => "Unknown",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ThreatLevel::Clean => "fa-check-circle",
            ThreatLevel::LowRisk | ThreatLevel::MediumRisk => "fa-exclamation-triangle",
            ThreatLevel::HighRisk => "fa-times-circle",
            ThreatLevel::Unknown => "fa-question-circle",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            ThreatLevel::Clean => "success",
            ThreatLevel::LowRisk | ThreatLevel::MediumRisk => "warning",
            ThreatLevel::HighRisk => "danger",
            ThreatLevel::Unknown => "secondary",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ThreatLevel::Clean => "No engine or reporter flagged it.",
            ThreatLevel::LowRisk => "A few detections or reports; often false positives.",
            ThreatLevel::MediumRisk => "Several independent detections. Treat with care.",
            ThreatLevel::HighRisk => "Widely flagged as malicious.",
            ThreatLevel::Unknown => "Never seen by the intelligence sources.",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThreatBadgeProps {
    pub level: ThreatLevel,
}

#[function_component(ThreatBadge)]
pub fn threat_badge(props: &ThreatBadgeProps) -> Html {
    let level = props.level;
    html! {
        <span
            class={classes!("badge", format!("bg-{}", level.tone()))}
            data-bs-toggle="tooltip"
            title={level.hint()}
        >
            <i class={classes!("fas", level.icon(), "me-1")}></i>
            { level.label() }
        </span>
    }
}

#[function_component(VerdictLegend)]
pub fn verdict_legend() -> Html {
    html! {
        <ul class="legend">
            { for ThreatLevel::ALL.iter().map(|&level| html! {
                <li key={level.label()}>
                    <ThreatBadge {level} />
                    <span class="legend-hint">{ level.hint() }</span>
                </li>
            }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for level in ThreatLevel::ALL {
            assert_eq!(ThreatLevel::from_label(level.label()), level);
        }
    }

    #[test]
    fn test_unrecognized_label_is_unknown() {
        assert_eq!(ThreatLevel::from_label("Catastrophic"), ThreatLevel::Unknown);
        assert_eq!(ThreatLevel::from_label("clean"), ThreatLevel::Unknown);
        assert_eq!(ThreatLevel::from_label(""), ThreatLevel::Unknown);
    }

    #[test]
    fn test_badge_styling() {
        assert_eq!(ThreatLevel::Clean.tone(), "success");
        assert_eq!(ThreatLevel::MediumRisk.tone(), "warning");
        assert_eq!(ThreatLevel::HighRisk.icon(), "fa-times-circle");
        assert_eq!(ThreatLevel::Unknown.tone(), "secondary");
    }
}
