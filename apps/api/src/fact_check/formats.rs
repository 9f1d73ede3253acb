//! Static fact-check formats, one per classified topic.
//!
//! Each format names the keywords that route a claim to it, the analysis the
//! topic calls for, the source categories to consult, the verification steps,
//! and the verdict criteria. The criteria are descriptive text; they are fed
//! to the LLM, not evaluated here.

use serde::Serialize;

use crate::fact_check::topics::Topic;

/// Topics that own a format, in classification order.
pub const CLASSIFIED_TOPICS: [Topic; 4] = [
    Topic::Infrastructure,
    Topic::Environment,
    Topic::Economy,
    Topic::Health,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Statistical,
    Policy,
    Historical,
    Comparative,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDepth {
    Basic,
    Detailed,
    Comprehensive,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSection {
    pub title: &'static str,
    pub kind: SectionKind,
    pub required_data: &'static [&'static str],
    pub depth: AnalysisDepth,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStructure {
    pub sections: &'static [AnalysisSection],
    pub key_metrics: &'static [&'static str],
    pub comparison_points: &'static [&'static str],
    pub contextual_factors: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Government,
    Academic,
    International,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcePriority {
    Essential,
    Important,
    Supplementary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRequirement {
    pub category: SourceCategory,
    pub priority: SourcePriority,
    pub specific_sources: &'static [&'static str],
    pub data_points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationMethod {
    CrossReference,
    StatisticalAnalysis,
    ExpertValidation,
    HistoricalComparison,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStep {
    pub step: &'static str,
    pub method: VerificationMethod,
    pub sources: &'static [&'static str],
    pub expected_outcome: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictCriteria {
    pub true_conditions: &'static [&'static str],
    pub false_conditions: &'static [&'static str],
    pub partially_true_conditions: &'static [&'static str],
    pub misleading_conditions: &'static [&'static str],
    pub unverified_conditions: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTemplate {
    pub verdict_criteria: VerdictCriteria,
    pub summary_structure: &'static [&'static str],
    pub detailed_sections: &'static [&'static str],
    pub key_points_format: &'static [&'static str],
    pub source_presentation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckFormat {
    pub topic: Topic,
    pub title: &'static str,
    pub keywords: &'static [&'static str],
    pub analysis: AnalysisStructure,
    pub required_sources: &'static [SourceRequirement],
    pub verification_steps: &'static [VerificationStep],
    pub output: OutputTemplate,
}

/// The subset of a format that shapes an analysis; embedded into LLM prompts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimStructure {
    pub topic: &'static str,
    pub required_analysis: &'static [AnalysisSection],
    pub key_metrics: &'static [&'static str],
    pub verification_steps: &'static [VerificationStep],
    pub expected_sources: &'static [SourceRequirement],
}

/// Looks up the format for a topic. `General` has none.
pub fn get_format(topic: Topic) -> Option<&'static FactCheckFormat> {
    match topic {
        Topic::Infrastructure => Some(&INFRASTRUCTURE),
        Topic::Environment => Some(&ENVIRONMENT),
        Topic::Economy => Some(&ECONOMY),
        Topic::Health => Some(&HEALTH),
        Topic::General => None,
    }
}

pub fn analyze_claim_structure(format: &'static FactCheckFormat) -> ClaimStructure {
    ClaimStructure {
        topic: format.title,
        required_analysis: format.analysis.sections,
        key_metrics: format.analysis.key_metrics,
        verification_steps: format.verification_steps,
        expected_sources: format.required_sources,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Infrastructure
// ────────────────────────────────────────────────────────────────────────────

static INFRASTRUCTURE: FactCheckFormat = FactCheckFormat {
    topic: Topic::Infrastructure,
    title: "Infrastructure Development",
    // Plurals are listed on purpose: "roads" also matches "road", so one
    // plural mention counts as two hits and meets MATCH_THRESHOLD alone.
    keywords: &[
        "road",
        "roads",
        "highway",
        "highways",
        "bridge",
        "bridges",
        "construction",
        "infrastructure",
        "transport",
        "connectivity",
    ],
    analysis: AnalysisStructure {
        sections: &[
            AnalysisSection {
                title: "Current Infrastructure Status",
                kind: SectionKind::Statistical,
                required_data: &[
                    "total_length",
                    "quality_metrics",
                    "international_rankings",
                    "budget_allocation",
                ],
                depth: AnalysisDepth::Comprehensive,
            },
            AnalysisSection {
                title: "Government Policy & Investment",
                kind: SectionKind::Policy,
                required_data: &["policy_documents", "budget_allocation", "timeline", "targets"],
                depth: AnalysisDepth::Detailed,
            },
            AnalysisSection {
                title: "International Comparison",
                kind: SectionKind::Comparative,
                required_data: &["global_rankings", "peer_countries", "standards_comparison"],
                depth: AnalysisDepth::Detailed,
            },
            AnalysisSection {
                title: "Historical Progress",
                kind: SectionKind::Historical,
                required_data: &["past_performance", "growth_trends", "milestone_achievements"],
                depth: AnalysisDepth::Basic,
            },
        ],
        key_metrics: &[
            "length_km",
            "quality_index",
            "safety_rating",
            "construction_rate",
            "budget_utilization",
        ],
        comparison_points: &[
            "international_standards",
            "peer_countries",
            "historical_performance",
        ],
        contextual_factors: &[
            "economic_impact",
            "regional_variations",
            "maintenance_challenges",
        ],
    },
    required_sources: &[
        SourceRequirement {
            category: SourceCategory::Government,
            priority: SourcePriority::Essential,
            specific_sources: &["MORTH", "NHAI", "Ministry_Statistics"],
            data_points: &["official_statistics", "policy_documents", "progress_reports"],
        },
        SourceRequirement {
            category: SourceCategory::International,
            priority: SourcePriority::Important,
            specific_sources: &["World_Economic_Forum", "World_Bank", "OECD"],
            data_points: &["global_rankings", "comparative_studies", "best_practices"],
        },
        SourceRequirement {
            category: SourceCategory::Academic,
            priority: SourcePriority::Supplementary,
            specific_sources: &["IIT_studies", "research_papers", "technical_reports"],
            data_points: &["technical_analysis", "impact_studies", "recommendations"],
        },
    ],
    verification_steps: &[
        VerificationStep {
            step: "Verify official statistics",
            method: VerificationMethod::CrossReference,
            sources: &["MORTH_reports", "NHAI_data", "Parliamentary_records"],
            expected_outcome: "Consistent official data across sources",
        },
        VerificationStep {
            step: "Compare international rankings",
            method: VerificationMethod::StatisticalAnalysis,
            sources: &["WEF_reports", "World_Bank_data", "OECD_statistics"],
            expected_outcome: "Validated global position",
        },
        VerificationStep {
            step: "Expert opinion validation",
            method: VerificationMethod::ExpertValidation,
            sources: &["IIT_experts", "industry_professionals", "policy_analysts"],
            expected_outcome: "Professional consensus on claims",
        },
    ],
    output: OutputTemplate {
        verdict_criteria: VerdictCriteria {
            true_conditions: &[
                "Official data confirms claim",
                "Multiple sources agree",
                "Recent verified statistics",
            ],
            false_conditions: &[
                "Official data contradicts claim",
                "International rankings show otherwise",
                "Expert consensus disagrees",
            ],
            partially_true_conditions: &[
                "Some aspects true but incomplete",
                "Regional variations exist",
                "Time-specific accuracy",
            ],
            misleading_conditions: &[
                "Selective data presentation",
                "Outdated information",
                "Context manipulation",
            ],
            unverified_conditions: &[
                "Insufficient official data",
                "Conflicting sources",
                "Pending verification",
            ],
        },
        summary_structure: &[
            "Claim assessment with verdict",
            "Key statistical findings",
            "Government policy context",
            "International comparison",
            "Expert consensus",
        ],
        detailed_sections: &[
            "Statistical Analysis",
            "Policy Framework",
            "International Benchmarking",
            "Historical Context",
            "Expert Opinions",
            "Future Projections",
        ],
        key_points_format: &[
            "Official statistics with sources",
            "International ranking position",
            "Government investment figures",
            "Quality metrics comparison",
            "Expert assessment summary",
        ],
        source_presentation:
            "Government sources first, then international, then academic with credibility scores",
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Environment
// ────────────────────────────────────────────────────────────────────────────

static ENVIRONMENT: FactCheckFormat = FactCheckFormat {
    topic: Topic::Environment,
    title: "Environmental Issues",
    keywords: &[
        "pollution",
        "clean",
        "environment",
        "river",
        "air quality",
        "climate",
        "green",
        "sustainable",
    ],
    analysis: AnalysisStructure {
        sections: &[
            AnalysisSection {
                title: "Environmental Data Analysis",
                kind: SectionKind::Statistical,
                required_data: &[
                    "pollution_levels",
                    "quality_indices",
                    "monitoring_data",
                    "trend_analysis",
                ],
                depth: AnalysisDepth::Comprehensive,
            },
            AnalysisSection {
                title: "Government Programs & Policies",
                kind: SectionKind::Policy,
                required_data: &[
                    "environmental_policies",
                    "budget_allocation",
                    "program_details",
                    "targets",
                ],
                depth: AnalysisDepth::Detailed,
            },
            AnalysisSection {
                title: "Scientific Assessment",
                kind: SectionKind::Expert,
                required_data: &[
                    "research_studies",
                    "expert_opinions",
                    "peer_review",
                    "methodology",
                ],
                depth: AnalysisDepth::Comprehensive,
            },
            AnalysisSection {
                title: "International Standards Comparison",
                kind: SectionKind::Comparative,
                required_data: &["WHO_standards", "international_benchmarks", "global_rankings"],
                depth: AnalysisDepth::Detailed,
            },
        ],
        key_metrics: &[
            "pollution_index",
            "quality_parameters",
            "improvement_rate",
            "compliance_percentage",
        ],
        comparison_points: &["WHO_standards", "international_cities", "historical_data"],
        contextual_factors: &[
            "seasonal_variations",
            "industrial_impact",
            "population_density",
            "geographic_factors",
        ],
    },
    required_sources: &[
        SourceRequirement {
            category: SourceCategory::Government,
            priority: SourcePriority::Essential,
            specific_sources: &["CPCB", "Ministry_Environment", "NITI_Aayog"],
            data_points: &["monitoring_data", "policy_documents", "progress_reports"],
        },
        SourceRequirement {
            category: SourceCategory::International,
            priority: SourcePriority::Essential,
            specific_sources: &["WHO", "UNEP", "World_Bank"],
            data_points: &["global_standards", "comparative_data", "best_practices"],
        },
        SourceRequirement {
            category: SourceCategory::Academic,
            priority: SourcePriority::Important,
            specific_sources: &["IIT_research", "environmental_studies", "peer_reviewed_papers"],
            data_points: &[
                "scientific_analysis",
                "methodology_validation",
                "impact_assessment",
            ],
        },
    ],
    verification_steps: &[
        VerificationStep {
            step: "Verify monitoring data",
            method: VerificationMethod::CrossReference,
            sources: &["CPCB_data", "state_boards", "real_time_monitoring"],
            expected_outcome: "Consistent environmental measurements",
        },
        VerificationStep {
            step: "Compare with international standards",
            method: VerificationMethod::StatisticalAnalysis,
            sources: &["WHO_guidelines", "international_benchmarks"],
            expected_outcome: "Validated compliance status",
        },
        VerificationStep {
            step: "Scientific methodology review",
            method: VerificationMethod::ExpertValidation,
            sources: &["environmental_scientists", "research_institutions"],
            expected_outcome: "Scientifically sound assessment",
        },
    ],
    output: OutputTemplate {
        verdict_criteria: VerdictCriteria {
            true_conditions: &[
                "Scientific data supports claim",
                "Multiple monitoring sources confirm",
                "Expert consensus exists",
            ],
            false_conditions: &[
                "Scientific data contradicts",
                "Monitoring shows otherwise",
                "Expert disagreement",
            ],
            partially_true_conditions: &[
                "Improvement shown but incomplete",
                "Regional variations",
                "Seasonal factors",
            ],
            misleading_conditions: &[
                "Cherry-picked data",
                "Outdated measurements",
                "Methodology issues",
            ],
            unverified_conditions: &[
                "Insufficient monitoring data",
                "Conflicting studies",
                "Ongoing research",
            ],
        },
        summary_structure: &[
            "Environmental claim assessment",
            "Scientific data analysis",
            "Government program evaluation",
            "International comparison",
            "Expert scientific consensus",
        ],
        detailed_sections: &[
            "Environmental Data Analysis",
            "Government Policy Assessment",
            "Scientific Methodology Review",
            "International Benchmarking",
            "Expert Opinions",
            "Long-term Trends",
        ],
        key_points_format: &[
            "Monitoring data with sources",
            "Government program progress",
            "International standard compliance",
            "Scientific consensus",
            "Trend analysis summary",
        ],
        source_presentation:
            "Scientific sources first, then government data, then international standards",
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Economy
// ────────────────────────────────────────────────────────────────────────────

static ECONOMY: FactCheckFormat = FactCheckFormat {
    topic: Topic::Economy,
    title: "Economic Claims",
    keywords: &[
        "gdp",
        "growth",
        "economy",
        "inflation",
        "employment",
        "budget",
        "investment",
        "trade",
    ],
    analysis: AnalysisStructure {
        sections: &[
            AnalysisSection {
                title: "Economic Data Verification",
                kind: SectionKind::Statistical,
                required_data: &[
                    "GDP_data",
                    "growth_rates",
                    "employment_statistics",
                    "inflation_data",
                ],
                depth: AnalysisDepth::Comprehensive,
            },
            AnalysisSection {
                title: "Government Economic Policy",
                kind: SectionKind::Policy,
                required_data: &["budget_documents", "policy_announcements", "economic_surveys"],
                depth: AnalysisDepth::Detailed,
            },
            AnalysisSection {
                title: "International Economic Comparison",
                kind: SectionKind::Comparative,
                required_data: &[
                    "global_rankings",
                    "peer_economy_comparison",
                    "international_forecasts",
                ],
                depth: AnalysisDepth::Detailed,
            },
            AnalysisSection {
                title: "Expert Economic Analysis",
                kind: SectionKind::Expert,
                required_data: &[
                    "economist_opinions",
                    "institutional_forecasts",
                    "research_analysis",
                ],
                depth: AnalysisDepth::Comprehensive,
            },
        ],
        key_metrics: &[
            "GDP_growth_rate",
            "inflation_rate",
            "employment_rate",
            "investment_levels",
            "trade_balance",
        ],
        comparison_points: &[
            "international_peers",
            "historical_performance",
            "global_averages",
        ],
        contextual_factors: &[
            "global_economic_conditions",
            "policy_impact",
            "structural_factors",
        ],
    },
    required_sources: &[
        SourceRequirement {
            category: SourceCategory::Government,
            priority: SourcePriority::Essential,
            specific_sources: &["RBI", "Ministry_Finance", "NITI_Aayog", "NSO"],
            data_points: &["official_statistics", "policy_documents", "economic_surveys"],
        },
        SourceRequirement {
            category: SourceCategory::International,
            priority: SourcePriority::Essential,
            specific_sources: &["IMF", "World_Bank", "OECD", "ADB"],
            data_points: &["global_forecasts", "comparative_data", "economic_assessments"],
        },
        SourceRequirement {
            category: SourceCategory::Academic,
            priority: SourcePriority::Important,
            specific_sources: &["economic_research", "think_tanks", "university_studies"],
            data_points: &[
                "research_analysis",
                "methodology_review",
                "policy_impact_studies",
            ],
        },
    ],
    verification_steps: &[
        VerificationStep {
            step: "Verify official economic data",
            method: VerificationMethod::CrossReference,
            sources: &["RBI_data", "NSO_statistics", "Ministry_reports"],
            expected_outcome: "Consistent official economic indicators",
        },
        VerificationStep {
            step: "Compare international assessments",
            method: VerificationMethod::StatisticalAnalysis,
            sources: &["IMF_data", "World_Bank_reports", "OECD_statistics"],
            expected_outcome: "Validated international perspective",
        },
        VerificationStep {
            step: "Expert economic validation",
            method: VerificationMethod::ExpertValidation,
            sources: &["economists", "research_institutions", "policy_analysts"],
            expected_outcome: "Professional economic consensus",
        },
    ],
    output: OutputTemplate {
        verdict_criteria: VerdictCriteria {
            true_conditions: &[
                "Official data confirms",
                "International sources agree",
                "Expert consensus supports",
            ],
            false_conditions: &[
                "Official data contradicts",
                "International assessments differ",
                "Expert disagreement",
            ],
            partially_true_conditions: &[
                "Contextual accuracy",
                "Time-specific validity",
                "Methodological variations",
            ],
            misleading_conditions: &[
                "Selective data use",
                "Outdated figures",
                "Context manipulation",
            ],
            unverified_conditions: &[
                "Preliminary data",
                "Conflicting sources",
                "Insufficient information",
            ],
        },
        summary_structure: &[
            "Economic claim verification",
            "Official data analysis",
            "International perspective",
            "Expert assessment",
            "Policy context",
        ],
        detailed_sections: &[
            "Economic Data Analysis",
            "Government Policy Context",
            "International Comparison",
            "Expert Economic Opinion",
            "Historical Trends",
            "Future Projections",
        ],
        key_points_format: &[
            "Official statistics with verification",
            "International ranking/comparison",
            "Government policy impact",
            "Expert consensus summary",
            "Trend analysis",
        ],
        source_presentation:
            "Official economic data first, then international institutions, then expert analysis",
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Health
// ────────────────────────────────────────────────────────────────────────────

static HEALTH: FactCheckFormat = FactCheckFormat {
    topic: Topic::Health,
    title: "Health & Medical Claims",
    keywords: &[
        "health",
        "medical",
        "disease",
        "treatment",
        "vaccine",
        "hospital",
        "doctor",
        "medicine",
    ],
    analysis: AnalysisStructure {
        sections: &[
            AnalysisSection {
                title: "Medical Evidence Review",
                kind: SectionKind::Expert,
                required_data: &[
                    "clinical_studies",
                    "peer_review",
                    "medical_consensus",
                    "evidence_quality",
                ],
                depth: AnalysisDepth::Comprehensive,
            },
            AnalysisSection {
                title: "Government Health Policy",
                kind: SectionKind::Policy,
                required_data: &["health_policies", "official_guidelines", "program_details"],
                depth: AnalysisDepth::Detailed,
            },
            AnalysisSection {
                title: "International Health Standards",
                kind: SectionKind::Comparative,
                required_data: &[
                    "WHO_guidelines",
                    "international_protocols",
                    "global_best_practices",
                ],
                depth: AnalysisDepth::Comprehensive,
            },
            AnalysisSection {
                title: "Statistical Health Data",
                kind: SectionKind::Statistical,
                required_data: &[
                    "health_statistics",
                    "epidemiological_data",
                    "outcome_measures",
                ],
                depth: AnalysisDepth::Detailed,
            },
        ],
        key_metrics: &[
            "efficacy_rates",
            "safety_profiles",
            "statistical_significance",
            "population_impact",
        ],
        comparison_points: &[
            "international_standards",
            "peer_reviewed_evidence",
            "clinical_guidelines",
        ],
        contextual_factors: &[
            "population_demographics",
            "healthcare_infrastructure",
            "cultural_factors",
        ],
    },
    required_sources: &[
        SourceRequirement {
            category: SourceCategory::Government,
            priority: SourcePriority::Essential,
            specific_sources: &["Ministry_Health", "ICMR", "AIIMS", "health_departments"],
            data_points: &["official_guidelines", "health_statistics", "policy_documents"],
        },
        SourceRequirement {
            category: SourceCategory::International,
            priority: SourcePriority::Essential,
            specific_sources: &[
                "WHO",
                "CDC",
                "medical_journals",
                "international_health_organizations",
            ],
            data_points: &["global_guidelines", "research_evidence", "best_practices"],
        },
        SourceRequirement {
            category: SourceCategory::Academic,
            priority: SourcePriority::Essential,
            specific_sources: &[
                "peer_reviewed_journals",
                "medical_institutions",
                "research_studies",
            ],
            data_points: &["clinical_evidence", "research_methodology", "expert_opinions"],
        },
    ],
    verification_steps: &[
        VerificationStep {
            step: "Review medical evidence",
            method: VerificationMethod::ExpertValidation,
            sources: &["peer_reviewed_studies", "medical_experts", "clinical_trials"],
            expected_outcome: "Evidence-based medical consensus",
        },
        VerificationStep {
            step: "Verify official health data",
            method: VerificationMethod::CrossReference,
            sources: &["health_ministry_data", "WHO_statistics", "medical_institutions"],
            expected_outcome: "Consistent health information",
        },
        VerificationStep {
            step: "Compare international standards",
            method: VerificationMethod::StatisticalAnalysis,
            sources: &["WHO_guidelines", "international_protocols"],
            expected_outcome: "Validated against global standards",
        },
    ],
    output: OutputTemplate {
        verdict_criteria: VerdictCriteria {
            true_conditions: &[
                "Strong medical evidence",
                "Official health confirmation",
                "International consensus",
            ],
            false_conditions: &[
                "Medical evidence contradicts",
                "Official health denial",
                "Scientific disagreement",
            ],
            partially_true_conditions: &[
                "Limited evidence",
                "Conditional effectiveness",
                "Population-specific",
            ],
            misleading_conditions: &[
                "Misrepresented studies",
                "Outdated medical info",
                "Context manipulation",
            ],
            unverified_conditions: &[
                "Insufficient studies",
                "Ongoing research",
                "Conflicting evidence",
            ],
        },
        summary_structure: &[
            "Medical claim assessment",
            "Scientific evidence review",
            "Official health position",
            "International standards",
            "Expert medical consensus",
        ],
        detailed_sections: &[
            "Medical Evidence Analysis",
            "Government Health Policy",
            "International Guidelines",
            "Statistical Data Review",
            "Expert Medical Opinions",
            "Safety and Efficacy",
        ],
        key_points_format: &[
            "Peer-reviewed evidence summary",
            "Official health guidelines",
            "International standard compliance",
            "Statistical significance",
            "Medical expert consensus",
        ],
        source_presentation:
            "Peer-reviewed medical sources first, then official health data, then international guidelines",
    },
};
