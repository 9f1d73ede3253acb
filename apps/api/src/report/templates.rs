//! Templated narrative report, used when the LLM is unavailable.
//!
//! Only the straight-talk intro, the snapshot, the project tracker and the
//! related claims vary with the query; the remaining sections are fixed text.

use crate::report::models::{
    ClaimVsReality, ComprehensiveReport, LinkType, PromiseCheck, QueryVerdict, SnapshotRow,
    TrackedProject, UserQueryResult, VerifiedLink,
};

pub const TEMPLATE_CONFIDENCE: u8 = 75;

const EXPLANATION: &str = "This claim requires comprehensive analysis with multiple data points.";

const CLAIM_VS_REALITY: &str = "The pattern is predictable: grand announcements, massive budget \
    allocations, photo-ops with celebrities, and then... silence. Years later, RTI activists dig up \
    the truth while politicians have moved on to the next shiny promise. The disconnect between \
    official statements and ground reality has become so normalized that we've stopped expecting \
    actual delivery.";

const GROUND_REALITY: &str = "On the ground, it's the same old story with a digital coat of paint. \
    Contractors are still the same people who built roads that wash away in the first rain. The \
    'smart' systems are often just expensive ways to do the same inefficient things. Meanwhile, \
    basic infrastructure like reliable power, clean water, and functional sewage systems remain \
    pipe dreams in most cities. The real winners are consultants who charge crores for PowerPoint \
    presentations about 'digital transformation.'";

const STUPID_PERFORMATIVE: &str = "The performative theater is spectacular: LED screens showing \
    fake real-time data, apps that don't work, and 'command centers' that look impressive but \
    control nothing. Politicians love cutting ribbons for projects that exist only on paper. The \
    budget for PR and marketing often exceeds the actual implementation budget. It's like building \
    a movie set and calling it a city - looks great in photos, completely useless for actual \
    residents.";

const REAL_PERSPECTIVE: &str = "Countries like Estonia digitized their entire government with a \
    fraction of India's budget and actually delivered results. South Korea built smart cities that \
    work because they focused on solving real problems, not creating photo opportunities. The \
    difference? They held people accountable for results, not just announcements. In India, \
    failure is rewarded with promotions and bigger budgets for the next 'revolutionary' scheme.";

const SOLUTION: &str = "Here's what actually works: Start small, prove it works, then scale. Stop \
    the grand announcements and focus on fixing one thing properly. Implement transparent tracking \
    systems that citizens can access. Fire people who don't deliver instead of transferring them. \
    Learn from countries that actually succeeded instead of reinventing the wheel badly. Most \
    importantly, stop treating governance like a marketing campaign and start treating it like \
    engineering - where results matter more than rhetoric.";

const RELATED_TOPICS: &[&str] = &[
    "Where did the allocated budget actually go?",
    "Which contractors got the major deals?",
    "What happened to the promised timeline?",
    "How does this compare to similar projects globally?",
    "What are the hidden costs taxpayers are bearing?",
];

pub fn render(query: &str) -> UserQueryResult {
    let lower = query.to_lowercase();

    let project_tracker = ["project", "infrastructure", "development"]
        .iter()
        .any(|k| lower.contains(k))
        .then(project_tracker);

    UserQueryResult {
        query: query.to_string(),
        verdict: QueryVerdict::Mixed,
        confidence: TEMPLATE_CONFIDENCE,
        explanation: EXPLANATION.to_string(),
        sources: to_strings(&["Government Data", "Official Reports", "Ground Verification"]),
        related_claims: related_claims(&lower),
        comprehensive: Some(ComprehensiveReport {
            straight_talk: straight_talk(&lower).to_string(),
            snapshot: snapshot(&lower),
            claim_vs_reality: claim_vs_reality(),
            ground_reality: GROUND_REALITY.to_string(),
            stupid_performative: STUPID_PERFORMATIVE.to_string(),
            real_perspective: REAL_PERSPECTIVE.to_string(),
            project_tracker,
            future_investments: None,
            solution: SOLUTION.to_string(),
            verified_links: verified_links(),
            related_topics: to_strings(RELATED_TOPICS),
        }),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn straight_talk(lower: &str) -> &'static str {
    if lower.contains("smart city") {
        "Another 'Smart City' promise? Let's cut through the marketing BS. Most Indian cities \
        can't even manage basic sewage, but sure, let's talk about IoT sensors while people wade \
        through flooded streets during monsoons."
    } else if lower.contains("digital india") {
        "Digital India sounds fancy until you realize half the country still doesn't have \
        reliable electricity. But hey, at least the government websites crash consistently \
        across all devices!"
    } else if lower.contains("clean") {
        "Clean India? The only thing getting cleaned here is the public treasury. Rivers are \
        still sewers, air quality is apocalyptic, but the photo-ops look great on social media."
    } else {
        "Time for some brutal honesty about this claim. The gap between promises and reality in \
        India could fit the entire Pacific Ocean."
    }
}

fn row(metric: &str, claim: &str, reality: &str, implication: &str) -> SnapshotRow {
    SnapshotRow {
        metric: metric.to_string(),
        claim: claim.to_string(),
        reality: reality.to_string(),
        implication: implication.to_string(),
    }
}

fn snapshot(lower: &str) -> Vec<SnapshotRow> {
    if lower.contains("smart city") {
        return vec![
            row(
                "Smart Cities Completed",
                "100 Smart Cities by 2022",
                "12 cities show partial smart features",
                "88% failure rate in delivery",
            ),
            row(
                "Budget Utilization",
                "₹2.05 lakh crore allocated",
                "₹45,000 crore actually spent",
                "78% funds remain unused or diverted",
            ),
            row(
                "Digital Infrastructure",
                "Complete IoT integration",
                "Basic WiFi in 15% areas",
                "Technology adoption failed",
            ),
            row(
                "Citizen Services",
                "All services digitized",
                "Same old queues and corruption",
                "No real improvement in governance",
            ),
            row(
                "Waste Management",
                "100% scientific disposal",
                "Open dumping continues in 85% cities",
                "Environmental disaster continues",
            ),
        ];
    }
    vec![
        row(
            "Promise Delivery",
            "Comprehensive implementation",
            "Partial or failed execution",
            "Public trust eroded",
        ),
        row(
            "Budget Efficiency",
            "Optimal resource allocation",
            "Significant wastage and delays",
            "Taxpayer money misused",
        ),
        row(
            "Ground Impact",
            "Transformative change",
            "Minimal visible improvement",
            "Status quo maintained",
        ),
    ]
}

fn claim_vs_reality() -> ClaimVsReality {
    let check = |promise: &str, reality: &str, source: &str| PromiseCheck {
        promise: promise.to_string(),
        reality: reality.to_string(),
        source: source.to_string(),
    };
    ClaimVsReality {
        content: CLAIM_VS_REALITY.to_string(),
        claims: vec![
            check(
                "Complete digital transformation within 5 years",
                "Basic digitization still pending after 8 years",
                "CAG Report 2024",
            ),
            check(
                "World-class infrastructure comparable to Singapore",
                "Infrastructure ranks below Bangladesh in global indices",
                "World Bank Infrastructure Report",
            ),
            check(
                "Zero corruption with transparent processes",
                "Corruption shifted from offline to online platforms",
                "Transparency International India",
            ),
        ],
    }
}

fn verified_links() -> Vec<VerifiedLink> {
    let link = |title: &str, url: &str, link_type| VerifiedLink {
        title: title.to_string(),
        url: url.to_string(),
        link_type,
    };
    vec![
        link(
            "CAG Performance Audit Report",
            "https://cag.gov.in/en/audit-report",
            LinkType::Audit,
        ),
        link(
            "Ministry of Electronics & IT Official Data",
            "https://meity.gov.in",
            LinkType::Government,
        ),
        link(
            "IndiaSpend Data Analysis",
            "https://indiaspend.com",
            LinkType::Journalism,
        ),
    ]
}

fn project_tracker() -> Vec<TrackedProject> {
    let project = |year: &str, name: &str, kind: &str, status: &str, cost: &str, outcome: &str| {
        TrackedProject {
            year: year.to_string(),
            project_name: name.to_string(),
            project_type: kind.to_string(),
            status: status.to_string(),
            cost: cost.to_string(),
            outcome_vs_promise: outcome.to_string(),
        }
    };
    vec![
        project(
            "2015",
            "Smart City Mission Phase 1",
            "Urban Development",
            "Incomplete",
            "₹48,000 crores",
            "Promised smart infrastructure, delivered basic WiFi",
        ),
        project(
            "2018",
            "Digital Infrastructure Upgrade",
            "Technology",
            "Partially Complete",
            "₹25,000 crores",
            "Promised seamless services, still requires physical visits",
        ),
        project(
            "2020",
            "Integrated Command Center",
            "Governance",
            "Announced",
            "₹15,000 crores",
            "Promised real-time monitoring, center exists but systems don't work",
        ),
    ]
}

fn related_claims(lower: &str) -> Vec<String> {
    let claims: &[&str] = if lower.contains("climate") {
        &["Global warming trends", "Carbon emission levels", "Sea level rise data"]
    } else if lower.contains("energy") {
        &["Solar power capacity", "Wind energy growth", "Battery technology advances"]
    } else if lower.contains("health") || lower.contains("brain") {
        &["Human metabolism facts", "Organ energy consumption", "Neurological research"]
    } else {
        &["Related fact-checks available", "Similar claims analyzed"]
    };
    to_strings(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_shape() {
        let result = render("Is the new policy working?");
        assert_eq!(result.verdict, QueryVerdict::Mixed);
        assert_eq!(result.confidence, 75);
        assert_eq!(result.sources.len(), 3);
        assert_eq!(
            result.related_claims,
            vec!["Related fact-checks available", "Similar claims analyzed"]
        );

        let report = result.comprehensive.unwrap();
        assert!(report.straight_talk.starts_with("Time for some brutal honesty"));
        assert_eq!(report.snapshot.len(), 3);
        assert_eq!(report.claim_vs_reality.claims.len(), 3);
        assert_eq!(report.verified_links.len(), 3);
        assert_eq!(report.related_topics.len(), 5);
        assert!(report.project_tracker.is_none());
        assert!(report.future_investments.is_none());
    }

    #[test]
    fn test_smart_city_query() {
        let report = render("Is the Smart City mission a success?")
            .comprehensive
            .unwrap();
        assert!(report.straight_talk.starts_with("Another 'Smart City' promise?"));
        assert_eq!(report.snapshot.len(), 5);
        assert_eq!(report.snapshot[0].metric, "Smart Cities Completed");
    }

    #[test]
    fn test_straight_talk_variants() {
        let talk = |q: &str| render(q).comprehensive.unwrap().straight_talk;
        assert!(talk("Digital India reach").starts_with("Digital India sounds fancy"));
        assert!(talk("Is the river clean now").starts_with("Clean India?"));
    }

    #[test]
    fn test_project_tracker_keywords() {
        for q in ["metro project status", "Infrastructure spending", "rural development"] {
            let tracker = render(q).comprehensive.unwrap().project_tracker.unwrap();
            assert_eq!(tracker.len(), 3);
        }
    }

    #[test]
    fn test_related_claims_keywords() {
        assert_eq!(render("climate change").related_claims[0], "Global warming trends");
        assert_eq!(render("solar energy").related_claims[0], "Solar power capacity");
        assert_eq!(render("brain power").related_claims[0], "Human metabolism facts");
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(render("development")).unwrap();
        assert_eq!(json["verdict"], "mixed");
        assert!(json["relatedClaims"].is_array());
        let report = &json["comprehensive"];
        assert!(report["straightTalk"].is_string());
        assert!(report["claimVsReality"]["claims"].is_array());
        assert_eq!(report["verifiedLinks"][0]["type"], "audit");
        assert_eq!(report["projectTracker"][0]["type"], "Urban Development");
        assert!(report["projectTracker"][0]["outcomeVsPromise"].is_string());
        assert!(report.get("futureInvestments").is_none());
    }
}
