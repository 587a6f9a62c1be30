//! Government healthcare scheme eligibility matching
//!
//! A fixed, ordered set of independent eligibility rules is evaluated
//! against the profile and predicted cost; each rule that fires appends one
//! recommendation. Rules never remove or alter another rule's output. The
//! final list is stable-sorted by priority, so evaluation order is preserved
//! within each tier, and the universal rule guarantees a non-empty result.

use crate::profile::Observation;
use serde::{Deserialize, Serialize};

/// Cost below which the basic assistance program applies
const LOW_COST_THRESHOLD: f64 = 10000.0;

/// Cost above which the cost relief program applies
const HIGH_COST_THRESHOLD: f64 = 15000.0;

/// Age at which the senior program applies
const SENIOR_AGE: u32 = 55;

/// BMI above which the weight initiative applies
const OBESITY_THRESHOLD: f64 = 30.0;

/// Priority tier; sorts High before Medium before Low
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// One recommended scheme, generated per request and never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRecommendation {
    pub name: String,
    pub eligibility: String,
    pub coverage: String,
    pub benefits: Vec<String>,
    pub application: String,
    pub priority: Priority,
}

/// Evaluate all eligibility rules and rank the recommendations
pub fn match_schemes(observation: &Observation, predicted_cost: f64) -> Vec<SchemeRecommendation> {
    let mut recommendations = Vec::new();

    if predicted_cost < LOW_COST_THRESHOLD {
        recommendations.push(SchemeRecommendation {
            name: "Basic Healthcare Assistance Program".to_string(),
            eligibility: "All residents with annual healthcare costs below ₹10,000".to_string(),
            coverage: "Up to ₹5,000 annual coverage for basic healthcare needs".to_string(),
            benefits: strings(&[
                "Primary care visits covered",
                "Preventive care and vaccinations",
                "Generic prescription medications",
                "Basic diagnostic tests",
            ]),
            application: "Apply online at your state healthcare marketplace".to_string(),
            priority: Priority::High,
        });
    }

    if predicted_cost > HIGH_COST_THRESHOLD {
        recommendations.push(SchemeRecommendation {
            name: "Healthcare Cost Relief Program".to_string(),
            eligibility: "Individuals with high medical costs (>₹15,000 annually)".to_string(),
            coverage: "Subsidized premiums and reduced out-of-pocket costs".to_string(),
            benefits: strings(&[
                "Premium subsidies up to 80%",
                "Reduced deductibles and copays",
                "Coverage for chronic condition management",
                "Prescription drug assistance",
            ]),
            application: "Contact your local health department or apply online".to_string(),
            priority: Priority::High,
        });
    }

    if observation.children >= 2 {
        recommendations.push(SchemeRecommendation {
            name: "Family Healthcare Support Program".to_string(),
            eligibility: "Families with 2 or more dependent children".to_string(),
            coverage: format!("Coverage for family of {} members", observation.children + 1),
            benefits: strings(&[
                "Pediatric care coverage",
                "Maternity and newborn care",
                "Family dental and vision",
                "Mental health services for children",
            ]),
            application: "Apply through state family services department".to_string(),
            priority: Priority::Medium,
        });
    }

    if observation.age >= SENIOR_AGE {
        recommendations.push(SchemeRecommendation {
            name: "Senior Health Assistance Program".to_string(),
            eligibility: "Adults aged 55 and older".to_string(),
            coverage: "Comprehensive coverage for age-related health needs".to_string(),
            benefits: strings(&[
                "Annual health screenings",
                "Chronic disease management",
                "Prescription drug coverage",
                "Home healthcare services",
                "Preventive care services",
            ]),
            application: "Enroll through senior services office or online portal".to_string(),
            priority: Priority::High,
        });
    }

    if observation.is_smoker() {
        recommendations.push(SchemeRecommendation {
            name: "Tobacco Cessation Support Program".to_string(),
            eligibility: "Current smokers seeking to quit".to_string(),
            coverage: "Free cessation support and medications".to_string(),
            benefits: strings(&[
                "Nicotine replacement therapy",
                "Counseling and support groups",
                "Prescription cessation medications",
                "Follow-up care for 12 months",
                "Can reduce insurance costs by 150-250%",
            ]),
            application: "Call the quitline or visit cessation program website".to_string(),
            priority: Priority::High,
        });
    }

    if observation.bmi > OBESITY_THRESHOLD {
        recommendations.push(SchemeRecommendation {
            name: "Healthy Weight Initiative".to_string(),
            eligibility: "Individuals with BMI > 30".to_string(),
            coverage: "Free weight management and nutrition services".to_string(),
            benefits: strings(&[
                "Nutritionist consultations",
                "Fitness program access",
                "Weight loss medications (if medically necessary)",
                "Diabetes prevention program",
                "Can reduce insurance premiums",
            ]),
            application: "Enroll through primary care physician or health department".to_string(),
            priority: Priority::Medium,
        });
    }

    if observation.region == "southeast" || observation.region == "southwest" {
        recommendations.push(SchemeRecommendation {
            name: "Regional Health Access Program".to_string(),
            eligibility: format!("Residents of {} region", observation.region),
            coverage: "Enhanced access to regional healthcare facilities".to_string(),
            benefits: strings(&[
                "Network of community health centers",
                "Telehealth services",
                "Mobile health clinics",
                "Sliding scale fees based on income",
            ]),
            application: "Contact regional health authority".to_string(),
            priority: Priority::Medium,
        });
    }

    // Universal rule: always fires, so the result is never empty
    recommendations.push(SchemeRecommendation {
        name: "National Preventive Care Initiative".to_string(),
        eligibility: "All residents".to_string(),
        coverage: "Free preventive care services".to_string(),
        benefits: strings(&[
            "Annual wellness exam",
            "Cancer screenings",
            "Immunizations",
            "Blood pressure and cholesterol checks",
            "Mental health screening",
        ]),
        application: "Available at all participating healthcare providers".to_string(),
        priority: Priority::Medium,
    });

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> Observation {
        Observation::new(30, "male", 25.0, 0, "no", "northeast")
    }

    fn is_priority_sorted(recs: &[SchemeRecommendation]) -> bool {
        recs.windows(2).all(|pair| pair[0].priority <= pair[1].priority)
    }

    #[test]
    fn test_universal_rule_always_fires() {
        let recs = match_schemes(&baseline(), 12000.0);
        assert!(!recs.is_empty());
        assert!(recs
            .iter()
            .any(|r| r.name == "National Preventive Care Initiative"));
    }

    #[test]
    fn test_sorted_by_priority() {
        let obs = Observation::new(60, "female", 32.0, 3, "yes", "southeast");
        let recs = match_schemes(&obs, 20000.0);

        // Everything fires for this profile except the low-cost rule
        assert_eq!(recs.len(), 7);
        assert!(is_priority_sorted(&recs));
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs.last().unwrap().priority, Priority::Medium);
    }

    #[test]
    fn test_stable_within_tier() {
        let obs = Observation::new(60, "male", 25.0, 0, "yes", "northeast");
        let recs = match_schemes(&obs, 20000.0);

        // High tier preserves evaluation order: cost relief, senior, smoker
        let high: Vec<&str> = recs
            .iter()
            .filter(|r| r.priority == Priority::High)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            high,
            [
                "Healthcare Cost Relief Program",
                "Senior Health Assistance Program",
                "Tobacco Cessation Support Program",
            ]
        );
    }

    #[test]
    fn test_cost_thresholds_are_exclusive() {
        // Exactly 10000 fires neither cost rule
        let recs = match_schemes(&baseline(), 10000.0);
        assert!(!recs.iter().any(|r| r.name == "Basic Healthcare Assistance Program"));
        assert!(!recs.iter().any(|r| r.name == "Healthcare Cost Relief Program"));

        let recs = match_schemes(&baseline(), 9999.99);
        assert!(recs.iter().any(|r| r.name == "Basic Healthcare Assistance Program"));
    }

    #[test]
    fn test_family_rule_interpolates_household_size() {
        let obs = Observation::new(35, "female", 24.0, 3, "no", "northwest");
        let recs = match_schemes(&obs, 8000.0);

        let family = recs
            .iter()
            .find(|r| r.name == "Family Healthcare Support Program")
            .expect("family rule should fire for 3 children");
        assert_eq!(family.coverage, "Coverage for family of 4 members");
    }

    #[test]
    fn test_regional_rule_membership() {
        for region in ["southeast", "southwest"] {
            let obs = Observation::new(30, "male", 25.0, 0, "no", region);
            let recs = match_schemes(&obs, 8000.0);
            assert!(recs.iter().any(|r| r.name == "Regional Health Access Program"));
        }

        for region in ["northeast", "northwest"] {
            let obs = Observation::new(30, "male", 25.0, 0, "no", region);
            let recs = match_schemes(&obs, 8000.0);
            assert!(!recs.iter().any(|r| r.name == "Regional Health Access Program"));
        }
    }
}
