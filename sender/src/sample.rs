use router_client::chatstate::{
    Business, ChatState, CompetitorAnalysisGoals, Competitors, Geography, Industry,
    MarketingChannels, MarketingStrategy, TargetAudience,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// A fully populated intake document for a fictitious fitness app.
pub fn fitness_app() -> ChatState {
    ChatState {
        stage: text("complete"),
        original_request: text(
            "Need comprehensive market analysis for expanding our AI-powered fitness app",
        ),
        questions: strings(&[
            "What is your primary target market?",
            "Who are your main competitors?",
            "What marketing channels are you currently using?",
            "What are your key performance indicators?",
        ]),
        answers: strings(&[
            "Health-conscious millennials aged 25-40",
            "MyFitnessPal, Strava, and Nike Training Club",
            "Social media, Google Ads, and influencer partnerships",
            "User acquisition cost, monthly active users, retention rate",
        ]),
        search_plan: text("Comprehensive market research for fitness app industry"),
        intro_methodology_plan: text("Industry overview and research methodology"),
        industry_market_plan: text("Fitness app market analysis"),
        competitor_plan: text("Competitive landscape analysis"),
        comparative_analysis_plan: text("Feature and pricing comparison"),
        strategic_analysis_plan: text("Strategic recommendations and action plan"),
        recommendations_action_plan_chapter: text("Strategic recommendations chapter"),
        gaps_opportunities_plan: text("Market gaps and opportunities identification"),
        marketing_strategic_plan: text("Marketing strategy development"),
        marketing_strategic_chapter: text("Marketing strategy chapter"),
        emerging_trends_future_outlook_plan: text("Future trends analysis"),
        emerging_trends_future_outlook_chapter: text("Future outlook chapter"),
        appendix_plan: text("Supporting data and references"),
        appendix_chapter: text("Appendix chapter"),
        discovered_competitors: strings(&["Fitbit Premium", "Apple Fitness+", "Peloton Digital"]),

        language: text("English"),
        business: Some(Business {
            name: text("FitAI Pro"),
            topic_description: text("AI-powered personalized fitness and nutrition app"),
            products_services: text(
                "Mobile app with AI personal trainer, nutrition tracking, workout plans, and community features",
            ),
        }),
        industry: Some(Industry {
            primary: text("Health & Fitness Technology"),
            niche: text("AI-powered fitness applications"),
            secondary_industries: strings(&["Mobile App Development", "Health Tech", "Wellness"]),
        }),
        geography: Some(Geography {
            country: text("United States"),
            state: text("California"),
            city: text("San Francisco"),
            market_scope: text("North America with plans for global expansion"),
        }),
        target_audience: Some(TargetAudience {
            demographics: text(
                "Ages 25-45, household income $50k+, urban/suburban, college-educated",
            ),
            psychographics: text("Health-conscious, tech-savvy, goal-oriented, busy professionals"),
            kind: text("B2C - Individual consumers"),
        }),
        customer_pain_points: strings(&[
            "Lack of personalized workout plans",
            "Difficulty staying motivated",
            "Inconsistent nutrition tracking",
            "Generic fitness advice",
            "Expensive personal trainers",
        ]),
        competitor_analysis_goals: Some(CompetitorAnalysisGoals {
            objectives: strings(&[
                "Identify market positioning opportunities",
                "Analyze pricing strategies",
                "Understand feature gaps",
                "Assess marketing approaches",
            ]),
            details: text(
                "Comprehensive analysis to inform product development and go-to-market strategy",
            ),
        }),
        kpis_metrics: strings(&[
            "Monthly Active Users (MAU)",
            "Customer Acquisition Cost (CAC)",
            "Lifetime Value (LTV)",
            "Retention Rate",
            "App Store Rating",
            "Revenue per User",
        ]),
        competitors: Some(Competitors {
            direct: strings(&["MyFitnessPal", "Strava", "Nike Training Club", "Fitbit Premium"]),
            indirect: strings(&[
                "YouTube Fitness Channels",
                "Local Gyms",
                "Personal Trainers",
                "Nutrition Apps",
            ]),
            aspirational: strings(&["Peloton", "Apple Fitness+", "Mirror Home Gym"]),
        }),
        unique_value_proposition: text(
            "AI-powered personal trainer that adapts to your fitness level, schedule, and preferences, providing personalized workouts and nutrition plans at a fraction of the cost of traditional personal training",
        ),
        marketing_strategy: Some(MarketingStrategy {
            channels: Some(MarketingChannels {
                seo: Some(true),
                social_media: Some(true),
                paid_ads: Some(true),
                email_marketing: Some(true),
                other: text("Influencer partnerships, fitness blogger collaborations"),
            }),
            what_is_working: text(
                "Instagram and TikTok content marketing, Google Ads for fitness keywords, email nurture campaigns",
            ),
            what_is_not_working: text(
                "Facebook ads have low conversion rates, LinkedIn advertising not effective for B2C audience",
            ),
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_the_fields_the_summary_reads() {
        let state = fitness_app();
        assert_eq!(state.business_name(), Some("FitAI Pro"));
        assert_eq!(state.stage.as_deref(), Some("complete"));
        assert_eq!(state.language.as_deref(), Some("English"));
        assert_eq!(state.direct_competitor_count(), 4);
    }

    #[test]
    fn sample_serializes_result_lists_as_empty_arrays() {
        let value = serde_json::to_value(fitness_app()).unwrap();
        assert_eq!(value["search_results"], serde_json::json!([]));
        assert_eq!(value["target_audience"]["type"], "B2C - Individual consumers");
    }
}
