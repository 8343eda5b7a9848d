//! Typed schema of the market-research intake document ("ChatState").
//!
//! Every field is optional: absent scalars and objects become `None`, absent
//! lists become empty. Fields not listed here are ignored when reading.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChatState {
    pub stage: Option<String>,
    pub original_request: Option<String>,
    pub questions: Vec<String>,
    pub answers: Vec<String>,

    pub search_plan: Option<String>,
    pub search_results: Vec<Value>,
    pub intro_methodology_plan: Option<String>,
    pub intro_methodology_results: Vec<Value>,
    pub industry_market_plan: Option<String>,
    pub industry_market_results: Vec<Value>,
    pub competitor_plan: Option<String>,
    pub competitor_results: Vec<Value>,
    pub comparative_analysis_plan: Option<String>,
    pub comparative_analysis_results: Vec<Value>,
    pub strategic_analysis_plan: Option<String>,
    pub strategic_analysis_results: Vec<Value>,
    pub recommendations_action_plan_chapter: Option<String>,
    pub gaps_opportunities_plan: Option<String>,
    pub gaps_opportunities_results: Vec<Value>,
    pub marketing_strategic_plan: Option<String>,
    pub marketing_strategic_results: Vec<Value>,
    pub marketing_strategic_chapter: Option<String>,
    pub emerging_trends_future_outlook_plan: Option<String>,
    pub emerging_trends_future_outlook_results: Vec<Value>,
    pub emerging_trends_future_outlook_chapter: Option<String>,
    pub appendix_plan: Option<String>,
    pub appendix_results: Vec<Value>,
    pub appendix_chapter: Option<String>,
    pub discovered_competitors: Vec<String>,

    pub language: Option<String>,
    pub business: Option<Business>,
    pub industry: Option<Industry>,
    pub geography: Option<Geography>,
    pub target_audience: Option<TargetAudience>,
    pub customer_pain_points: Vec<String>,
    pub competitor_analysis_goals: Option<CompetitorAnalysisGoals>,
    pub kpis_metrics: Vec<String>,
    pub competitors: Option<Competitors>,
    pub unique_value_proposition: Option<String>,
    pub marketing_strategy: Option<MarketingStrategy>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Business {
    pub name: Option<String>,
    pub topic_description: Option<String>,
    pub products_services: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Industry {
    pub primary: Option<String>,
    pub niche: Option<String>,
    pub secondary_industries: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Geography {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub market_scope: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TargetAudience {
    pub demographics: Option<String>,
    pub psychographics: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CompetitorAnalysisGoals {
    pub objectives: Vec<String>,
    pub details: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Competitors {
    pub direct: Vec<String>,
    pub indirect: Vec<String>,
    pub aspirational: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MarketingStrategy {
    pub channels: Option<MarketingChannels>,
    pub what_is_working: Option<String>,
    pub what_is_not_working: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MarketingChannels {
    pub seo: Option<bool>,
    pub social_media: Option<bool>,
    pub paid_ads: Option<bool>,
    pub email_marketing: Option<bool>,
    pub other: Option<String>,
}

impl ChatState {
    pub fn business_name(&self) -> Option<&str> {
        self.business.as_ref()?.name.as_deref()
    }

    /// Number of entries under `competitors.direct`, zero when absent.
    pub fn direct_competitor_count(&self) -> usize {
        self.competitors.as_ref().map_or(0, |c| c.direct.len())
    }
}
