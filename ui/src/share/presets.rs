//! Static message-template catalog for the share engine.
//!
//! Three axes pick a template: audience × platform × length. The catalog is
//! deliberately sparse — not every combination ships a template, and a miss
//! is a non-fatal "no message generated" that the share panel turns into an
//! empty editable field. Placeholder phrases live in parallel lists keyed by
//! sentiment context (`keyInsight`) or audience (`mainTrend`,
//! `actionableInsight`, falling back to the business lists).

use crate::core::model::Sentiment;

use super::{MessageLength, SharePlatform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    Business,
    Technical,
    Marketing,
    Academic,
    General,
    Executive,
}

impl Audience {
    pub fn all() -> [Audience; 6] {
        [
            Audience::Business,
            Audience::Technical,
            Audience::Marketing,
            Audience::Academic,
            Audience::General,
            Audience::Executive,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Audience::Business => "business",
            Audience::Technical => "technical",
            Audience::Marketing => "marketing",
            Audience::Academic => "academic",
            Audience::General => "general",
            Audience::Executive => "executive",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Audience::Business => "Business & Professional",
            Audience::Technical => "Technical & Developers",
            Audience::Marketing => "Marketing & Growth",
            Audience::Academic => "Academic & Research",
            Audience::General => "General Public",
            Audience::Executive => "Executive & Leadership",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Audience::Business => "💼",
            Audience::Technical => "⚡",
            Audience::Marketing => "📈",
            Audience::Academic => "🎓",
            Audience::General => "🌟",
            Audience::Executive => "👔",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Audience::Business => "Professional insights for business audiences",
            Audience::Technical => "Technical analysis for developer communities",
            Audience::Marketing => "Marketing insights and growth metrics",
            Audience::Academic => "Research-focused content for academic audiences",
            Audience::General => "Accessible insights for general audiences",
            Audience::Executive => "Strategic insights for leadership teams",
        }
    }
}

/// Template lookup; `None` for combinations the catalog does not cover.
pub fn template(
    audience: Audience,
    platform: SharePlatform,
    length: MessageLength,
) -> Option<&'static str> {
    use Audience::*;
    use MessageLength::*;
    use SharePlatform::*;

    let template = match (audience, platform, length) {
        (Business, Twitter, Short) => "📊 Latest {chartType} analysis shows {keyInsight}. Data-driven decisions lead to better outcomes. #BusinessIntelligence #Analytics #SentimentX",
        (Business, Twitter, Medium) => "📊 Our {chartType} analysis reveals {keyInsight}. Key takeaway: {mainTrend}. This data helps inform strategic business decisions. #DataDriven #BusinessAnalytics #SentimentX",
        (Business, Twitter, Long) => "📊 Deep dive into our {chartType} analysis:\n\n✅ {keyInsight}\n📈 {mainTrend}\n💡 {actionableInsight}\n\nData-driven insights for smarter business decisions. #BusinessIntelligence #Analytics #SentimentX",
        (Business, LinkedIn, Short) => "Sharing insights from our latest {chartType} analysis. {keyInsight} — continuous monitoring keeps business strategy honest. #BusinessIntelligence #DataAnalytics",
        (Business, LinkedIn, Medium) => "📊 Key findings from our {chartType} analysis:\n\n{keyInsight}\n\nThis reinforces the value of {mainTrend} in driving business outcomes. #BusinessStrategy #DataDriven #Analytics",
        (Business, LinkedIn, Long) => "📊 Strategic Insights: {chartType} analysis\n\n🔍 Key finding: {keyInsight}\n📈 Trend: {mainTrend}\n💼 Business impact: {actionableInsight}\n\nLeveraging analytics for strategic decision-making is no longer optional. What trends are you seeing in your industry?\n\n#BusinessIntelligence #DataAnalytics #Leadership",
        (Business, Facebook, Short) => "📊 Check out these insights from our {chartType} analysis! {keyInsight} 💡",
        (Business, Facebook, Medium) => "📊 Exciting findings from our latest {chartType} analysis!\n\n{keyInsight}\n\nThe data shows {mainTrend}. Love seeing data tell a story! 📈",
        (Business, Facebook, Long) => "📊 Data story time! 📈\n\nJust completed a fascinating {chartType} analysis:\n\n✨ {keyInsight}\n📊 {mainTrend}\n💡 {actionableInsight}\n\nWhat insights have surprised you lately?\n\n#DataAnalytics #BusinessInsights",

        (Technical, Twitter, Short) => "⚡ {chartType} implementation showing {keyInsight}. Built on an async analytics pipeline. #DataEngineering #Analytics #SentimentX",
        (Technical, Twitter, Medium) => "⚡ Technical deep-dive: {chartType} analysis reveals {keyInsight}. Architecture note: {mainTrend}. #DataEngineering #Analytics #SentimentX",
        (Technical, Twitter, Long) => "⚡ Technical analysis: {chartType}\n\n🔧 Implementation: {keyInsight}\n📊 Performance: {mainTrend}\n⚙️ Optimization: {actionableInsight}\n\n#DataEngineering #Analytics #Performance",
        (Technical, LinkedIn, Short) => "⚡ Technical implementation of {chartType} analysis yielding {keyInsight}. Interesting challenges in visualization optimization. #DataEngineering",
        (Technical, LinkedIn, Medium) => "⚡ Technical deep dive: {chartType} analysis\n\n🔧 Implementation: {keyInsight}\n📊 Architecture: {mainTrend}\n\nThe solution balances real-time processing with data accuracy.\n\n#DataEngineering #Analytics",
        (Technical, LinkedIn, Long) => "⚡ Technical case study: {chartType} analytics\n\n🏗️ Findings:\n• {keyInsight}\n• {mainTrend}\n• {actionableInsight}\n\nThe implementation favours scalable architecture over clever one-offs. Happy to discuss the approach.\n\n#DataEngineering #TechArchitecture #Performance",

        (Marketing, Twitter, Short) => "📈 {chartType} shows {keyInsight}! This trend is reshaping audience engagement. #MarketingAnalytics #DataDriven",
        (Marketing, Twitter, Medium) => "📈 Marketing insight: {chartType} analysis reveals {keyInsight}. Key trend: {mainTrend}. Game-changing for campaign optimization! #MarketingAnalytics #SentimentX",
        (Marketing, Twitter, Long) => "📈 Marketing intelligence update:\n\n🎯 Analysis: {chartType}\n📊 Key finding: {keyInsight}\n🚀 Growth angle: {mainTrend}\n💡 Action item: {actionableInsight}\n\n#MarketingAnalytics #GrowthHacking #DataDriven",
        (Marketing, LinkedIn, Short) => "📈 Marketing insights from {chartType} analysis: {keyInsight}. Reshaping how we approach audience engagement. #MarketingStrategy #DataDriven",
        (Marketing, LinkedIn, Medium) => "📈 Marketing intelligence: {chartType} analysis\n\n🎯 Key insight: {keyInsight}\n📊 Trend: {mainTrend}\n\nThe implications for segmentation and campaign timing are significant.\n\n#MarketingStrategy #AudienceInsights",
        (Marketing, LinkedIn, Long) => "📈 Marketing strategy deep dive: {chartType}\n\n🎯 Summary:\n• {keyInsight}\n• {mainTrend}\n• {actionableInsight}\n\nThe data suggests a shift in engagement patterns marketers need to address. How are you using analytics to drive performance?\n\n#MarketingStrategy #CampaignOptimization #MarketingAnalytics",

        (Academic, Twitter, Short) => "🎓 Research findings: {chartType} analysis demonstrates {keyInsight}. Methodology available for peer review. #AcademicResearch #DataScience",
        (Academic, Twitter, Medium) => "🎓 Academic insight: {chartType} analysis reveals {keyInsight}. Methodology: {mainTrend}. Peer review and collaboration welcome. #AcademicResearch #SentimentX",
        (Academic, Twitter, Long) => "🎓 Research note: {chartType} study\n\n📋 Findings: {keyInsight}\n🔬 Methodology: {mainTrend}\n📊 Implications: {actionableInsight}\n\nOpen to peer review and academic collaboration. #AcademicResearch #DataScience",
        (Academic, LinkedIn, Short) => "🎓 Academic research: {chartType} analysis yields {keyInsight}. Open to peer collaboration. #AcademicResearch #DataScience",
        (Academic, LinkedIn, Medium) => "🎓 Research findings: {chartType} analysis\n\n📊 Key result: {keyInsight}\n🔬 Methodology: {mainTrend}\n\nThe study follows standard statistical practice and is open for peer review.\n\n#AcademicResearch #PeerReview",
        (Academic, LinkedIn, Long) => "🎓 Study notes: {chartType} analysis\n\n📋 Abstract: this work presents {keyInsight} through {chartType} analysis.\n\n🔬 Key findings:\n• {keyInsight}\n• {mainTrend}\n• {actionableInsight}\n\nSeeking peer review; datasets and methodology available for replication.\n\n#AcademicResearch #DataScience #Statistics",

        (General, Twitter, Short) => "🌟 Interesting data insight: {keyInsight}! Sometimes the numbers tell fascinating stories. 📊 #DataStory #Insights",
        (General, Twitter, Medium) => "🌟 Cool data discovery! Our {chartType} shows {keyInsight}. Amazing what patterns emerge when you look: {mainTrend} 📊 #DataStory #SentimentX",
        (General, Twitter, Long) => "🌟 Data story time! 📊\n\n🔍 What we found: {keyInsight}\n📈 The pattern: {mainTrend}\n💡 Why it matters: {actionableInsight}\n\nLove how data reveals surprising insights! #DataStory #Analytics",
        (General, Facebook, Short) => "🌟 Found something interesting in the data! {keyInsight} 📊 Love when numbers tell a story!",
        (General, Facebook, Medium) => "🌟 Data discovery time! 📊\n\nJust analyzed some {chartType} data and found {keyInsight}. The trend shows {mainTrend}, which is pretty fascinating!",
        (General, Facebook, Long) => "🌟 Fascinating data discovery! 📊✨\n\nDug into a {chartType} analysis and found some real patterns:\n\n🔍 Key finding: {keyInsight}\n📈 The trend: {mainTrend}\n💡 What it means: {actionableInsight}\n\nHave you come across any surprising data insights lately?\n\n#DataStory #Insights",

        (Executive, LinkedIn, Short) => "👔 Strategic insight from {chartType} analysis: {keyInsight}. This data informs our leadership decisions. #ExecutiveInsights #Leadership",
        (Executive, LinkedIn, Medium) => "👔 Executive brief: {chartType} analysis\n\n📊 Strategic finding: {keyInsight}\n🎯 Business impact: {mainTrend}\n\nThis analysis feeds directly into planning and resource allocation.\n\n#ExecutiveInsights #Strategy #DataDriven",
        (Executive, LinkedIn, Long) => "👔 Executive strategic brief: {chartType} analysis\n\n📊 Summary:\n• Strategic finding: {keyInsight}\n• Market implication: {mainTrend}\n• Recommended action: {actionableInsight}\n\nThe findings influence quarterly planning and long-term initiatives. How are you folding analytics into your strategic planning?\n\n#ExecutiveInsights #Leadership #StrategicPlanning",

        _ => return None,
    };

    Some(template)
}

/// Short descriptive phrase for a chart's display title; unknown titles read
/// as generic "data analysis".
pub fn chart_type_phrase(chart_title: &str) -> &'static str {
    match chart_title {
        "Weekly Positive Sentiment" => "sentiment trend",
        "Sentiment Distribution" => "sentiment breakdown",
        "Engagement Trend" => "engagement pattern",
        "Real-time Activity" => "activity monitoring",
        "Sentiment Trends" => "temporal analysis",
        _ => "data analysis",
    }
}

/// `keyInsight` candidates, keyed by the sentiment context.
pub fn key_insights(tone: Sentiment) -> &'static [&'static str] {
    match tone {
        Sentiment::Positive => &[
            "positive sentiment increased by 23%",
            "engagement rates are trending upward",
            "user satisfaction shows significant improvement",
            "brand perception has strengthened considerably",
            "audience response exceeded expectations",
        ],
        Sentiment::Negative => &[
            "sentiment shows a concerning downward trend",
            "engagement rates require immediate attention",
            "user feedback indicates areas for improvement",
            "market response suggests a strategy adjustment is needed",
            "performance metrics highlight optimization opportunities",
        ],
        Sentiment::Neutral => &[
            "sentiment remains stable across all metrics",
            "engagement patterns show consistent performance",
            "user behavior demonstrates predictable trends",
            "market conditions remain steady",
            "performance indicators maintain baseline levels",
        ],
    }
}

/// `mainTrend` candidates; audiences without their own list borrow the
/// business one.
pub fn main_trends(audience: Audience) -> &'static [&'static str] {
    match audience {
        Audience::Technical => &[
            "system performance optimization yielding a 40% improvement",
            "real-time processing architecture scaling cleanly",
            "data pipeline efficiency increased significantly",
            "API response times improved by 60%",
            "infrastructure costs reduced while holding throughput",
        ],
        Audience::Marketing => &[
            "audience engagement peaks during specific time windows",
            "content personalization drives 35% higher conversion",
            "multi-channel attribution reveals hidden opportunities",
            "campaign optimization reduces acquisition cost by 28%",
            "audience segmentation improves targeting precision",
        ],
        _ => &[
            "customer satisfaction directly correlates with retention",
            "market positioning strategy is yielding results",
            "operational efficiency improvements are measurable",
            "competitive advantage is becoming more apparent",
            "ROI optimization strategies are proving effective",
        ],
    }
}

/// `actionableInsight` candidates; same business fallback as `main_trends`.
pub fn actionable_insights(audience: Audience) -> &'static [&'static str] {
    match audience {
        Audience::Technical => &[
            "implement automated scaling for peak traffic periods",
            "optimize hot queries for improved response times",
            "deploy caching for frequently accessed aggregates",
            "tighten monitoring and alerting coverage",
            "provision infrastructure ahead of growth projections",
        ],
        Audience::Marketing => &[
            "optimize campaign timing around engagement peaks",
            "shift budget toward the highest-converting channels",
            "introduce dynamic content personalization",
            "extend the best-performing creative formats",
            "build retention plays for high-value segments",
        ],
        _ => &[
            "increase investment in high-performing segments",
            "close the loop on customer feedback",
            "expand proven strategies into new markets",
            "rebalance resource allocation based on the data",
            "pursue strategic partnership opportunities",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sparse_by_design() {
        assert!(template(Audience::Business, SharePlatform::Twitter, MessageLength::Short).is_some());
        assert!(template(Audience::Executive, SharePlatform::LinkedIn, MessageLength::Long).is_some());
        // Executives do not tweet, and nobody templates Instagram captions.
        assert!(template(Audience::Executive, SharePlatform::Twitter, MessageLength::Short).is_none());
        assert!(template(Audience::Business, SharePlatform::Instagram, MessageLength::Short).is_none());
    }

    #[test]
    fn unknown_chart_titles_read_as_generic_analysis() {
        assert_eq!(chart_type_phrase("Sentiment Distribution"), "sentiment breakdown");
        assert_eq!(chart_type_phrase("Some Future Chart"), "data analysis");
    }

    #[test]
    fn phrase_lists_are_never_empty() {
        for tone in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            assert!(!key_insights(tone).is_empty());
        }
        for audience in Audience::all() {
            assert!(!main_trends(audience).is_empty());
            assert!(!actionable_insights(audience).is_empty());
        }
    }

    #[test]
    fn audiences_without_their_own_lists_fall_back_to_business() {
        assert_eq!(main_trends(Audience::Academic), main_trends(Audience::Business));
        assert_eq!(
            actionable_insights(Audience::General),
            actionable_insights(Audience::Business)
        );
    }
}
