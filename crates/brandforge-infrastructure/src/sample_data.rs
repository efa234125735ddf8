//! Seeded sample collections.
//!
//! Development and demo data the in-memory providers start from. Ids in
//! these collections are low integers; providers hand out fresh ids above
//! them.

use brandforge_core::analytics::{
    AgeGroup, AnalyticsOverview, ChannelPerformance, ComparisonScores, CompetitorComparison,
    ContentPerformance, DemographicsBreakdown, DeviceShare, LocationShare,
};
use brandforge_core::asset::{Asset, AssetCategory, AssetKind};
use brandforge_core::brand::{Brand, BrandColors, BrandMetrics, BrandStatus};
use brandforge_core::competitor::{
    Competitor, CompetitiveMatrix, CompetitorMetrics, MatrixRow, NewsItem,
};
use brandforge_core::dashboard::{
    ActivityItem, ActivityKind, BrandHighlight, DashboardStats, DashboardSummary, TaskPriority,
    UpcomingTask,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Two demo brands.
pub fn brands() -> Vec<Brand> {
    vec![
        Brand {
            id: 1,
            name: "TechFlow Solutions".to_string(),
            description: "AI-powered workflow automation platform".to_string(),
            industry: "Technology".to_string(),
            status: BrandStatus::Active,
            created_at: "2024-01-15T10:30:00Z".to_string(),
            updated_at: "2024-01-20T14:20:00Z".to_string(),
            metrics: BrandMetrics {
                brand_awareness: 75,
                market_share: 12.5,
                customer_satisfaction: 4.2,
                social_followers: 25_000,
                monthly_traffic: 150_000,
            },
            colors: BrandColors {
                primary: "#6366F1".to_string(),
                secondary: "#8B5CF6".to_string(),
                accent: "#EC4899".to_string(),
            },
            archetype: "The Innovator".to_string(),
            values: strings(&["Innovation", "Reliability", "User-Centric Design"]),
            target_audience: "Tech-savvy professionals aged 25-45".to_string(),
            positioning: "The most intuitive automation platform for modern teams".to_string(),
        },
        Brand {
            id: 2,
            name: "GreenEarth Cosmetics".to_string(),
            description: "Sustainable beauty products for conscious consumers".to_string(),
            industry: "Beauty & Personal Care".to_string(),
            status: BrandStatus::Active,
            created_at: "2024-01-10T08:15:00Z".to_string(),
            updated_at: "2024-01-18T16:45:00Z".to_string(),
            metrics: BrandMetrics {
                brand_awareness: 68,
                market_share: 8.3,
                customer_satisfaction: 4.5,
                social_followers: 45_000,
                monthly_traffic: 89_000,
            },
            colors: BrandColors {
                primary: "#10B981".to_string(),
                secondary: "#059669".to_string(),
                accent: "#F59E0B".to_string(),
            },
            archetype: "The Caregiver".to_string(),
            values: strings(&["Sustainability", "Natural Beauty", "Ethical Practices"]),
            target_audience: "Environmentally conscious women aged 18-40".to_string(),
            positioning: "Clean beauty that cares for you and the planet".to_string(),
        },
    ]
}

/// Three tracked demo competitors.
pub fn competitors() -> Vec<Competitor> {
    vec![
        Competitor {
            id: 1,
            name: "TechCorp Industries".to_string(),
            industry: "Technology".to_string(),
            market_share: 35.2,
            brand_strength: 8.5,
            social_followers: 2_500_000,
            monthly_traffic: 15_000_000,
            key_strengths: strings(&["Innovation", "Brand Recognition", "Market Presence"]),
            weaknesses: strings(&["Pricing", "Customer Service"]),
            recent_news: vec![
                NewsItem {
                    title: "TechCorp launches new AI platform".to_string(),
                    date: "2024-01-15".to_string(),
                },
                NewsItem {
                    title: "Q4 earnings exceed expectations".to_string(),
                    date: "2024-01-10".to_string(),
                },
            ],
            metrics: CompetitorMetrics {
                brand_awareness: 85,
                customer_satisfaction: 72,
                market_position: 90,
                innovation: 88,
                pricing: 45,
            },
        },
        Competitor {
            id: 2,
            name: "InnovateLabs".to_string(),
            industry: "Technology".to_string(),
            market_share: 22.8,
            brand_strength: 7.2,
            social_followers: 1_200_000,
            monthly_traffic: 8_500_000,
            key_strengths: strings(&["Research & Development", "Agile Development"]),
            weaknesses: strings(&["Marketing", "Brand Awareness"]),
            recent_news: vec![
                NewsItem {
                    title: "InnovateLabs secures $100M funding".to_string(),
                    date: "2024-01-12".to_string(),
                },
                NewsItem {
                    title: "New product line announcement".to_string(),
                    date: "2024-01-08".to_string(),
                },
            ],
            metrics: CompetitorMetrics {
                brand_awareness: 62,
                customer_satisfaction: 81,
                market_position: 70,
                innovation: 92,
                pricing: 78,
            },
        },
        Competitor {
            id: 3,
            name: "MarketLeader Co".to_string(),
            industry: "Technology".to_string(),
            market_share: 18.5,
            brand_strength: 6.8,
            social_followers: 980_000,
            monthly_traffic: 6_200_000,
            key_strengths: strings(&["Market Penetration", "Distribution Network"]),
            weaknesses: strings(&["Innovation", "Digital Transformation"]),
            recent_news: vec![
                NewsItem {
                    title: "MarketLeader expands to Asian markets".to_string(),
                    date: "2024-01-14".to_string(),
                },
                NewsItem {
                    title: "Partnership with regional distributors".to_string(),
                    date: "2024-01-06".to_string(),
                },
            ],
            metrics: CompetitorMetrics {
                brand_awareness: 75,
                customer_satisfaction: 68,
                market_position: 82,
                innovation: 55,
                pricing: 85,
            },
        },
    ]
}

/// The demo competitive matrix, including the "Your Brand" row.
pub fn matrix() -> CompetitiveMatrix {
    CompetitiveMatrix {
        categories: strings(&[
            "Brand Strength",
            "Market Share",
            "Innovation",
            "Customer Satisfaction",
            "Pricing",
            "Digital Presence",
        ]),
        rows: vec![
            MatrixRow {
                competitor_id: Some(1),
                name: "TechCorp Industries".to_string(),
                scores: vec![8.5, 9.0, 8.8, 7.2, 4.5, 8.7],
            },
            MatrixRow {
                competitor_id: Some(2),
                name: "InnovateLabs".to_string(),
                scores: vec![7.2, 7.0, 9.2, 8.1, 7.8, 7.5],
            },
            MatrixRow {
                competitor_id: Some(3),
                name: "MarketLeader Co".to_string(),
                scores: vec![6.8, 8.2, 5.5, 6.8, 8.5, 6.2],
            },
            MatrixRow {
                competitor_id: None,
                name: "Your Brand".to_string(),
                scores: vec![6.5, 5.8, 7.5, 8.5, 7.2, 8.0],
            },
        ],
    }
}

/// Five demo library assets.
pub fn assets() -> Vec<Asset> {
    vec![
        Asset {
            id: 1,
            name: "Primary Logo".to_string(),
            kind: AssetKind::Logo,
            category: AssetCategory::Brand,
            format: "svg".to_string(),
            size: "2.4 MB".to_string(),
            tags: strings(&["logo", "primary", "brand"]),
            created_at: "2024-01-15T10:30:00Z".to_string(),
            updated_at: "2024-01-15T10:30:00Z".to_string(),
            selected: false,
        },
        Asset {
            id: 2,
            name: "Business Card Template".to_string(),
            kind: AssetKind::BusinessCard,
            category: AssetCategory::Marketing,
            format: "pdf".to_string(),
            size: "1.8 MB".to_string(),
            tags: strings(&["business-card", "template", "marketing"]),
            created_at: "2024-01-14T14:20:00Z".to_string(),
            updated_at: "2024-01-14T14:20:00Z".to_string(),
            selected: false,
        },
        Asset {
            id: 3,
            name: "Social Media Banner".to_string(),
            kind: AssetKind::SocialMedia,
            category: AssetCategory::Social,
            format: "png".to_string(),
            size: "3.2 MB".to_string(),
            tags: strings(&["social", "banner", "marketing"]),
            created_at: "2024-01-13T09:15:00Z".to_string(),
            updated_at: "2024-01-13T09:15:00Z".to_string(),
            selected: false,
        },
        Asset {
            id: 4,
            name: "Letter Head Template".to_string(),
            kind: AssetKind::Letterhead,
            category: AssetCategory::Stationery,
            format: "pdf".to_string(),
            size: "1.2 MB".to_string(),
            tags: strings(&["letterhead", "template", "stationery"]),
            created_at: "2024-01-12T16:45:00Z".to_string(),
            updated_at: "2024-01-12T16:45:00Z".to_string(),
            selected: false,
        },
        Asset {
            id: 5,
            name: "Brand Color Palette".to_string(),
            kind: AssetKind::ColorPalette,
            category: AssetCategory::Brand,
            format: "json".to_string(),
            size: "0.1 MB".to_string(),
            tags: strings(&["colors", "palette", "brand"]),
            created_at: "2024-01-11T11:30:00Z".to_string(),
            updated_at: "2024-01-11T11:30:00Z".to_string(),
            selected: false,
        },
    ]
}

/// The demo dashboard summary. `stats.total_brands` is overwritten with the
/// live brand count by the dashboard provider.
pub fn dashboard() -> DashboardSummary {
    DashboardSummary {
        stats: DashboardStats {
            total_brands: 2,
            active_campaigns: 8,
            total_reach: 284_000,
            average_engagement: 6.8,
            monthly_growth: 12.5,
            customer_satisfaction: 4.35,
        },
        recent_activity: vec![
            ActivityItem {
                id: 1,
                kind: ActivityKind::BrandCreated,
                title: "New brand 'TechFlow Solutions' created".to_string(),
                description: "Brand wizard completed successfully".to_string(),
                timestamp: "2024-01-20T14:30:00Z".to_string(),
            },
            ActivityItem {
                id: 2,
                kind: ActivityKind::CampaignLaunched,
                title: "Social media campaign launched".to_string(),
                description: "Q1 awareness campaign for GreenEarth Cosmetics".to_string(),
                timestamp: "2024-01-19T11:15:00Z".to_string(),
            },
            ActivityItem {
                id: 3,
                kind: ActivityKind::ReportGenerated,
                title: "Monthly analytics report generated".to_string(),
                description: "Performance metrics for January 2024".to_string(),
                timestamp: "2024-01-18T09:45:00Z".to_string(),
            },
            ActivityItem {
                id: 4,
                kind: ActivityKind::CompetitorAdded,
                title: "New competitor added to tracking".to_string(),
                description: "MarketLeader Co added to competitive analysis".to_string(),
                timestamp: "2024-01-17T16:20:00Z".to_string(),
            },
        ],
        top_performing_brands: vec![
            BrandHighlight {
                id: 1,
                name: "TechFlow Solutions".to_string(),
                performance: 85,
                growth: 15.2,
                engagement: 7.8,
            },
            BrandHighlight {
                id: 2,
                name: "GreenEarth Cosmetics".to_string(),
                performance: 78,
                growth: 9.5,
                engagement: 8.2,
            },
        ],
        upcoming_tasks: vec![
            UpcomingTask {
                id: 1,
                title: "Review Q1 campaign performance".to_string(),
                due_date: "2024-01-25T10:00:00Z".to_string(),
                priority: TaskPriority::High,
                brand: "TechFlow Solutions".to_string(),
            },
            UpcomingTask {
                id: 2,
                title: "Update competitor analysis".to_string(),
                due_date: "2024-01-28T14:00:00Z".to_string(),
                priority: TaskPriority::Medium,
                brand: "GreenEarth Cosmetics".to_string(),
            },
            UpcomingTask {
                id: 3,
                title: "Prepare monthly report".to_string(),
                due_date: "2024-01-30T17:00:00Z".to_string(),
                priority: TaskPriority::Low,
                brand: "All Brands".to_string(),
            },
        ],
    }
}

/// Headline analytics numbers.
pub fn analytics_overview() -> AnalyticsOverview {
    AnalyticsOverview {
        total_views: 125_430,
        unique_visitors: 89_234,
        conversion_rate: 3.2,
        brand_mentions: 1_847,
        social_engagement: 24_567,
        market_share: 12.5,
        brand_awareness: 68,
        customer_satisfaction: 4.2,
    }
}

/// Your brand vs. the strongest tracked competitor.
pub fn competitor_comparison() -> CompetitorComparison {
    CompetitorComparison {
        your_brand: ComparisonScores {
            brand_strength: 75,
            market_share: 68,
            innovation: 82,
            customer_satisfaction: 79,
            digital_presence: 85,
        },
        top_competitor: ComparisonScores {
            brand_strength: 88,
            market_share: 92,
            innovation: 76,
            customer_satisfaction: 71,
            digital_presence: 83,
        },
    }
}

/// Audience demographic breakdown.
pub fn demographics() -> DemographicsBreakdown {
    DemographicsBreakdown {
        age_groups: vec![
            AgeGroup { group: "18-24".to_string(), percentage: 15 },
            AgeGroup { group: "25-34".to_string(), percentage: 35 },
            AgeGroup { group: "35-44".to_string(), percentage: 28 },
            AgeGroup { group: "45-54".to_string(), percentage: 16 },
            AgeGroup { group: "55+".to_string(), percentage: 6 },
        ],
        locations: vec![
            LocationShare { country: "United States".to_string(), percentage: 45 },
            LocationShare { country: "Canada".to_string(), percentage: 18 },
            LocationShare { country: "United Kingdom".to_string(), percentage: 12 },
            LocationShare { country: "Australia".to_string(), percentage: 8 },
            LocationShare { country: "Germany".to_string(), percentage: 7 },
            LocationShare { country: "Others".to_string(), percentage: 10 },
        ],
        devices: vec![
            DeviceShare { device: "Desktop".to_string(), percentage: 52 },
            DeviceShare { device: "Mobile".to_string(), percentage: 38 },
            DeviceShare { device: "Tablet".to_string(), percentage: 10 },
        ],
    }
}

/// Per-channel funnel numbers.
pub fn channel_performance() -> Vec<ChannelPerformance> {
    vec![
        ChannelPerformance {
            channel: "Organic Search".to_string(),
            visitors: 42_500,
            conversions: 1_360,
            roi: 320,
        },
        ChannelPerformance {
            channel: "Social Media".to_string(),
            visitors: 28_900,
            conversions: 867,
            roi: 280,
        },
        ChannelPerformance {
            channel: "Direct".to_string(),
            visitors: 18_700,
            conversions: 748,
            roi: 400,
        },
        ChannelPerformance {
            channel: "Paid Search".to_string(),
            visitors: 15_200,
            conversions: 912,
            roi: 180,
        },
        ChannelPerformance {
            channel: "Email".to_string(),
            visitors: 8_900,
            conversions: 534,
            roi: 450,
        },
        ChannelPerformance {
            channel: "Referral".to_string(),
            visitors: 6_400,
            conversions: 192,
            roi: 150,
        },
    ]
}

/// Per-content engagement numbers.
pub fn content_performance() -> Vec<ContentPerformance> {
    vec![
        ContentPerformance {
            title: "Ultimate Brand Guide 2024".to_string(),
            views: 15_600,
            engagement: 8.2,
            shares: 234,
        },
        ContentPerformance {
            title: "Industry Trends Analysis".to_string(),
            views: 12_400,
            engagement: 7.8,
            shares: 189,
        },
        ContentPerformance {
            title: "Customer Success Stories".to_string(),
            views: 10_900,
            engagement: 9.1,
            shares: 312,
        },
        ContentPerformance {
            title: "Product Feature Showcase".to_string(),
            views: 8_700,
            engagement: 6.9,
            shares: 156,
        },
        ContentPerformance {
            title: "Behind the Scenes".to_string(),
            views: 7_200,
            engagement: 8.7,
            shares: 203,
        },
    ]
}
