//! Dashboard read model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Aggregate workspace numbers shown at the top of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_brands: usize,
    pub active_campaigns: u32,
    pub total_reach: u64,
    pub average_engagement: f64,
    pub monthly_growth: f64,
    pub customer_satisfaction: f64,
}

/// Kind of event shown in the activity feed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActivityKind {
    BrandCreated,
    CampaignLaunched,
    ReportGenerated,
    CompetitorAdded,
}

/// One entry of the recent activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: u64,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: String,
}

/// Performance highlight for one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandHighlight {
    pub id: u64,
    pub name: String,
    pub performance: u32,
    pub growth: f64,
    pub engagement: f64,
}

/// Urgency of an upcoming task.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// One entry of the upcoming tasks list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingTask {
    pub id: u64,
    pub title: String,
    pub due_date: String,
    pub priority: TaskPriority,
    pub brand: String,
}

/// The complete dashboard read model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityItem>,
    pub top_performing_brands: Vec<BrandHighlight>,
    pub upcoming_tasks: Vec<UpcomingTask>,
}
