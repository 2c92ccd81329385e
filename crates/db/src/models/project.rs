//! Project cards and detail pages.
//!
//! A card may carry at most one detail page. The detail page's scalar
//! content lives on `project_details`; the original's numbered field
//! groups (partner_1..3 and friends) are fixed-slot child tables whose
//! per-slot defaults are hydrated at creation time.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yume_core::types::{DbId, Timestamp};

/// Number of students formatted for display (`300` -> `"300+"`).
pub fn student_count_display(count: i32) -> String {
    format!("{count}+")
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectCard {
    pub id: DbId,
    pub project_name: String,
    pub tagline: String,
    pub category: String,
    pub duration: String,
    pub thumbnail_image: String,
    pub short_description: String,
    pub sort_order: i32,
    pub is_active: bool,
    /// Derived from `project_name` on first save when absent; never
    /// regenerated afterwards.
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectCard {
    pub project_name: String,
    pub tagline: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub thumbnail_image: Option<String>,
    pub short_description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    /// Explicit slug; derived from `project_name` when omitted.
    pub slug: Option<String>,
}

/// Update DTO. The slug is fixed at creation and cannot be changed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectCard {
    pub project_name: Option<String>,
    pub tagline: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub thumbnail_image: Option<String>,
    pub short_description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Detail page scalar fields
// ---------------------------------------------------------------------------

/// Scalar content of a project detail page.
///
/// Shared between the row struct and the upsert input; `Default`
/// mirrors the column defaults so an empty admin payload produces the
/// same page the original produced from its field defaults.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDetailFields {
    pub badge_text: String,
    pub launch_date_badge: String,
    pub duration_hours: String,
    pub student_count: i32,
    pub location: String,
    pub hero_image: String,
    pub target_audience: String,
    pub detailed_content: String,

    pub show_partners: bool,

    pub show_program_overview: bool,
    pub program_overview_title: String,
    pub program_overview_content: String,
    pub implementing_partner_name: String,
    pub overview_partner_2: String,
    pub overview_partner_3: String,
    pub program_objective: String,
    pub learning_approach_title: String,
    pub learning_approach_main: String,
    pub learning_approach_sub: String,
    pub learning_approach_icon: String,

    pub show_program_components: bool,
    pub components_title: String,

    pub show_role_impact: bool,
    pub role_title: String,
    pub role_description: String,
    pub impact_title: String,
    pub impact_main_number: String,
    pub impact_main_text: String,

    pub show_certification_support: bool,
    pub certification_title: String,
    pub certification_subtitle: String,
    pub certification_description: String,
    pub certification_icon: String,
    pub certification_color: String,
    pub support_title: String,
    pub support_subtitle: String,
    pub support_description: String,
    pub support_icon: String,
    pub support_color: String,

    pub show_sustainable_pathways: bool,
    pub pathways_title: String,
    pub pathways_description: String,
    pub highlights_title: String,
}

impl Default for ProjectDetailFields {
    fn default() -> Self {
        Self {
            badge_text: "Skill Development Program".into(),
            launch_date_badge: "July 2025 Launch".into(),
            duration_hours: "120 Hours".into(),
            student_count: 300,
            location: "Bengaluru".into(),
            hero_image: String::new(),
            target_audience: String::new(),
            detailed_content: String::new(),

            show_partners: true,

            show_program_overview: true,
            program_overview_title: "Program Overview".into(),
            program_overview_content: String::new(),
            implementing_partner_name: "YuMe Learning".into(),
            overview_partner_2: "NASSCOM Foundation".into(),
            overview_partner_3: "ITC".into(),
            program_objective: String::new(),
            learning_approach_title: "Learning Approach".into(),
            learning_approach_main: "Primarily In-person sessions".into(),
            learning_approach_sub: "with occasional online support".into(),
            learning_approach_icon: "bi-person-video3".into(),

            show_program_components: true,
            components_title: "Core Program Components".into(),

            show_role_impact: true,
            role_title: "Role of YuMe Learning".into(),
            role_description: "As the implementing partner, YuMe Learning is responsible for \
                               comprehensive program delivery and outcome measurement across \
                               multiple regions in Karnataka."
                .into(),
            impact_title: "Program Impact".into(),
            impact_main_number: "2,500+".into(),
            impact_main_text: "Students Trained".into(),

            show_certification_support: true,
            certification_title: "Industry Certification".into(),
            certification_subtitle: "Validated by NASSCOM Foundation".into(),
            certification_description: "Industry-recognized certification validating technical \
                                        competencies and employability skills."
                .into(),
            certification_icon: "bi-award".into(),
            certification_color: "primary".into(),
            support_title: "Placement Support".into(),
            support_subtitle: "End-to-end Career Assistance".into(),
            support_description: "Comprehensive placement and internship support with industry \
                                  connections."
                .into(),
            support_icon: "bi-briefcase".into(),
            support_color: "success".into(),

            show_sustainable_pathways: true,
            pathways_title: "Creating Sustainable Career Pathways".into(),
            pathways_description: String::new(),
            highlights_title: "Program Highlights".into(),
        }
    }
}

/// A detail page row from the `project_details` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectDetail {
    pub id: DbId,
    pub card_id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fields: ProjectDetailFields,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Fixed-slot groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectPartner {
    pub id: DbId,
    pub detail_id: DbId,
    pub slot: i32,
    pub name: String,
    pub partner_type: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PartnerInput {
    pub name: String,
    pub partner_type: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectComponent {
    pub id: DbId,
    pub detail_id: DbId,
    pub slot: i32,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub color: String,
    /// Newline-delimited list items.
    pub items: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentInput {
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub color: String,
    pub items: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectRoleItem {
    pub id: DbId,
    pub detail_id: DbId,
    pub slot: i32,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleItemInput {
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectImpactMetric {
    pub id: DbId,
    pub detail_id: DbId,
    pub slot: i32,
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImpactMetricInput {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectOutcome {
    pub id: DbId,
    pub detail_id: DbId,
    pub slot: i32,
    pub label: String,
    /// Percentage, 0-100.
    pub value: i32,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeInput {
    pub label: String,
    pub value: i32,
    pub color: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectFeatureItem {
    pub id: DbId,
    pub detail_id: DbId,
    pub kind: String,
    pub slot: i32,
    pub text: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureItemInput {
    pub text: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectPartnerBadge {
    pub id: DbId,
    pub detail_id: DbId,
    pub slot: i32,
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PartnerBadgeInput {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectHighlight {
    pub id: DbId,
    pub detail_id: DbId,
    pub slot: i32,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighlightInput {
    pub text: String,
    pub color: String,
}

// ---------------------------------------------------------------------------
// Slot defaults (matching the original per-slot field defaults)
// ---------------------------------------------------------------------------

fn partner(name: &str, partner_type: &str, icon: &str, color: &str) -> PartnerInput {
    PartnerInput {
        name: name.into(),
        partner_type: partner_type.into(),
        icon: icon.into(),
        color: color.into(),
    }
}

pub fn default_partners() -> Vec<PartnerInput> {
    vec![
        partner("YuMe Learning", "Implementing Partner", "bi-building", "primary"),
        partner("NASSCOM", "Knowledge Partner", "bi-shield-check", "success"),
        partner("ITC", "CSR Partner", "bi-handshake", "info"),
    ]
}

fn component(title: &str, subtitle: &str, icon: &str, color: &str, items: &str) -> ComponentInput {
    ComponentInput {
        title: title.into(),
        subtitle: subtitle.into(),
        icon: icon.into(),
        color: color.into(),
        items: items.into(),
    }
}

pub fn default_components() -> Vec<ComponentInput> {
    vec![
        component(
            "Technical Skills",
            "Programming & Development",
            "bi-code-slash",
            "primary",
            "Python Programming\nFull Stack Development\nData Analytics\nSQL Database Management\nReal Dataset Problem-solving",
        ),
        component(
            "Hands-on Projects",
            "Practical Experience",
            "bi-laptop",
            "success",
            "Weekly Lab Sessions\nIndustry Mini-Projects\nCapstone Project\nTeam-based Simulations\nContinuous Assessment",
        ),
        component(
            "Career Readiness",
            "Professional Development",
            "bi-briefcase",
            "warning",
            "Resume & Portfolio Building\nLinkedIn Optimization\nMock Interview Sessions\nProfessional Communication\nIndustry Networking",
        ),
    ]
}

fn role_item(title: &str, subtitle: &str, icon: &str, color: &str) -> RoleItemInput {
    RoleItemInput {
        title: title.into(),
        subtitle: subtitle.into(),
        icon: icon.into(),
        color: color.into(),
    }
}

pub fn default_role_items() -> Vec<RoleItemInput> {
    vec![
        role_item("Program Delivery", "Training execution & management", "bi-gear", "primary"),
        role_item("Learner Engagement", "Student support & monitoring", "bi-people", "success"),
        role_item("Outcome Measurement", "Impact assessment & reporting", "bi-graph-up", "info"),
        role_item("Multi-region Implementation", "Statewide program coverage", "bi-geo-alt", "warning"),
    ]
}

pub fn default_impact_metrics() -> Vec<ImpactMetricInput> {
    vec![
        ImpactMetricInput { number: "5+".into(), label: "Regions".into() },
        ImpactMetricInput { number: "50".into(), label: "Hours/Student".into() },
    ]
}

fn outcome(label: &str, value: i32, color: &str) -> OutcomeInput {
    OutcomeInput { label: label.into(), value, color: color.into() }
}

pub fn default_outcomes() -> Vec<OutcomeInput> {
    vec![
        outcome("Skill Enhancement", 94, "success"),
        outcome("Employability", 89, "warning"),
        outcome("Student Satisfaction", 96, "info"),
    ]
}

fn feature(text: &str, icon: &str, color: &str) -> FeatureItemInput {
    FeatureItemInput { text: text.into(), icon: icon.into(), color: color.into() }
}

pub fn default_certification_features() -> Vec<FeatureItemInput> {
    vec![
        feature("Technical Validation", "bi-check-circle", "success"),
        feature("Employability Proof", "bi-person-check", "primary"),
        feature("Industry Recognition", "bi-award", "warning"),
        feature("Career Readiness Support", "bi-briefcase", "info"),
    ]
}

pub fn default_support_features() -> Vec<FeatureItemInput> {
    vec![
        feature("Industry Connect", "bi-building", "info"),
        feature("Mock Interviews", "bi-chat-dots", "warning"),
        feature("Mentorship", "bi-people", "secondary"),
        feature("Career Guidance", "bi-graph-up", "danger"),
    ]
}

fn badge(name: &str, icon: &str, color: &str) -> PartnerBadgeInput {
    PartnerBadgeInput { name: name.into(), icon: icon.into(), color: color.into() }
}

pub fn default_partner_badges() -> Vec<PartnerBadgeInput> {
    vec![
        badge("YuMe Learning", "bi-building", "primary"),
        badge("NASSCOM Foundation", "bi-shield-check", "success"),
        badge("ITC", "bi-handshake", "info"),
    ]
}

pub fn default_highlights() -> Vec<HighlightInput> {
    vec![
        HighlightInput { text: "Industry-Aligned Curriculum".into(), color: "success".into() },
        HighlightInput { text: "Hands-on Practical Experience".into(), color: "primary".into() },
        HighlightInput { text: "Mentorship & Career Guidance".into(), color: "warning".into() },
    ]
}

// ---------------------------------------------------------------------------
// Upsert input & views
// ---------------------------------------------------------------------------

/// Full replacement payload for a project detail page.
///
/// Omitted scalar fields fall back to their defaults; omitted slot
/// groups are hydrated with the default slots above.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectDetailInput {
    #[serde(flatten)]
    pub fields: ProjectDetailFields,
    pub partners: Option<Vec<PartnerInput>>,
    pub components: Option<Vec<ComponentInput>>,
    pub role_items: Option<Vec<RoleItemInput>>,
    pub impact_metrics: Option<Vec<ImpactMetricInput>>,
    pub outcomes: Option<Vec<OutcomeInput>>,
    pub certification_features: Option<Vec<FeatureItemInput>>,
    pub support_features: Option<Vec<FeatureItemInput>>,
    pub partner_badges: Option<Vec<PartnerBadgeInput>>,
    pub highlights: Option<Vec<HighlightInput>>,
}

/// A detail page with all slot groups loaded.
#[derive(Debug, Serialize)]
pub struct ProjectDetailView {
    #[serde(flatten)]
    pub detail: ProjectDetail,
    /// `student_count` formatted with a trailing `+`.
    pub student_count_display: String,
    pub partners: Vec<ProjectPartner>,
    pub components: Vec<ProjectComponent>,
    pub role_items: Vec<ProjectRoleItem>,
    pub impact_metrics: Vec<ProjectImpactMetric>,
    pub outcomes: Vec<ProjectOutcome>,
    pub certification_features: Vec<ProjectFeatureItem>,
    pub support_features: Vec<ProjectFeatureItem>,
    pub partner_badges: Vec<ProjectPartnerBadge>,
    pub highlights: Vec<ProjectHighlight>,
}

/// A public project page: the card plus its optional detail page.
#[derive(Debug, Serialize)]
pub struct ProjectPage {
    #[serde(flatten)]
    pub card: ProjectCard,
    pub detail: Option<ProjectDetailView>,
}
