//! Blog posts with togglable content sections.
//!
//! The scalar section/CTA/sidebar fields live on the post row; the
//! numbered groups from the original model (features, applications,
//! statistics, related courses) are fixed-slot child tables hydrated
//! with defaults at creation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yume_core::types::{DbId, Timestamp};

/// Section, CTA, navigation, and sidebar fields of a blog post.
///
/// Shared between the row struct and the create/update DTOs; `Default`
/// mirrors the column defaults.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogSectionFields {
    pub show_section_1: bool,
    pub section_1_title: String,
    pub section_1_content: String,
    pub show_section_2: bool,
    pub section_2_title: String,
    pub show_section_3: bool,
    pub section_3_title: String,
    pub show_section_4: bool,
    pub section_4_title: String,
    pub section_4_content: String,

    pub show_cta: bool,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
    pub cta_button_link: String,

    pub show_social_share: bool,
    pub social_share_title: String,
    pub social_share_description: String,
    pub show_facebook_share: bool,
    pub show_twitter_share: bool,
    pub show_linkedin_share: bool,

    pub show_blog_navigation: bool,
    pub previous_nav_label: String,
    pub previous_nav_text: String,
    pub previous_nav_link: String,
    pub next_nav_label: String,
    pub next_nav_text: String,
    pub next_nav_link: String,
    pub is_previous_external: bool,
    pub is_next_external: bool,

    pub show_social_section: bool,
    pub social_section_title: String,
    pub social_description: String,
    pub instagram_url: String,
    pub facebook_url: String,
    pub linkedin_url: String,

    pub show_courses_section: bool,
    pub courses_section_title: String,
    pub show_categories_section: bool,
    pub categories_section_title: String,
    pub excel_count: i32,
    pub sql_count: i32,
    pub python_count: i32,
    pub azure_count: i32,
    pub career_count: i32,
}

impl Default for BlogSectionFields {
    fn default() -> Self {
        Self {
            show_section_1: true,
            section_1_title: "Why Excel is Essential".into(),
            section_1_content: String::new(),
            show_section_2: true,
            section_2_title: "Advanced Features to Master".into(),
            show_section_3: true,
            section_3_title: "Real-World Applications".into(),
            show_section_4: true,
            section_4_title: "Career Impact".into(),
            section_4_content: String::new(),

            show_cta: true,
            cta_title: "Ready to Master Excel?".into(),
            cta_description: "Join our Excel for Data Analysis course today.".into(),
            cta_button_text: "Explore Course".into(),
            cta_button_link: "/courses/excel-data-analysis".into(),

            show_social_share: true,
            social_share_title: "Share this article".into(),
            social_share_description: "Help others discover this valuable content".into(),
            show_facebook_share: true,
            show_twitter_share: true,
            show_linkedin_share: true,

            show_blog_navigation: true,
            previous_nav_label: "Previous".into(),
            previous_nav_text: "Blog List".into(),
            previous_nav_link: "blog".into(),
            next_nav_label: "Next".into(),
            next_nav_text: "SQL for Data Analysis".into(),
            next_nav_link: "sql_blog".into(),
            is_previous_external: false,
            is_next_external: false,

            show_social_section: true,
            social_section_title: "Follow Yume Learning".into(),
            social_description: "Stay updated with courses and career tips".into(),
            instagram_url: "https://www.instagram.com/yumelearning/".into(),
            facebook_url: "https://www.facebook.com/yumelearning".into(),
            linkedin_url: "https://www.linkedin.com/company/antsskillvarsity/".into(),

            show_courses_section: true,
            courses_section_title: "Related Courses".into(),
            show_categories_section: true,
            categories_section_title: "Blog Categories".into(),
            excel_count: 6,
            sql_count: 5,
            python_count: 4,
            azure_count: 3,
            career_count: 2,
        }
    }
}

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub featured_image: String,
    pub publish_date: NaiveDate,
    pub author_name: String,
    pub author_role: String,
    pub read_time: String,
    pub is_published: bool,
    pub featured: bool,
    pub sort_order: i32,
    /// Derived from `title` on first save when absent; never
    /// regenerated afterwards.
    pub slug: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub sections: BlogSectionFields,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub publish_date: NaiveDate,
    pub author_name: Option<String>,
    pub author_role: Option<String>,
    pub read_time: Option<String>,
    pub is_published: Option<bool>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
    /// Explicit slug; derived from `title` when omitted.
    pub slug: Option<String>,
    #[serde(default)]
    pub sections: BlogSectionFields,
    pub features: Option<Vec<BlogFeatureInput>>,
    pub applications: Option<Vec<BlogApplicationInput>>,
    pub stats: Option<Vec<BlogStatInput>>,
    pub related_courses: Option<Vec<BlogRelatedCourseInput>>,
}

/// Update DTO. Scalar fields patch individually; `sections` and the
/// slot groups replace wholesale when present. The slug never changes.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub author_name: Option<String>,
    pub author_role: Option<String>,
    pub read_time: Option<String>,
    pub is_published: Option<bool>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub sections: Option<BlogSectionFields>,
    pub features: Option<Vec<BlogFeatureInput>>,
    pub applications: Option<Vec<BlogApplicationInput>>,
    pub stats: Option<Vec<BlogStatInput>>,
    pub related_courses: Option<Vec<BlogRelatedCourseInput>>,
}

// ---------------------------------------------------------------------------
// Fixed-slot groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogFeature {
    pub id: DbId,
    pub post_id: DbId,
    pub slot: i32,
    pub title: String,
    pub icon: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogFeatureInput {
    pub title: String,
    pub icon: String,
    pub content: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogApplication {
    pub id: DbId,
    pub post_id: DbId,
    pub slot: i32,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogApplicationInput {
    pub text: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogStat {
    pub id: DbId,
    pub post_id: DbId,
    pub slot: i32,
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogStatInput {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogRelatedCourse {
    pub id: DbId,
    pub post_id: DbId,
    pub slot: i32,
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogRelatedCourseInput {
    pub title: String,
    pub description: String,
    pub link: String,
}

// ---------------------------------------------------------------------------
// Slot defaults (matching the original per-slot field defaults)
// ---------------------------------------------------------------------------

fn blog_feature(title: &str, icon: &str, content: &str) -> BlogFeatureInput {
    BlogFeatureInput {
        title: title.into(),
        icon: icon.into(),
        content: content.into(),
    }
}

pub fn default_features() -> Vec<BlogFeatureInput> {
    vec![
        blog_feature(
            "Pivot Tables",
            "bi-table",
            "Transform data into insights, create dynamic reports, and use slicers for interactive filtering.",
        ),
        blog_feature(
            "Power Query",
            "bi-lightning-charge",
            "Automate data cleaning, combine multiple sources, and create repeatable workflows.",
        ),
        blog_feature(
            "Advanced Formulas",
            "bi-graph-up",
            "Master INDEX-MATCH, XLOOKUP, dynamic arrays, and statistical functions.",
        ),
        blog_feature(
            "Data Visualization",
            "bi-bar-chart",
            "Create compelling charts and dashboards that communicate insights effectively.",
        ),
    ]
}

pub fn default_applications() -> Vec<BlogApplicationInput> {
    [
        "Business Reporting: Create automated dashboards that update with new data",
        "Financial Analysis: Build models with scenario analysis and forecasting",
        "Sales Tracking: Analyze performance and predict future trends",
        "Inventory Management: Track stock levels and optimize ordering",
        "Project Management: Create Gantt charts and track project timelines",
    ]
    .iter()
    .map(|text| BlogApplicationInput { text: (*text).into() })
    .collect()
}

pub fn default_stats() -> Vec<BlogStatInput> {
    vec![
        BlogStatInput { number: "82%".into(), label: "Jobs require Excel".into() },
        BlogStatInput { number: "35%".into(), label: "Higher productivity".into() },
        BlogStatInput { number: "₹6-12L".into(), label: "Salary boost".into() },
    ]
}

fn related_course(title: &str, description: &str, link: &str) -> BlogRelatedCourseInput {
    BlogRelatedCourseInput {
        title: title.into(),
        description: description.into(),
        link: link.into(),
    }
}

pub fn default_related_courses() -> Vec<BlogRelatedCourseInput> {
    vec![
        related_course(
            "Excel for Data Analysis",
            "Learn powerful Excel tools for data analysis",
            "/courses/excel-data-analysis",
        ),
        related_course(
            "Data Visualization",
            "Create compelling visualizations",
            "/courses/data-visualization",
        ),
        related_course(
            "SQL for Data Analysis",
            "Extract and analyze data using SQL",
            "/courses/sql-data-analysis",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A full blog post with all slot groups loaded.
#[derive(Debug, Serialize)]
pub struct BlogPostPage {
    #[serde(flatten)]
    pub post: BlogPost,
    pub features: Vec<BlogFeature>,
    pub applications: Vec<BlogApplication>,
    pub stats: Vec<BlogStat>,
    pub related_courses: Vec<BlogRelatedCourse>,
}
