//! Fixed choice sets used by content entities.
//!
//! Content editors pick icons, colors, and categories from dropdowns;
//! these tables are the allowed values the admin API validates against.
//! Values are stored as plain strings in the database.

/// Bootstrap contextual color labels used for badges, borders, and
/// progress bars.
pub const COLORS: &[&str] = &[
    "primary",
    "success",
    "info",
    "warning",
    "danger",
    "secondary",
    "dark",
];

/// Bootstrap-icon classes offered for course highlights.
pub const COURSE_HIGHLIGHT_ICONS: &[&str] = &[
    "bi bi-code-slash",
    "bi bi-bar-chart-steps",
    "bi bi-folder-check",
    "bi bi-people",
    "bi bi-award",
    "bi bi-laptop",
    "bi bi-clock-history",
    "bi bi-briefcase",
    "bi bi-lightning-charge",
    "bi bi-patch-check",
];

/// Icon types for course career opportunity cards.
pub const CAREER_ICON_TYPES: &[&str] = &[
    "data",
    "finance",
    "business",
    "speed",
    "intelligence",
    "corporate",
    "reporting",
    "tech",
];

/// Blog post categories.
pub const BLOG_CATEGORIES: &[&str] = &[
    "excel",
    "sql",
    "python",
    "data_viz",
    "azure",
    "ai_ml",
    "power_platform",
    "security",
    "soft_skills",
    "tech_training",
    "career",
];

/// Education levels offered on the enrollment form.
pub const ENROLLMENT_EDUCATION: &[&str] = &[
    "10th",
    "12th",
    "diploma",
    "bsc_cs",
    "bsc_it",
    "bca",
    "bcom",
    "btech",
    "post_graduate",
    "other",
];

/// Courses offered on the enrollment form.
pub const ENROLLMENT_COURSES: &[&str] = &[
    "Excel for Data Analysis",
    "SQL for Data Analysis",
    "Python Development",
    "Data Visualization",
    "Azure Fundamentals",
    "Azure AI Fundamentals",
    "Power Platform",
    "Security & Compliance",
    "Professional Development",
];

/// True if `value` is a recognized color label.
pub fn is_color(value: &str) -> bool {
    COLORS.contains(&value)
}

/// True if `value` belongs to `set`.
pub fn is_choice(set: &[&str], value: &str) -> bool {
    set.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_membership() {
        assert!(is_color("primary"));
        assert!(is_color("dark"));
        assert!(!is_color("blue"));
    }

    #[test]
    fn enrollment_choices() {
        assert!(is_choice(ENROLLMENT_EDUCATION, "btech"));
        assert!(!is_choice(ENROLLMENT_EDUCATION, "phd"));
        assert!(is_choice(ENROLLMENT_COURSES, "Python Development"));
        assert!(!is_choice(ENROLLMENT_COURSES, "Basket Weaving"));
    }
}
