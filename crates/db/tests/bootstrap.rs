use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    yume_db::health_check(&pool).await.unwrap();

    // Every content table must exist and start empty.
    let tables = [
        "courses",
        "course_highlights",
        "course_learning_outcomes",
        "course_tools",
        "course_certification_points",
        "course_faqs",
        "course_career_opportunities",
        "curriculum_months",
        "curriculum_sections",
        "curriculum_topics",
        "project_cards",
        "project_details",
        "blog_posts",
        "hero_slides",
        "advisors",
        "placements_sections",
        "company_logos",
        "many_more_companies",
        "internship_sections",
        "internship_benefits",
        "contact_information",
        "contact_messages",
        "enrollments",
        "enquiries",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Unique constraints follow the `uq_` naming convention the error
/// classifier relies on to produce 409s.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_constraints_use_uq_prefix(pool: PgPool) {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT conname FROM pg_constraint
         WHERE contype = 'u' AND connamespace = 'public'::regnamespace",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty(), "expected unique constraints in schema");
    for (name,) in rows {
        assert!(
            name.starts_with("uq_"),
            "unique constraint {name} should use the uq_ prefix"
        );
    }
}
