//! Integration tests for blog posts and their fixed-slot groups.

use chrono::NaiveDate;
use sqlx::PgPool;
use yume_db::models::blog::{
    BlogSectionFields, BlogStatInput, CreateBlogPost, UpdateBlogPost,
};
use yume_db::repositories::BlogPostRepo;

fn publish_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

fn new_post(title: &str) -> CreateBlogPost {
    CreateBlogPost {
        title: title.to_string(),
        category: None,
        excerpt: None,
        featured_image: None,
        publish_date: publish_date(),
        author_name: None,
        author_role: None,
        read_time: None,
        is_published: None,
        featured: None,
        sort_order: None,
        slug: None,
        sections: BlogSectionFields::default(),
        features: None,
        applications: None,
        stats: None,
        related_courses: None,
    }
}

fn empty_update() -> UpdateBlogPost {
    UpdateBlogPost {
        title: None,
        category: None,
        excerpt: None,
        featured_image: None,
        publish_date: None,
        author_name: None,
        author_role: None,
        read_time: None,
        is_published: None,
        featured: None,
        sort_order: None,
        sections: None,
        features: None,
        applications: None,
        stats: None,
        related_courses: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_hydrates_default_slot_groups(pool: PgPool) {
    let post = BlogPostRepo::create(&pool, &new_post("Why Excel Still Matters"))
        .await
        .unwrap();
    assert_eq!(post.slug, "why-excel-still-matters");

    let page = BlogPostRepo::page_by_slug(&pool, &post.slug)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.features.len(), 4);
    assert_eq!(page.applications.len(), 5);
    assert_eq!(page.stats.len(), 3);
    assert_eq!(page.related_courses.len(), 3);
    assert_eq!(page.features[0].title, "Pivot Tables");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slug_is_deduplicated(pool: PgPool) {
    let first = BlogPostRepo::create(&pool, &new_post("SQL for Analysts"))
        .await
        .unwrap();
    let second = BlogPostRepo::create(&pool, &new_post("SQL for Analysts"))
        .await
        .unwrap();

    assert_eq!(first.slug, "sql-for-analysts");
    assert_eq!(second.slug, "sql-for-analysts-2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_published_excludes_drafts(pool: PgPool) {
    BlogPostRepo::create(&pool, &new_post("Published Post"))
        .await
        .unwrap();
    let mut draft = new_post("Draft Post");
    draft.is_published = Some(false);
    BlogPostRepo::create(&pool, &draft).await.unwrap();

    let published = BlogPostRepo::list_published(&pool).await.unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title, "Published Post");

    let all = BlogPostRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_by_slug_skips_drafts(pool: PgPool) {
    let mut draft = new_post("Unlisted");
    draft.is_published = Some(false);
    let post = BlogPostRepo::create(&pool, &draft).await.unwrap();

    let page = BlogPostRepo::page_by_slug(&pool, &post.slug).await.unwrap();
    assert!(page.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scalar_update_leaves_sections_and_groups_alone(pool: PgPool) {
    let post = BlogPostRepo::create(&pool, &new_post("Patch Me"))
        .await
        .unwrap();

    let mut patch = empty_update();
    patch.excerpt = Some("A new excerpt".to_string());
    let updated = BlogPostRepo::update(&pool, post.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.excerpt, "A new excerpt");
    assert_eq!(updated.title, "Patch Me");
    // Section fields keep their defaults.
    assert_eq!(updated.sections.cta_title, "Ready to Master Excel?");

    let page = BlogPostRepo::page_by_slug(&pool, &post.slug)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.features.len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn section_and_group_update_replaces_wholesale(pool: PgPool) {
    let post = BlogPostRepo::create(&pool, &new_post("Rewrite Me"))
        .await
        .unwrap();

    let mut sections = BlogSectionFields::default();
    sections.cta_title = "Start Learning SQL".to_string();
    sections.show_section_2 = false;

    let mut patch = empty_update();
    patch.sections = Some(sections);
    patch.stats = Some(vec![BlogStatInput {
        number: "90%".to_string(),
        label: "Placement rate".to_string(),
    }]);

    let updated = BlogPostRepo::update(&pool, post.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.sections.cta_title, "Start Learning SQL");
    assert!(!updated.sections.show_section_2);

    let page = BlogPostRepo::page_by_slug(&pool, &post.slug)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.stats.len(), 1);
    assert_eq!(page.stats[0].number, "90%");
    // Untouched groups survive.
    assert_eq!(page.applications.len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_post_and_groups(pool: PgPool) {
    let post = BlogPostRepo::create(&pool, &new_post("Short Lived"))
        .await
        .unwrap();
    assert!(BlogPostRepo::delete(&pool, post.id).await.unwrap());

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blog_features WHERE post_id = $1")
        .bind(post.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}
